//! # tox-core
//!
//! Core types and error types for toxscreen.
//!
//! This crate provides the foundational types shared across all toxscreen crates:
//! - The canonical chemical record and toxicity observation structs
//! - Adverse-outcome-pathway graph data
//! - Risk tier, category, and dataset variant enums
//! - Cross-cutting error types
//! - Response shapes (record detail, export snapshot)

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
