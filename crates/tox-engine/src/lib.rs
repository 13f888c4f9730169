//! # tox-engine
//!
//! Pure data transformations behind the toxscreen dashboards.
//!
//! - [`classify`] holds threshold schemes and risk policies
//! - [`stats`] summarizes distributions for charting
//! - [`query`] searches, filters, stably sorts, and paginates
//! - [`compare`] finds the minimum effect concentration per chemical
//! - [`export`] writes delimited text and JSON snapshots
//! - [`adapter`] converts per-source rows to [`ChemicalRecord`]
//!
//! Nothing here touches storage or rendering, and nothing here fails on
//! well-typed input.
//!
//! [`ChemicalRecord`]: tox_core::entities::ChemicalRecord

pub mod adapter;
pub mod classify;
pub mod compare;
pub mod export;
pub mod query;
pub mod stats;
