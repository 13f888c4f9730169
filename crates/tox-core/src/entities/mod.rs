//! Entity structs for all toxscreen domain objects.
//!
//! `ChemicalRecord` is the one canonical record schema; per-source shapes are
//! converted into it by the adapters in `tox-engine`. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod aop;
mod observation;
mod record;

pub use aop::{AopEdge, AopGraph, AopNode};
pub use observation::ToxicityObservation;
pub use record::{ChemicalRecord, NewRecord};
