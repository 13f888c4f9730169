//! # tox-store
//!
//! Data access for toxscreen.
//!
//! [`RecordRepository`] and [`ObservationRepository`] are the seams the CLI
//! and tests depend on. [`MemoryStore`] implements both over the reference
//! pollutant fixture or a JSON seed file. [`FetchCoordinator`] sequences
//! concurrent fetches so only the newest result reaches a view.

pub mod error;
pub mod fixture;
mod memory;
mod repo;
pub mod seed;
mod sequence;

pub use error::StoreError;
pub use memory::{MemoryStore, require_record};
pub use repo::{ObservationRepository, RecordRepository};
pub use seed::Seed;
pub use sequence::{FetchCoordinator, FetchHandle, FetchOutcome, LoadState};
