//! faceops-core — Domain types and pure logic for the faceops operator tools.
//!
//! Everything here is transport-agnostic: record flattening, active-name
//! list parsing, reconcile planning, and CSV export. HTTP lives in
//! `faceops-api`.

pub mod export;
pub mod namelist;
pub mod reconcile;
pub mod types;

pub use types::{MatchLogRecord, Profile};
