//! Business logic
//!
//! The core of odonto: snapshot loading, appointment view aggregation, and
//! roster search. Everything below `snapshot` is pure and synchronous.

pub mod schedule;
pub mod search;
pub mod snapshot;

pub use snapshot::ClinicSnapshot;
