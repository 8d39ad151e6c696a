//! Appointment view aggregation
//!
//! The pure transformation layer behind the appointment table and the
//! dashboard: join the three fetched collections by id, filter, project the
//! upcoming slice, and count. Every function here is synchronous,
//! side-effect-free, and degrades per record on bad data — a dangling
//! reference or an unparsable date never aborts a whole view.

pub mod enrich;
pub mod filter;
pub mod summary;
pub mod upcoming;

pub use enrich::{enrich, EnrichedAppointment};
pub use filter::{filter_for_search, SearchFilter};
pub use summary::{summarize, ClinicSummary};
pub use upcoming::upcoming;
