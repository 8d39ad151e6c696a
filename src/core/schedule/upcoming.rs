//! Upcoming-appointment projection
//!
//! The dashboard's "next N" view: keep appointments at or after `now`, sort
//! ascending by their scheduled instant, truncate. Timestamps are
//! facility-local wall clock; `now` is supplied by the caller so this module
//! stays pure.

use super::enrich::EnrichedAppointment;
use chrono::NaiveDateTime;

/// Selects the next `limit` appointments at or after `now`
///
/// Records whose date or time doesn't parse are non-comparable and are
/// excluded from this projection only, never an error. The sort is stable,
/// so appointments sharing an instant keep their input order. Pure function;
/// doesn't mutate its input.
pub fn upcoming(
    enriched: &[EnrichedAppointment],
    now: NaiveDateTime,
    limit: usize,
) -> Vec<EnrichedAppointment> {
    let mut future: Vec<(NaiveDateTime, &EnrichedAppointment)> = enriched
        .iter()
        .filter_map(|e| e.appointment.scheduled_at().map(|at| (at, e)))
        .filter(|(at, _)| *at >= now)
        .collect();

    future.sort_by_key(|(at, _)| *at);
    future.truncate(limit);

    future.into_iter().map(|(_, e)| e.clone()).collect()
}
