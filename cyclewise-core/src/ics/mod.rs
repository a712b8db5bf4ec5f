//! ICS export of cycle predictions.
//!
//! Writes projected events as all-day VEVENTs according to RFC 5545.

mod generate;

pub use generate::generate_ics;
