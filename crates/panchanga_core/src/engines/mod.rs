//! Element engines.
//!
//! Each engine is a free function over an immutable ephemeris, observer and
//! reference instant (normally sunrise). `*_at` functions do the full
//! evaluation including end-time search; `*_from_*` helpers are the pure
//! index rules.

pub mod day_duration;
pub mod karana;
pub mod masa;
pub mod nakshatra;
pub mod tithi;
pub mod vaara;
pub mod year;
pub mod yoga;

pub use day_duration::day_duration;
pub use karana::{karana_at, karana_from_phase};
pub use masa::{masa_at, masa_from_rashi, ritu};
pub use nakshatra::{nakshatra_at, nakshatra_from_longitude};
pub use tithi::{tithi_at, tithi_from_phase};
pub use vaara::vaara_at;
pub use year::{AHARGANA_EPOCH_JD, ahargana, elapsed_year, samvatsara};
pub use yoga::{yoga_at, yoga_from_total};
