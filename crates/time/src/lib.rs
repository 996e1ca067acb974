//! # jalali-time
//!
//! Zoned Jalali date-time values built on the calendar math in
//! `jalali-calendar` and the zone database in `chrono-tz`.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["JalaliDateTime (wall clock + Zone)"] -->|"to_gregorian()"| B["NaiveDateTime"]
//!     B -->|"Zone::resolve()"| C["absolute instant"]
//!     C -->|"add(TimeDelta)"| C
//!     C -->|"Zone::localize()"| B
//!     B -->|"from_gregorian()"| A
//!     A -->|"add_months() / add_jalali_duration()"| A
//!     A -->|"format()"| D["text"]
//!     D -->|"Layout::parse()"| A
//! ```
//!
//! Field-based arithmetic edits the Jalali fields directly; instant-based
//! arithmetic goes through the absolute instant and back, so it follows
//! the zone's offset changes.
//!
//! ## Quick Start
//!
//! ```
//! use jalali_time::{JalaliDuration, Zone, parse_in_zone};
//!
//! let dt = parse_in_zone("%Y/%m/%d %H:%M:%S", "1399/02/28 08:00:00", Zone::tehran()).unwrap();
//! let later = dt.add_jalali_duration(JalaliDuration::new(1, 2, 3)).unwrap();
//! assert_eq!(later.format("%d %B %Y"), "31 تیر 1400");
//! assert_eq!(dt.days_between(&later), 431);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `datetime` | `JalaliDateTime` construction, conversion and views |
//! | `arithmetic` | Instant-based and field-based arithmetic |
//! | `duration` | `JalaliDuration` |
//! | `format` | strftime-style formatting |
//! | `parse` | `Layout` compilation and parsing |
//! | `zone` | `Zone`: IANA zones and fixed offsets |
//! | `clock` | `Clock` trait, `SystemClock`, `FixedClock` |
//! | `error` | Error types |

mod arithmetic;
mod clock;
mod datetime;
mod duration;
mod error;
mod format;
mod parse;
mod zone;

pub use clock::{Clock, FixedClock, SystemClock};
pub use datetime::{JalaliDateTime, MAX_YEAR, MIN_YEAR};
pub use duration::JalaliDuration;
pub use error::{ParseError, TimeError};
pub use format::DEFAULT_LAYOUT;
pub use parse::{Layout, parse, parse_in_zone};
pub use zone::Zone;

pub use jalali_calendar::{Month, Weekday};
