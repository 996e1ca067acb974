//! # jalali-recurrence
//!
//! Events that repeat every N days, enumerated over a range of Jalali
//! date-times.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["RecurringEvent (start, end, frequency)"] -->|"occurrences_iter()"| B["Occurrences"]
//!     B -->|"days_until() fast-forward"| C["first candidate"]
//!     C -->|"add(frequency)"| C
//!     C -->|"filter [start, end] ∩ [range_start, range_end]"| D["JalaliDateTime"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::TimeDelta;
//! use jalali_recurrence::RecurringEvent;
//! use jalali_time::{JalaliDateTime, Zone};
//!
//! let start = JalaliDateTime::from_date(1400, 9, 1, Zone::tehran()).unwrap();
//! let event = RecurringEvent::new(start, None, TimeDelta::weeks(2)).unwrap();
//! let from = JalaliDateTime::from_date(1400, 9, 1, Zone::tehran()).unwrap();
//! let to = JalaliDateTime::from_date(1400, 9, 30, Zone::tehran()).unwrap();
//! assert_eq!(event.occurrences(&from, &to).len(), 3);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `event` | `RecurringEvent` and the `Occurrences` iterator |
//! | `error` | Error types |

mod error;
mod event;

pub use error::RecurrenceError;
pub use event::{Occurrences, RecurringEvent};
