//! # jalali-calendar
//!
//! Pure calendar math for the Jalali (Persian solar) calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Gregorian (y, m, d)"] -->|"gregorian_to_jalali()"| B["Jalali (y, Month, d)"]
//!     B -->|"jalali_to_gregorian()"| A
//!     B -->|"Month::days_in()"| C["month length"]
//!     C -.->|"is_leap_jalali_year()"| D["33-year cycle"]
//!     A -->|"julian_day_number()"| E["fractional JD"]
//!     B -->|"jalali_ordinal()"| F["day of year"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use jalali_calendar::{Month, days_in_month, gregorian_to_jalali, is_leap_jalali_year};
//!
//! assert_eq!(gregorian_to_jalali(2021, 3, 21), (1400, Month::Farvardin, 1));
//! assert!(is_leap_jalali_year(1399));
//! assert_eq!(days_in_month(1400, 12), 29);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `convert` | Gregorian <-> Jalali date conversion |
//! | `leap` | 33-year leap rule |
//! | `month` | `Month` names and lengths |
//! | `weekday` | `Weekday` names |
//! | `julian` | Julian day numbers |
//! | `ordinal` | Day-of-year table and date validity |
//! | `error` | Error types |

mod convert;
mod error;
mod julian;
mod leap;
mod month;
mod ordinal;
mod weekday;

pub use convert::{gregorian_to_jalali, jalali_to_gregorian};
pub use error::CalendarError;
pub use julian::julian_day_number;
pub use leap::is_leap_jalali_year;
pub use month::{Month, days_in_month};
pub use ordinal::{is_valid_jalali_date, jalali_ordinal};
pub use weekday::Weekday;
