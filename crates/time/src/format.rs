//! strftime-style formatting of [`JalaliDateTime`].
//!
//! | Directive | Output |
//! |-----------|--------|
//! | `%Y` | year, at least 4 digits |
//! | `%y` | year modulo 100, 2 digits |
//! | `%m` | month number, 2 digits |
//! | `%B` | Persian month name |
//! | `%b` | first three characters of the Persian month name |
//! | `%d` | day of the month, 2 digits |
//! | `%H` `%M` `%S` | hour, minute, second, 2 digits each |
//! | `%p` | `صبح` before noon, `عصر` from noon |
//! | `%w` | Persian weekday name |
//! | `%z` | UTC offset as `±HHMM` |
//! | `%Z` | zone name |
//! | `%R` | `HH:MM` |
//! | `%T` | `HH:MM:SS` |
//! | `%n` | newline |
//! | `%%` | `%` |
//!
//! Any other `%` pair is copied to the output unchanged, as is a trailing
//! lone `%`.

use std::fmt::{self, Write};

use crate::datetime::JalaliDateTime;

/// Layout used by `Display`.
pub const DEFAULT_LAYOUT: &str = "%Y/%m/%d %T";
const SHORT_LAYOUT: &str = "%Y/%m/%d";
const LONG_LAYOUT: &str = "%d %B %Y";

const BEFORE_NOON: &str = "صبح";
const AFTER_NOON: &str = "عصر";

impl JalaliDateTime {
    /// Formats the value according to `layout`.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali_time::{JalaliDateTime, Zone};
    ///
    /// let dt = JalaliDateTime::new(1380, 7, 25, 10, 25, 30, 0, Zone::utc()).unwrap();
    /// assert_eq!(dt.format("%Y/%m/%d"), "1380/07/25");
    /// assert_eq!(dt.format("%y/%B/%d"), "80/مهر/25");
    /// ```
    pub fn format(&self, layout: &str) -> String {
        let mut out = String::with_capacity(layout.len() + 16);
        self.write_layout(&mut out, layout)
            .expect("writing to a String cannot fail");
        out
    }

    /// `YYYY/MM/DD`.
    pub fn format_short(&self) -> String {
        self.format(SHORT_LAYOUT)
    }

    /// Day, Persian month name and year, e.g. `20 اردیبهشت 1398`.
    pub fn format_long(&self) -> String {
        self.format(LONG_LAYOUT)
    }

    fn write_layout<W: Write>(&self, out: &mut W, layout: &str) -> fmt::Result {
        let mut chars = layout.chars();
        while let Some(c) = chars.next() {
            if c != '%' {
                out.write_char(c)?;
                continue;
            }
            let Some(directive) = chars.next() else {
                out.write_char('%')?;
                break;
            };
            match directive {
                'n' => out.write_char('\n')?,
                '%' => out.write_char('%')?,
                'Y' => write!(out, "{:04}", self.year())?,
                'y' => write!(out, "{:02}", self.year() % 100)?,
                'm' => write!(out, "{:02}", self.month().number())?,
                'B' => out.write_str(self.month().persian_name())?,
                'b' => {
                    for c in self.month().persian_name().chars().take(3) {
                        out.write_char(c)?;
                    }
                }
                'd' => write!(out, "{:02}", self.day())?,
                'H' => write!(out, "{:02}", self.hour())?,
                'M' => write!(out, "{:02}", self.minute())?,
                'S' => write!(out, "{:02}", self.second())?,
                'p' => out.write_str(if self.hour() < 12 { BEFORE_NOON } else { AFTER_NOON })?,
                'w' => out.write_str(self.weekday().persian_name())?,
                'z' => {
                    let (_, offset) = self.zone_abbreviation_and_offset();
                    let sign = if offset < 0 { '-' } else { '+' };
                    let offset = offset.unsigned_abs();
                    write!(out, "{sign}{:02}{:02}", offset / 3600, offset % 3600 / 60)?;
                }
                'Z' => out.write_str(self.zone().name())?,
                'R' => write!(out, "{:02}:{:02}", self.hour(), self.minute())?,
                'T' => write!(
                    out,
                    "{:02}:{:02}:{:02}",
                    self.hour(),
                    self.minute(),
                    self.second()
                )?,
                other => {
                    out.write_char('%')?;
                    out.write_char(other)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for JalaliDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_layout(f, DEFAULT_LAYOUT)
    }
}
