//! Parsing Jalali date-times with strftime-style layouts.
//!
//! A [`Layout`] is compiled once into a sequence of literal runs and numeric
//! captures, then matched against any number of values. `%Y %y %m %d %H %M
//! %S` each capture a run of ASCII digits; `%%` matches `%`, `%n` a newline,
//! and everything else matches itself. The match may start anywhere in the
//! value and need not reach its end.
//!
//! Captures are read by position, not by directive letter: the first six are
//! year, month, day, hour, minute and second, in that order.

use jalali_calendar::is_valid_jalali_date;
use tracing::debug;

use crate::datetime::{JalaliDateTime, MAX_YEAR};
use crate::error::ParseError;
use crate::zone::Zone;

/// Number of captures a layout must provide.
const REQUIRED_CAPTURES: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Number,
}

/// A compiled parse layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    source: String,
    tokens: Vec<Token>,
    captures: usize,
}

impl Layout {
    /// Compiles a layout string. Every string is a valid layout; one with
    /// fewer than six numeric directives simply never matches.
    pub fn compile(layout: &str) -> Self {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = layout.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }
            match chars.peek().copied() {
                Some('Y' | 'y' | 'm' | 'd' | 'H' | 'M' | 'S') => {
                    chars.next();
                    if !literal.is_empty() {
                        tokens.push(Token::Literal(std::mem::take(&mut literal)));
                    }
                    tokens.push(Token::Number);
                }
                Some('%') => {
                    chars.next();
                    literal.push('%');
                }
                Some('n') => {
                    chars.next();
                    literal.push('\n');
                }
                _ => literal.push('%'),
            }
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        let captures = tokens.iter().filter(|t| **t == Token::Number).count();
        Self {
            source: layout.to_string(),
            tokens,
            captures,
        }
    }

    /// The layout string this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Parses `value` as a wall-clock time in `zone`.
    ///
    /// # Errors
    ///
    /// - [`ParseError::LayoutMismatch`] if the value does not match or the
    ///   layout has fewer than six numeric directives.
    /// - [`ParseError::InvalidNumber`] if a digit run does not fit in an
    ///   integer.
    /// - [`ParseError::InvalidDate`] if year, month and day are not a valid
    ///   Jalali date.
    /// - [`ParseError::Invalid`] if the time of day is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use jalali_time::{Layout, Zone};
    ///
    /// let layout = Layout::compile("%Y-%m-%d %H:%M:%S");
    /// let dt = layout.parse("1400-01-01 12:00:00", Zone::tehran()).unwrap();
    /// assert_eq!(dt.to_string(), "1400/01/01 12:00:00");
    /// ```
    pub fn parse(&self, value: &str, zone: Zone) -> Result<JalaliDateTime, ParseError> {
        let mismatch = || ParseError::LayoutMismatch {
            layout: self.source.clone(),
            value: value.to_string(),
        };
        if self.captures < REQUIRED_CAPTURES {
            debug!(
                layout = %self.source,
                captures = self.captures,
                "layout has too few numeric directives"
            );
            return Err(mismatch());
        }
        let Some(spans) = self.find(value) else {
            debug!(layout = %self.source, value, "value does not match layout");
            return Err(mismatch());
        };

        let field = |i: usize| -> Result<u32, ParseError> {
            let digits = &value[spans[i].0..spans[i].1];
            digits.parse().map_err(|_| ParseError::InvalidNumber {
                value: digits.to_string(),
            })
        };
        let year_digits = &value[spans[0].0..spans[0].1];
        let year: i32 = year_digits.parse().map_err(|_| ParseError::InvalidNumber {
            value: year_digits.to_string(),
        })?;
        let (month, day) = (field(1)?, field(2)?);
        let (hour, minute, second) = (field(3)?, field(4)?, field(5)?);

        if year > MAX_YEAR || !is_valid_jalali_date(year, month, day) {
            return Err(ParseError::InvalidDate { year, month, day });
        }
        let dt = JalaliDateTime::new(year, month, day, hour, minute, second, 0, zone)?;
        Ok(dt)
    }

    /// Finds the leftmost match and returns the byte spans of its captures.
    fn find(&self, value: &str) -> Option<Vec<(usize, usize)>> {
        let mut matcher = Matcher {
            tokens: &self.tokens,
            value,
            failed: vec![false; self.tokens.len() * (value.len() + 1)],
            spans: Vec::with_capacity(self.captures),
        };
        let starts = value.char_indices().map(|(i, _)| i);
        for start in starts.chain(std::iter::once(value.len())) {
            matcher.spans.clear();
            if matcher.match_from(0, start) {
                return Some(matcher.spans);
            }
        }
        None
    }
}

/// Backtracking state for one `Layout::find` call.
///
/// Whether `tokens[token..]` matches at `pos` depends on nothing else, so a
/// failed `(token, pos)` pair is recorded once and never explored again,
/// across all start offsets. This bounds the search by
/// `tokens × value.len()²` steps.
struct Matcher<'a> {
    tokens: &'a [Token],
    value: &'a str,
    failed: Vec<bool>,
    spans: Vec<(usize, usize)>,
}

impl Matcher<'_> {
    /// Matches `tokens[token..]` at byte offset `pos`. Digit runs are tried
    /// longest first and shortened on failure.
    fn match_from(&mut self, token: usize, pos: usize) -> bool {
        let tokens = self.tokens;
        let Some(current) = tokens.get(token) else {
            return true;
        };
        let state = token * (self.value.len() + 1) + pos;
        if self.failed[state] {
            return false;
        }
        let matched = match current {
            Token::Literal(text) => {
                self.value[pos..].starts_with(text.as_str())
                    && self.match_from(token + 1, pos + text.len())
            }
            Token::Number => {
                let run = self.value[pos..]
                    .bytes()
                    .take_while(u8::is_ascii_digit)
                    .count();
                (1..=run).rev().any(|len| {
                    self.spans.push((pos, pos + len));
                    let rest = self.match_from(token + 1, pos + len);
                    if !rest {
                        self.spans.pop();
                    }
                    rest
                })
            }
        };
        if !matched {
            self.failed[state] = true;
        }
        matched
    }
}

/// Parses `value` with `layout` as a UTC wall-clock time.
///
/// # Errors
///
/// See [`Layout::parse`].
pub fn parse(layout: &str, value: &str) -> Result<JalaliDateTime, ParseError> {
    parse_in_zone(layout, value, Zone::utc())
}

/// Parses `value` with `layout` as a wall-clock time in `zone`.
///
/// # Errors
///
/// See [`Layout::parse`].
pub fn parse_in_zone(layout: &str, value: &str, zone: Zone) -> Result<JalaliDateTime, ParseError> {
    Layout::compile(layout).parse(value, zone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimeError;

    const FULL: &str = "%Y-%m-%d %H:%M:%S";

    #[test]
    fn compile_tokens() {
        let layout = Layout::compile("%Y/%m%%%n%Q");
        assert_eq!(
            layout.tokens,
            vec![
                Token::Number,
                Token::Literal("/".into()),
                Token::Number,
                Token::Literal("%\n%Q".into()),
            ]
        );
        assert_eq!(layout.captures, 2);
        assert_eq!(layout.as_str(), "%Y/%m%%%n%Q");
    }

    #[test]
    fn valid_input() {
        let dt = parse(FULL, "1400-01-01 12:00:00").unwrap();
        assert_eq!(
            dt,
            JalaliDateTime::new(1400, 1, 1, 12, 0, 0, 0, Zone::utc()).unwrap()
        );
    }

    #[test]
    fn zone_is_attached() {
        let dt = parse_in_zone(FULL, "1400-01-01 12:00:00", Zone::tehran()).unwrap();
        assert_eq!(dt.zone().name(), "Asia/Tehran");
    }

    #[test]
    fn invalid_month() {
        let err = parse(FULL, "1400-13-01 12:00:00").unwrap_err();
        assert_eq!(err.to_string(), "invalid Jalali date: 1400/13/01");
    }

    #[test]
    fn invalid_leap_day() {
        let err = parse(FULL, "1400-12-30 00:00:00").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidDate {
                year: 1400,
                month: 12,
                day: 30
            }
        );
        assert!(parse(FULL, "1399-12-30 00:00:00").is_ok());
    }

    #[test]
    fn year_past_range_is_invalid_date() {
        assert!(matches!(
            parse(FULL, "10000-01-01 00:00:00"),
            Err(ParseError::InvalidDate { year: 10000, .. })
        ));
    }

    #[test]
    fn invalid_time_of_day() {
        assert_eq!(
            parse(FULL, "1400-01-01 24:00:00").unwrap_err(),
            ParseError::Invalid(TimeError::HourOutOfRange { hour: 24 })
        );
    }

    #[test]
    fn mismatch() {
        assert!(matches!(
            parse(FULL, "not a date"),
            Err(ParseError::LayoutMismatch { .. })
        ));
        assert!(matches!(
            parse("%Y-%m-%d", "1400-01-01"),
            Err(ParseError::LayoutMismatch { .. })
        ));
    }

    #[test]
    fn oversized_number() {
        assert!(matches!(
            parse(FULL, "1400-01-99999999999 00:00:00"),
            Err(ParseError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn match_starts_anywhere() {
        let dt = parse(FULL, "at 1400-02-03 04:05:06 sharp").unwrap();
        assert_eq!(dt.to_string(), "1400/02/03 04:05:06");
    }

    #[test]
    fn captures_are_positional() {
        // Letters do not matter, only order: the first capture is the year.
        let dt = parse("%d/%m/%Y %S:%M:%H", "1400/05/06 07:08:09").unwrap();
        assert_eq!(dt.to_string(), "1400/05/06 07:08:09");
    }

    #[test]
    fn adjacent_captures_backtrack() {
        // Greedy runs leave one digit for each later capture.
        assert_eq!(
            parse("%Y%m%d%H%M%S", "14000101120000").unwrap_err(),
            ParseError::InvalidDate {
                year: 140_001_011,
                month: 2,
                day: 0
            }
        );
        let dt = parse("%Y%m%d%H%M%S", "140011234").unwrap();
        assert_eq!(dt.to_string(), "1400/01/01 02:03:04");
    }

    #[test]
    fn long_digit_run_fails_quickly() {
        let value = "1".repeat(200);
        let started = std::time::Instant::now();
        assert!(matches!(
            parse("%Y%m%d%H%M%S:", &value),
            Err(ParseError::LayoutMismatch { .. })
        ));
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
    }

    #[test]
    fn failed_states_do_not_hide_later_matches() {
        // Every start inside the first run fails and is remembered; the
        // leftmost full match begins after the space.
        let dt = parse("%Y%m%d%H%M%S:", "1111111 140011234:").unwrap();
        assert_eq!(dt.to_string(), "1400/01/01 02:03:04");
    }

    #[test]
    fn percent_and_newline_literals() {
        let dt = parse("%Y%%%m%n%d %H:%M:%S", "1400%02\n03 01:02:03").unwrap();
        assert_eq!(dt.format_short(), "1400/02/03");
    }

    #[test]
    fn non_ascii_literals() {
        let dt = parse("%Y سال %m ماه %d %H:%M:%S", "1401 سال 7 ماه 4 10:00:00").unwrap();
        assert_eq!(dt.format_short(), "1401/07/04");
    }
}
