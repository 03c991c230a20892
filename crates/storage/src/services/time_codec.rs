//! Race clock strings (`MM:SS.ss` / `MM:SS.sss`) to and from elapsed seconds.
//!
//! Parsing never panics or errors. Callers choose how malformed input degrades:
//! [`parse_time`] returns `None`, [`parse_time_or_zero`] gives the neutral `0.0`
//! and [`parse_time_or_worst`] gives `+inf` so malformed clocks sort last.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fractional-second digits used when rendering a clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TimePrecision {
    #[default]
    Hundredths,
    Milliseconds,
}

impl TimePrecision {
    pub fn digits(self) -> usize {
        match self {
            Self::Hundredths => 2,
            Self::Milliseconds => 3,
        }
    }

    pub fn from_digits(digits: u8) -> Option<Self> {
        match digits {
            2 => Some(Self::Hundredths),
            3 => Some(Self::Milliseconds),
            _ => None,
        }
    }

    fn scale(self) -> u64 {
        match self {
            Self::Hundredths => 100,
            Self::Milliseconds => 1000,
        }
    }

    /// Largest difference a format/parse round trip can introduce.
    pub fn tolerance(self) -> f64 {
        0.5 / self.scale() as f64
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses `M+:SS[.f+]` into elapsed seconds.
pub fn parse_time(text: &str) -> Option<f64> {
    let (minutes, seconds) = text.trim().split_once(':')?;

    if !all_digits(minutes) {
        return None;
    }

    let (whole, frac) = match seconds.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (seconds, None),
    };
    if !all_digits(whole) || whole.len() > 2 {
        return None;
    }
    if let Some(frac) = frac
        && !all_digits(frac)
    {
        return None;
    }

    let minutes: u32 = minutes.parse().ok()?;
    let seconds: f64 = seconds.parse().ok()?;
    if seconds >= 60.0 {
        return None;
    }

    Some(f64::from(minutes) * 60.0 + seconds)
}

/// Malformed input counts as zero elapsed time.
pub fn parse_time_or_zero(text: &str) -> f64 {
    parse_time(text).unwrap_or(0.0)
}

/// Malformed input counts as the worst possible time.
pub fn parse_time_or_worst(text: &str) -> f64 {
    parse_time(text).unwrap_or(f64::INFINITY)
}

/// Renders seconds as a zero-padded `MM:SS.ff` clock. Negative and non-finite
/// values render as zero.
pub fn format_time(seconds: f64, precision: TimePrecision) -> String {
    let seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    };

    let scale = precision.scale();
    // Round once in fixed point so 59.999 never renders as "00:60.00".
    let units = (seconds * scale as f64).round() as u64;
    let per_minute = 60 * scale;

    let minutes = units / per_minute;
    let remainder = units % per_minute;

    format!(
        "{:02}:{:02}.{:0width$}",
        minutes,
        remainder / scale,
        remainder % scale,
        width = precision.digits()
    )
}

/// Form-level check: exactly two minute digits, two second digits and two or
/// three fractional digits.
pub fn is_well_formed(text: &str) -> bool {
    let Some((minutes, seconds)) = text.split_once(':') else {
        return false;
    };
    let Some((whole, frac)) = seconds.split_once('.') else {
        return false;
    };

    minutes.len() == 2
        && whole.len() == 2
        && (frac.len() == 2 || frac.len() == 3)
        && parse_time(text).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("01:30.00"), Some(90.0));
        assert_eq!(parse_time("02:05.00"), Some(125.0));
        assert_eq!(parse_time("01:47.50"), Some(107.5));
        assert_eq!(parse_time("00:00.000"), Some(0.0));
        assert_eq!(parse_time("12:00"), Some(720.0));

        let parsed = parse_time("01:30.123").unwrap();
        assert!((parsed - 90.123).abs() < 1e-9);
    }

    #[test]
    fn test_parse_time_rejects_malformed_input() {
        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("90.5"), None);
        assert_eq!(parse_time("ab:30.00"), None);
        assert_eq!(parse_time("01:xx"), None);
        assert_eq!(parse_time("01:75.00"), None);
        assert_eq!(parse_time("-1:30.00"), None);
        assert_eq!(parse_time("01:30."), None);
        assert_eq!(parse_time("01:3e1"), None);
    }

    #[test]
    fn test_fallbacks_for_malformed_input() {
        assert_eq!(parse_time_or_zero("garbage"), 0.0);
        assert_eq!(parse_time_or_worst("garbage"), f64::INFINITY);
        assert_eq!(parse_time_or_zero("01:00.00"), 60.0);
        assert_eq!(parse_time_or_worst("01:00.00"), 60.0);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(90.0, TimePrecision::Hundredths), "01:30.00");
        assert_eq!(format_time(107.5, TimePrecision::Hundredths), "01:47.50");
        assert_eq!(format_time(90.123, TimePrecision::Milliseconds), "01:30.123");
        assert_eq!(format_time(5.0, TimePrecision::Milliseconds), "00:05.000");
        assert_eq!(format_time(754.25, TimePrecision::Hundredths), "12:34.25");
    }

    #[test]
    fn test_format_time_carries_rounding_into_minutes() {
        assert_eq!(format_time(59.999, TimePrecision::Hundredths), "01:00.00");
        assert_eq!(format_time(119.9996, TimePrecision::Milliseconds), "02:00.000");
    }

    #[test]
    fn test_format_time_clamps_invalid_values() {
        assert_eq!(format_time(-3.0, TimePrecision::Hundredths), "00:00.00");
        assert_eq!(format_time(f64::NAN, TimePrecision::Hundredths), "00:00.00");
        assert_eq!(format_time(f64::INFINITY, TimePrecision::Milliseconds), "00:00.000");
    }

    #[test]
    fn test_round_trip_within_precision() {
        for precision in [TimePrecision::Hundredths, TimePrecision::Milliseconds] {
            let mut x = 0.0;
            while x < 400.0 {
                let parsed = parse_time(&format_time(x, precision)).unwrap();
                assert!(
                    (parsed - x).abs() <= precision.tolerance() + 1e-9,
                    "{x} -> {parsed} ({precision:?})"
                );
                x += 0.737;
            }
        }
    }

    #[test]
    fn test_is_well_formed() {
        assert!(is_well_formed("01:30.12"));
        assert!(is_well_formed("01:30.123"));
        assert!(!is_well_formed("1:30.12"));
        assert!(!is_well_formed("01:30"));
        assert!(!is_well_formed("01:30.1"));
        assert!(!is_well_formed("01:30.1234"));
        assert!(!is_well_formed("01:60.00"));
    }
}
