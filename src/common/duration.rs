use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::models::giveaway::GiveawayError;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GiveawayDuration {
    pub seconds: u64,
}

impl GiveawayDuration {
    /// Parses `<integer><unit>` where the unit is one of `s`, `m`, `h` or `d`.
    pub fn parse(string: &str) -> Result<GiveawayDuration, GiveawayError> {
        debug!("Parsing duration: {}", string);

        lazy_static! {
            static ref DURATION_REGEX: Regex = Regex::new(r"^(\d+)([smhd])$").unwrap();
        }

        let lowered = string.trim().to_lowercase();
        let Some(capture) = DURATION_REGEX.captures(&lowered) else {
            return Err(GiveawayError::InvalidDurationFormat(string.to_string()));
        };

        let Ok(value) = capture[1].parse::<u64>() else {
            return Err(GiveawayError::InvalidDurationFormat(string.to_string()));
        };

        let multiplier = match &capture[2] {
            "s" => 1,
            "m" => MINUTE,
            "h" => HOUR,
            "d" => DAY,
            _ => return Err(GiveawayError::InvalidDurationFormat(string.to_string())),
        };

        let Some(seconds) = value.checked_mul(multiplier) else {
            return Err(GiveawayError::InvalidDurationFormat(string.to_string()));
        };

        let duration = GiveawayDuration { seconds };
        debug!("Parsed duration: {:?}", duration);
        Ok(duration)
    }
}

/// Renders a remaining-seconds value for display. Not meant to be parsed back.
pub fn format_remaining(seconds: u64) -> String {
    let days = seconds / DAY;
    let hours = (seconds % DAY) / HOUR;
    let minutes = (seconds % HOUR) / MINUTE;
    let secs = seconds % MINUTE;

    if seconds >= DAY {
        format!("{days}d {hours}h {minutes}m {secs}s")
    } else if seconds >= HOUR {
        format!("{hours}h {minutes}m {secs}s")
    } else if seconds >= MINUTE {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

#[cfg(test)]
mod tests {
    use super::{format_remaining, GiveawayDuration};
    use crate::models::giveaway::GiveawayError;

    #[test]
    fn test_parse_each_unit() {
        assert_eq!(GiveawayDuration::parse("90s").unwrap().seconds, 90);
        assert_eq!(GiveawayDuration::parse("2m").unwrap().seconds, 120);
        assert_eq!(GiveawayDuration::parse("1h").unwrap().seconds, 3600);
        assert_eq!(GiveawayDuration::parse("3d").unwrap().seconds, 259_200);
    }

    #[test]
    fn test_parse_ignores_case_and_surrounding_whitespace() {
        assert_eq!(GiveawayDuration::parse(" 5M ").unwrap().seconds, 300);
    }

    #[test]
    fn test_parse_zero_is_a_valid_format() {
        assert_eq!(GiveawayDuration::parse("0s").unwrap().seconds, 0);
    }

    #[test]
    fn test_parse_rejects_malformed_strings() {
        for input in ["10x", "abc", "", "-5m", "5", "m", "1h30m", "1.5h", "5 m"] {
            let result = GiveawayDuration::parse(input);
            assert_eq!(
                result,
                Err(GiveawayError::InvalidDurationFormat(input.to_string())),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflowing_values() {
        let result = GiveawayDuration::parse("18446744073709551615d");
        assert!(matches!(
            result,
            Err(GiveawayError::InvalidDurationFormat(_))
        ));

        let result = GiveawayDuration::parse("99999999999999999999999s");
        assert!(matches!(
            result,
            Err(GiveawayError::InvalidDurationFormat(_))
        ));
    }

    #[test]
    fn test_format_seconds_only() {
        assert_eq!(format_remaining(0), "0s");
        assert_eq!(format_remaining(59), "59s");
    }

    #[test]
    fn test_format_minutes_and_seconds() {
        assert_eq!(format_remaining(60), "1m 0s");
        assert_eq!(format_remaining(125), "2m 5s");
    }

    #[test]
    fn test_format_hours_minutes_and_seconds() {
        assert_eq!(format_remaining(3600), "1h 0m 0s");
        assert_eq!(format_remaining(3725), "1h 2m 5s");
    }

    #[test]
    fn test_format_days() {
        assert_eq!(format_remaining(90_061), "1d 1h 1m 1s");
    }
}
