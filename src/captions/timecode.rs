//! Timecode Conversion
//!
//! Converts between millisecond offsets and the two subtitle timestamp
//! encodings: SRT (`HH:MM:SS,mmm`) and WebVTT (`HH:MM:SS.mmm`).
//!
//! All conversion is plain integer division/modulo over the offset.
//! Hours are not wrapped at 24, so sources longer than a day format
//! correctly ("25:00:00,000" stays 25 hours, never rolls over a date).

use crate::TimeMs;

/// Decomposes a millisecond offset into (hours, minutes, seconds, millis)
fn decompose(total_ms: TimeMs) -> (TimeMs, TimeMs, TimeMs, TimeMs) {
    let ms = total_ms % 1000;
    let total_secs = total_ms / 1000;
    let secs = total_secs % 60;
    let total_mins = total_secs / 60;
    let mins = total_mins % 60;
    let hours = total_mins / 60;
    (hours, mins, secs, ms)
}

/// Formats a millisecond offset as an SRT timestamp (`00:00:00,000`)
pub fn format_srt_timestamp(total_ms: TimeMs) -> String {
    let (hours, mins, secs, ms) = decompose(total_ms);
    format!("{:02}:{:02}:{:02},{:03}", hours, mins, secs, ms)
}

/// Formats a millisecond offset as a WebVTT timestamp (`00:00:00.000`)
pub fn format_vtt_timestamp(total_ms: TimeMs) -> String {
    let (hours, mins, secs, ms) = decompose(total_ms);
    format!("{:02}:{:02}:{:02}.{:03}", hours, mins, secs, ms)
}

/// Parses an `HH:MM:SS,mmm` or `HH:MM:SS.mmm` timestamp into milliseconds
///
/// Accepts either millisecond separator. Returns `None` for anything
/// that does not match the three-field, three-millisecond-digit shape.
pub fn parse_timestamp(ts: &str) -> Option<TimeMs> {
    let ts = ts.trim();
    let (clock, millis) = ts.rsplit_once([',', '.'])?;
    if millis.len() != 3 {
        return None;
    }
    let millis: TimeMs = millis.parse().ok()?;

    let fields: Vec<&str> = clock.split(':').collect();
    if fields.len() != 3 {
        return None;
    }

    let hours: TimeMs = fields[0].parse().ok()?;
    let mins: TimeMs = fields[1].parse().ok()?;
    let secs: TimeMs = fields[2].parse().ok()?;
    if fields[1].len() != 2 || fields[2].len() != 2 || mins > 59 || secs > 59 {
        return None;
    }

    Some(((hours * 60 + mins) * 60 + secs) * 1000 + millis)
}

/// Converts an SRT timestamp to WebVTT form (comma -> period)
pub fn srt_to_vtt_timestamp(ts: &str) -> String {
    ts.replace(',', ".")
}

/// Converts a WebVTT timestamp to SRT form (period -> comma)
pub fn vtt_to_srt_timestamp(ts: &str) -> String {
    ts.replace('.', ",")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_srt_timestamp() {
        assert_eq!(format_srt_timestamp(0), "00:00:00,000");
        assert_eq!(format_srt_timestamp(1500), "00:00:01,500");
        assert_eq!(format_srt_timestamp(90_000), "00:01:30,000");
        assert_eq!(format_srt_timestamp(5_400_000), "01:30:00,000");
        assert_eq!(format_srt_timestamp(62_345), "00:01:02,345");
    }

    #[test]
    fn test_format_vtt_timestamp() {
        assert_eq!(format_vtt_timestamp(0), "00:00:00.000");
        assert_eq!(format_vtt_timestamp(62_345), "00:01:02.345");
        assert_eq!(format_vtt_timestamp(90_000), "00:01:30.000");
    }

    #[test]
    fn test_format_beyond_24_hours() {
        // 25h must not wrap into a next "day"
        assert_eq!(format_srt_timestamp(25 * 3_600_000), "25:00:00,000");
        assert_eq!(format_vtt_timestamp(25 * 3_600_000), "25:00:00.000");
    }

    #[test]
    fn test_parse_timestamp_both_separators() {
        assert_eq!(parse_timestamp("00:01:02,345"), Some(62_345));
        assert_eq!(parse_timestamp("00:01:02.345"), Some(62_345));
        assert_eq!(parse_timestamp("01:30:00,000"), Some(5_400_000));
        assert_eq!(parse_timestamp("25:00:00,000"), Some(25 * 3_600_000));
    }

    #[test]
    fn test_parse_timestamp_rejects_malformed() {
        assert_eq!(parse_timestamp("00:00:invalid"), None);
        assert_eq!(parse_timestamp("00:00,000"), None);
        assert_eq!(parse_timestamp("00:00:00,12"), None);
        assert_eq!(parse_timestamp("00:61:00,000"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_separator_conversion() {
        assert_eq!(srt_to_vtt_timestamp("00:01:02,345"), "00:01:02.345");
        assert_eq!(vtt_to_srt_timestamp("00:01:02.345"), "00:01:02,345");
    }

    #[test]
    fn test_round_trip_through_text() {
        for ms in [0, 1, 999, 1000, 61_001, 3_599_999, 90_000_123] {
            let text = format_srt_timestamp(ms);
            assert_eq!(parse_timestamp(&text), Some(ms));
        }
    }
}
