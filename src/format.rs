const SECOND_MS: i64 = 1000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Renders a millisecond duration as `Nd H:MM'SS"`, e.g. `1:02'03"` or
/// `2d 4:05'06"`. With `hide_millis` unset, leftover milliseconds are
/// appended as a decimal fraction instead of the closing quote.
pub fn format_duration(duration_ms: i64, hide_millis: bool) -> String {
    let mut rest = duration_ms.max(0);
    let mut s = String::new();

    if rest >= DAY_MS {
        s.push_str(&format!("{}d ", rest / DAY_MS));
        rest %= DAY_MS;
    }

    if rest >= HOUR_MS {
        s.push_str(&format!("{}:", rest / HOUR_MS));
        rest %= HOUR_MS;
    }

    s.push_str(&format!("{:02}'", rest / MINUTE_MS));
    rest %= MINUTE_MS;

    s.push_str(&format!("{:02}", rest / SECOND_MS));
    rest %= SECOND_MS;

    if !hide_millis && rest > 0 {
        s.push_str(&format!(".{rest}"));
    } else {
        s.push('"');
    }

    s
}
