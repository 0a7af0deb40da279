use chrono::NaiveDateTime;

use crate::error::{NotifyError, Result};

/// Storage format of calendar entries after joining date and time
const STORED_FORMAT: &str = "%Y.%m.%d %H:%M";
/// Display format used in notification titles
const DISPLAY_FORMAT: &str = "%I:%M %p %d.%m.%y";

/// Convert a stored `YYYY.MM.DD` date and `HH_MM` time into `hh:mm AM/PM dd.mm.yy`
pub fn format_event_datetime(date: &str, time: &str) -> Result<String> {
    let stored = format!("{} {}", date, time.replace('_', ":"));

    let parsed = NaiveDateTime::parse_from_str(&stored, STORED_FORMAT).map_err(|source| {
        NotifyError::Format {
            date: date.to_string(),
            time: time.to_string(),
            source,
        }
    })?;

    Ok(parsed.format(DISPLAY_FORMAT).to_string())
}
