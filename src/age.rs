const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Ten days old means the station has no data.
const STALE: u64 = 10 * DAY;

/// Describe a data age in seconds, e.g. "4 Minutes 2 Seconds".
///
/// The smaller unit is rounded in the hours and days buckets, so a value like
/// 3599 seconds past the hour reads as "60 Minutes" rather than carrying over.
pub fn format_age(age: u64) -> String {
    if age < MINUTE {
        return format!("{} Seconds", age);
    }

    if age < HOUR {
        return format!("{} Minutes {} Seconds", age / MINUTE, age % MINUTE);
    }

    if age < DAY {
        return format!("{} Hours {} Minutes", age / HOUR, round_div(age % HOUR, MINUTE));
    }

    if age >= STALE {
        return "No recent data".to_string();
    }

    format!("{} Days {} Hours", age / DAY, round_div(age % DAY, HOUR))
}

fn round_div(value: u64, unit: u64) -> u64 {
    (value + unit / 2) / unit
}
