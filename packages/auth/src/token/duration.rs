// ABOUTME: Duration formatting for token lifetimes
// ABOUTME: Converts whole seconds into a fixed "Xd Xh Xm Xs" string

const SECONDS_PER_DAY: u64 = 24 * 3600;
const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Shown instead of a zero countdown.
pub const EXPIRED_LABEL: &str = "Expired";

/// Format seconds as `"{days}d {hours}h {minutes}m {seconds}s"`.
///
/// Zero is not special-cased and yields `"0d 0h 0m 0s"`; use
/// [`format_remaining`] when an expired token should read "Expired".
pub fn format_time(seconds: u64) -> String {
    let days = seconds / SECONDS_PER_DAY;
    let rest = seconds % SECONDS_PER_DAY;
    let hours = rest / SECONDS_PER_HOUR;
    let rest = rest % SECONDS_PER_HOUR;
    let minutes = rest / SECONDS_PER_MINUTE;
    let seconds = rest % SECONDS_PER_MINUTE;

    format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
}

/// Display value for a remaining lifetime.
pub fn format_remaining(remaining_seconds: u64) -> String {
    if remaining_seconds > 0 {
        format_time(remaining_seconds)
    } else {
        EXPIRED_LABEL.to_string()
    }
}
