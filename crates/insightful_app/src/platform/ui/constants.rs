use std::time::Duration;

/// How often the loop wakes up to drain engine events when idle.
pub const TICK_INTERVAL: Duration = Duration::from_millis(75);
pub const SITE_NAME: &str = "Insightful Hover";
pub const CARD_WIDTH: usize = 44;
/// Longest avatar URI shown before eliding the middle.
pub const AVATAR_URI_PREVIEW: usize = 48;
/// Dollar amount per `#` in income bars.
pub const BAR_UNIT: i64 = 5_000;
