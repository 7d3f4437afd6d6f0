pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Format of the timestamp stamped into the setup guide.
pub const GUIDE_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

pub fn guide_timestamp<Tz: chrono::TimeZone>(at: &chrono::DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(GUIDE_TIME_FORMAT).to_string()
}
