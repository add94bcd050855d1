use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMonth {
    Number(i32),
    YearMonth(String),
}

/// Accepts either a bare month number or a `"YYYY-MM"` string.
/// Numbers are taken verbatim, so out-of-range values survive decoding.
pub(crate) fn deserialize_month<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match RawMonth::deserialize(deserializer)? {
        RawMonth::Number(n) => Ok(n),
        RawMonth::YearMonth(s) => parse_year_month(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid year-month: {s:?}"))),
    }
}

/// Extract the month number from `"YYYY-MM"`.
pub(crate) fn parse_year_month(s: &str) -> Option<i32> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .ok()
        .and_then(|d| i32::try_from(d.month()).ok())
}
