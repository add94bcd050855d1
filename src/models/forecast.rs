use rust_decimal::Decimal;
use serde::Deserialize;

use super::deserialize_month;

/// Projected spend for one category in one month.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRecord {
    #[serde(deserialize_with = "deserialize_month")]
    pub month: i32,
    pub category: String,
    pub forecast_amount: Decimal,
}

#[cfg(test)]
impl ForecastRecord {
    pub fn new(month: i32, category: impl Into<String>, forecast_amount: Decimal) -> Self {
        Self {
            month,
            category: category.into(),
            forecast_amount,
        }
    }
}
