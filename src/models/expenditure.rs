use rust_decimal::Decimal;
use serde::Deserialize;

use super::deserialize_month;

/// Actual spend for one category in one month, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenditureRecord {
    /// 1-based month number. Not range-checked.
    #[serde(deserialize_with = "deserialize_month")]
    pub month: i32,
    pub category: String,
    pub total_amount: Decimal,
}

#[cfg(test)]
impl ExpenditureRecord {
    pub fn new(month: i32, category: impl Into<String>, total_amount: Decimal) -> Self {
        Self {
            month,
            category: category.into(),
            total_amount,
        }
    }
}
