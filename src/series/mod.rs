//! Reshapes flat actual and forecast records into a month-ordered,
//! category-keyed table.
//!
//! Actuals are applied first, forecasts second, so a forecast for the same
//! (month, category) pair replaces the actual amount. Month order is the
//! order in which months are first seen across that combined sequence.

use std::fmt;

use chrono::Month;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::{ExpenditureRecord, ForecastRecord};

const MONTH_KEY: &str = "month";

/// Display label for a month number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthLabel {
    Named(Month),
    /// Anything outside 1–12 labels itself.
    Raw(i32),
}

impl MonthLabel {
    pub fn from_number(n: i32) -> Self {
        u8::try_from(n)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map_or(Self::Raw(n), Self::Named)
    }
}

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(month) => write!(f, "{}", month.name()),
            Self::Raw(n) => write!(f, "{n}"),
        }
    }
}

impl Serialize for MonthLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Named(month) => serializer.serialize_str(month.name()),
            Self::Raw(n) => serializer.serialize_i32(*n),
        }
    }
}

/// One month of the series: categories in first-write order.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthEntry {
    label: MonthLabel,
    amounts: Vec<(String, Decimal)>,
}

impl MonthEntry {
    fn new(label: MonthLabel) -> Self {
        Self {
            label,
            amounts: Vec::new(),
        }
    }

    fn set(&mut self, category: &str, amount: Decimal) {
        match self.amounts.iter_mut().find(|(name, _)| name == category) {
            Some((_, slot)) => *slot = amount,
            None => self.amounts.push((category.to_string(), amount)),
        }
    }

    pub fn label(&self) -> MonthLabel {
        self.label
    }

    pub fn amounts(&self) -> &[(String, Decimal)] {
        &self.amounts
    }

    #[cfg(test)]
    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.amounts
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, amt)| *amt)
    }

    pub fn total(&self) -> Decimal {
        self.amounts.iter().map(|(_, amt)| *amt).sum()
    }
}

/// Serializes as `{"month": <label>, <category>: <amount>, ...}`.
///
/// A category literally named `month` takes the `month` key's value, the
/// same way an object spread over `{month}` would. The key is written once.
impl Serialize for MonthEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let shadowed = self.amounts.iter().find(|(name, _)| name == MONTH_KEY);
        let len = self.amounts.len() + usize::from(shadowed.is_none());
        let mut map = serializer.serialize_map(Some(len))?;
        match shadowed {
            Some((_, amount)) => map.serialize_entry(MONTH_KEY, &as_number(*amount))?,
            None => map.serialize_entry(MONTH_KEY, &self.label)?,
        }
        for (category, amount) in &self.amounts {
            if category != MONTH_KEY {
                map.serialize_entry(category, &as_number(*amount))?;
            }
        }
        map.end()
    }
}

fn as_number(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct MonthSeries {
    entries: Vec<MonthEntry>,
}

impl MonthSeries {
    pub fn build(actuals: &[ExpenditureRecord], forecasts: &[ForecastRecord]) -> Self {
        let mut series = Self::default();
        for rec in actuals {
            series.entry_mut(rec.month).set(&rec.category, rec.total_amount);
        }
        for rec in forecasts {
            series
                .entry_mut(rec.month)
                .set(&rec.category, rec.forecast_amount);
        }
        series
    }

    fn entry_mut(&mut self, month: i32) -> &mut MonthEntry {
        let label = MonthLabel::from_number(month);
        let idx = match self.entries.iter().position(|e| e.label == label) {
            Some(idx) => idx,
            None => {
                self.entries.push(MonthEntry::new(label));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx]
    }

    pub fn entries(&self) -> &[MonthEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every category in the series, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for (name, _) in self.entries.iter().flat_map(|e| e.amounts.iter()) {
            if !seen.contains(&name.as_str()) {
                seen.push(name.as_str());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests;
