mod expenditure;
mod forecast;
mod month;

pub use expenditure::ExpenditureRecord;
pub use forecast::ForecastRecord;
pub(crate) use month::deserialize_month;
