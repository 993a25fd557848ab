use chrono::NaiveDate;

/// Source of the date stamped on newly created users.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
