pub mod paid;
pub mod pay;
pub mod period;
pub mod weekly;

pub use paid::holiday_paid_minutes;
pub use period::PeriodTotals;
pub use weekly::WeekBucket;
