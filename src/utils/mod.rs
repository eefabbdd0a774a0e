pub mod date;
pub mod formatting;
pub mod time;

pub use formatting::{fmt_money, mins2readable};
