pub mod calculator;
pub mod guard;
pub mod normalize;
