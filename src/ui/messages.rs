//! Status output helpers. Tagged, colored lines so command feedback is
//! visually distinct from data output (lists, summaries).

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}info:{} {}", FG_BLUE, BOLD, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}ok:{} {}", FG_GREEN, BOLD, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}warning:{} {}", FG_YELLOW, BOLD, RESET, msg);
}

/// Failures go to stderr; `run()`'s error path ends up here.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}error:{} {}", FG_RED, BOLD, RESET, msg);
}

/// Section title above list and summary output.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}-- {} --{}", FG_BLUE, BOLD, msg, RESET);
}
