mod badge;
mod checkbox;
mod date_input;

pub use badge::{FreshnessBadge, OnTimeBadge, TestStatusBadge};
pub use checkbox::Checkbox;
pub use date_input::DateInput;
