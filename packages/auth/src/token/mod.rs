// ABOUTME: Token record parsing and remaining-lifetime formatting
// ABOUTME: Pure data handling with no I/O; the panel drives file reads and display

pub mod duration;
pub mod record;

pub use duration::{format_remaining, format_time, EXPIRED_LABEL};
pub use record::TokenRecord;
