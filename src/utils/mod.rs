pub mod converters;

pub use converters::{format_date, three_digits};
