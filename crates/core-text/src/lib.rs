//! UTF-8 column accounting.
//!
//! The render buffer stores text as byte strings but addresses it in terminal
//! columns. This crate provides the conversions between the two: total
//! display width, the byte range covering a column range, and the grapheme
//! cluster occupying a given column.

mod width;

pub use width::{byte_range_of_columns, grapheme_at_column, grapheme_width, string_width};
