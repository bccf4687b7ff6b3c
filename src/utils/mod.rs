mod format_int;
mod parse_rle;
mod patterns;
mod random;

pub use format_int::NiceInt;
pub use parse_rle::{parse_rle, ParseRleError};
pub use patterns::{Pattern, PATTERNS};
pub use random::random_soup;
