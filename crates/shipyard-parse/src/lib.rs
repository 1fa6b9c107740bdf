mod error;
mod parse;

pub use error::FragmentError;
pub use parse::{DEFAULT_CATEGORY, parse_fragment};
