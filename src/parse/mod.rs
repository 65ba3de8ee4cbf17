mod context;
mod error;
mod parser;
mod scanner;

pub use error::{LexError, ParseError};
pub use parser::parse;
pub use scanner::{scan, ScanOutput};
