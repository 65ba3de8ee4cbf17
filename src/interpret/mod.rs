mod error;
mod evaluator;

pub use error::Error;
pub use evaluator::evaluate;
