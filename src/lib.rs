pub mod ast;
pub mod config;
pub mod interpret;
pub mod parse;
pub mod span;
pub mod token;

use log::{debug, error, trace};
use thiserror::Error;

use crate::config::Config;
use crate::parse::{LexError, ParseError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Interpreter error: {0}")]
    Interpret(#[from] interpret::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    // unrecognized characters that were skipped, in source order
    pub warnings: Vec<LexError>,
}

/// Runs one source string through scan, parse and evaluate.
pub fn run(input: &str, config: &Config) -> Result<Evaluation, Error> {
    let output = parse::scan(input);

    if config.strict {
        if let Some(err) = output.warnings.first() {
            error!("Lex error: {}", err);
            trace!("{:?}", err.get_source_start(input));
            return Err(Error::Lex(err.clone()));
        }
    }

    for token in &output.tokens {
        debug!(
            "{} - {:?}: {:?} (line {})",
            token.span, token.kind, token.lexeme, token.line,
        );
    }

    let expr = match parse::parse(&output.tokens) {
        Ok(expr) => expr,
        Err(err) => {
            error!("Parse error: {}", err);
            trace!("{:?}", err.get_source_start(input));
            return Err(Error::Parse(err));
        }
    };

    match interpret::evaluate(&expr) {
        Ok(value) => Ok(Evaluation {
            value,
            warnings: output.warnings,
        }),
        Err(err) => {
            error!("Interpreter error: {}", err);
            Err(Error::Interpret(err))
        }
    }
}
