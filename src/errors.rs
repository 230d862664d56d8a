use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

#[derive(Debug)]
pub enum ContextError {
    EmptyContext,
    SvgGenerationError(String),
}

impl Error for ContextError {}

impl Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContextError::EmptyContext => write!(f, "Context has no drawable content."),
            ContextError::SvgGenerationError(msg) => write!(f, "Svg generation error: {}", msg),
        }
    }
}

#[derive(Debug)]
pub enum CalcError {
    DivisionByZero,
    MalformedOperand(String),
    Io(io::Error),
}

impl Error for CalcError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CalcError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalcError::DivisionByZero => write!(f, "Cannot divide by zero."),
            CalcError::MalformedOperand(token) => {
                write!(f, "Malformed operand: {:?} is not a number", token)
            }
            CalcError::Io(err) => write!(f, "Console i/o failure: {}", err),
        }
    }
}

impl From<io::Error> for CalcError {
    fn from(err: io::Error) -> Self {
        CalcError::Io(err)
    }
}
