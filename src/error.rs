use ggez::GameError;
use std::fmt::{Debug, Display, Formatter};
use std::num::ParseIntError;
use std::{fmt, result};

pub enum ErrorType {
    GameError(GameError),
    /// A preference was given a value the game can't run with
    Config(String),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        Self(ErrorType::GameError(e), vec![])
    }
}

impl From<ParseIntError> for Error {
    fn from(e: ParseIntError) -> Self {
        Self(ErrorType::Config(e.to_string()), vec![])
    }
}

impl Error {
    pub fn config<S: ToString>(message: S) -> Self {
        Self(ErrorType::Config(message.to_string()), vec![])
    }

    pub fn error_type(&self) -> &ErrorType {
        &self.0
    }

    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.error_type() {
            ErrorType::GameError(e) => writeln!(f, "Error:\n{:?}", e)?,
            ErrorType::Config(message) => writeln!(f, "Invalid preference:\n{}", message)?,
        }
        writeln!(f, "Trace:")?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[test]
fn test_trace_is_reversed() {
    let res: Result = Err(Error::config("bad size"));
    let res = res.with_trace_step("inner").with_trace_step("outer");
    let text = format!("{:?}", res.unwrap_err());
    let outer = text.find("in outer").unwrap();
    let inner = text.find("in inner").unwrap();
    assert!(outer < inner, "{}", text);
    assert!(text.contains("bad size"));
}

#[test]
fn test_config_error_is_readable() {
    let err = Error::from("x".parse::<isize>().unwrap_err()).with_trace_step("parse");
    assert!(matches!(err.error_type(), ErrorType::Config(_)));
    let text = format!("{}", err);
    assert!(text.starts_with("Error:\nInvalid preference:\ninvalid digit"), "{}", text);
    assert!(text.ends_with(" in parse\n"), "{}", text);
}
