use core::fmt;
use std::error::Error;
use std::fmt::Display;

/// Election error: a message plus an optional cause chain in text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BullyError {
    text: String,
    cause: String,
}

pub(crate) type Result<T> = std::result::Result<T, BullyError>;

/// Creates an Err result with the provided message and cause.
pub fn new_err<T>(text: String, cause: String) -> std::result::Result<T, BullyError> {
    Err(BullyError { text, cause })
}

impl BullyError {
    /// Error message without the cause.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Display for BullyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cause_word = {
            if !self.cause.is_empty() {
                " Cause: ".to_string()
            } else {
                String::new()
            }
        };
        write!(f, "{}.{}{}", self.text, cause_word, self.cause)
    }
}

impl Error for BullyError {}

pub(crate) fn new_multiple_err<T>(text: String, causes: Vec<BullyError>) -> Result<T> {
    let mut error_string = String::new();

    if !causes.is_empty() {
        error_string.push_str("Errors: ");
    }

    for (error_index, err) in causes.into_iter().enumerate() {
        error_string.push_str(&format!("{}) {} ", error_index + 1, err));
    }
    Err(BullyError {
        text,
        cause: error_string.trim_end().to_string(),
    })
}
