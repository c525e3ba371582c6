//! Error types shared by the object model.
//!
//! Errors carry a JavaScript-style kind, a message and the chain of class
//! methods they unwound through.

use crate::StackFrame;
use std::fmt;
use thiserror::Error;

/// The kind of error.
///
/// These correspond to JavaScript's built-in error constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed text handed to a parser (JSON documents, configuration)
    SyntaxError,
    /// Wrong kind of value (e.g., calling a non-function, extending a non-class)
    TypeError,
    /// Reference to a missing member
    ReferenceError,
    /// Value out of allowed range
    RangeError,
    /// Internal engine error
    InternalError,
}

impl ErrorKind {
    /// The constructor name a script would see for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::InternalError => "InternalError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An error with message and method-level stack trace.
///
/// # Examples
///
/// ```
/// use core_types::{JsError, ErrorKind};
///
/// let error = JsError::type_error("undefined is not a function");
///
/// assert_eq!(error.kind, ErrorKind::TypeError);
/// assert_eq!(error.to_string(), "TypeError: undefined is not a function");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct JsError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Methods the error unwound through, innermost first
    pub stack: Vec<StackFrame>,
}

impl JsError {
    /// Create an error of the given kind with an empty stack
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        JsError {
            kind,
            message: message.into(),
            stack: Vec::new(),
        }
    }

    /// Create a TypeError
    pub fn type_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::TypeError, message)
    }

    /// Create a SyntaxError
    pub fn syntax_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::SyntaxError, message)
    }

    /// Create a ReferenceError
    pub fn reference_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::ReferenceError, message)
    }

    /// Create a RangeError
    pub fn range_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::RangeError, message)
    }

    /// Create an InternalError
    pub fn internal_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::InternalError, message)
    }

    /// Append a frame as the error leaves a method.
    pub fn push_frame(&mut self, frame: StackFrame) {
        self.stack.push(frame);
    }

    /// Same error with `frame` appended.
    pub fn with_frame(mut self, frame: StackFrame) -> Self {
        self.push_frame(frame);
        self
    }

    /// Render the stack the way `Error.prototype.stack` would.
    pub fn stack_trace(&self) -> String {
        let mut out = self.to_string();
        for frame in &self.stack {
            out.push_str("\n    at ");
            out.push_str(&frame.to_string());
        }
        out
    }
}

/// Result type for object-model operations
pub type JsResult<T> = Result<T, JsError>;
