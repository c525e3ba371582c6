//! Core error types for the class object model.
//!
//! This crate provides the error vocabulary shared by the host object model
//! (`builtins`) and the class layer (`class_system`).
//!
//! # Overview
//!
//! - [`JsError`] - Errors with a method-level stack trace
//! - [`ErrorKind`] - Types of errors
//! - [`StackFrame`] - Call stack frame information
//! - [`JsResult`] - Result alias used across the workspace
//!
//! # Examples
//!
//! ```
//! use core_types::{JsError, ErrorKind, StackFrame};
//!
//! let error = JsError::type_error("mixin entry is not an object")
//!     .with_frame(StackFrame::method("__init__"));
//!
//! assert_eq!(error.kind, ErrorKind::TypeError);
//! assert_eq!(error.stack.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod source;

pub use error::{ErrorKind, JsError, JsResult};
pub use source::StackFrame;
