//! Stack frame type for method-level error traces.

use std::fmt;

/// Represents a single frame in a call stack.
///
/// The object model records one frame per class method an error unwinds
/// through.
///
/// # Examples
///
/// ```
/// use core_types::StackFrame;
///
/// let frame = StackFrame::method("meth1");
///
/// assert_eq!(frame.method, "meth1");
/// assert_eq!(frame.to_string(), "meth1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    /// Name of the class method
    pub method: String,
    /// Depth of the defining class below the root, when known
    pub class_depth: Option<usize>,
}

impl StackFrame {
    /// Frame for a named method.
    pub fn method(name: impl Into<String>) -> Self {
        StackFrame {
            method: name.into(),
            class_depth: None,
        }
    }

    /// Record the depth of the class that defined the method.
    pub fn at_depth(mut self, depth: usize) -> Self {
        self.class_depth = Some(depth);
        self
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class_depth {
            Some(depth) => write!(f, "{} (class depth {})", self.method, depth),
            None => f.write_str(&self.method),
        }
    }
}
