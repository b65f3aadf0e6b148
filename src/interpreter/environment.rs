use std::collections::HashMap;

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Handle to a scope frame inside an [`Environment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(usize);

/// A single scope: its own bindings plus the frame lookups fall back to.
#[derive(Debug, Default)]
struct Frame {
    bindings: HashMap<String, Value>,
    parent:   Option<FrameId>,
}

/// The scope chain, stored as an arena of frames.
///
/// The root frame exists for the whole lifetime of the environment. Every
/// other frame belongs to one function call: it is pushed when the call
/// starts and popped when the call returns, so frames are released in LIFO
/// order and the arena never has holes.
///
/// Lookups walk from a frame through its parents up to the root. Writes only
/// ever touch the frame they are given.
///
/// # Example
/// ```
/// use monkey::interpreter::{environment::Environment, value::core::Value};
///
/// let mut env = Environment::new();
/// let root = env.root();
/// env.set(root, "x", Value::Integer(1));
///
/// let call = env.push(root);
/// env.set(call, "x", Value::Integer(2));
/// assert_eq!(env.get(call, "x").unwrap(), Value::Integer(2));
///
/// env.pop(call);
/// assert_eq!(env.get(root, "x").unwrap(), Value::Integer(1));
/// ```
#[derive(Debug)]
pub struct Environment {
    frames: Vec<Frame>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only an empty root frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![Frame::default()] }
    }

    /// The root frame.
    #[must_use]
    pub const fn root(&self) -> FrameId {
        FrameId(0)
    }

    /// Number of live frames, the root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Allocates a new frame whose lookups fall back to `parent`.
    pub fn push(&mut self, parent: FrameId) -> FrameId {
        let id = FrameId(self.frames.len());
        self.frames.push(Frame { bindings: HashMap::new(),
                                 parent:   Some(parent), });
        id
    }

    /// Releases `frame` and any frame pushed after it.
    ///
    /// The root frame is never released.
    pub fn pop(&mut self, frame: FrameId) {
        debug_assert_eq!(frame.0 + 1, self.frames.len(), "frames must be popped in LIFO order");
        self.frames.truncate(frame.0.max(1));
    }

    /// Looks up `name` starting at `frame` and walking the parent chain.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownIdentifier`] if no frame on the chain
    /// binds `name`.
    pub fn get(&self, frame: FrameId, name: &str) -> Result<Value, RuntimeError> {
        let mut current = Some(frame);
        while let Some(id) = current {
            let frame = &self.frames[id.0];
            if let Some(value) = frame.bindings.get(name) {
                return Ok(value.clone());
            }
            current = frame.parent;
        }

        Err(RuntimeError::UnknownIdentifier { name: name.to_string() })
    }

    /// Binds `name` in `frame` itself, shadowing any binding further up the
    /// chain.
    pub fn set(&mut self, frame: FrameId, name: impl Into<String>, value: Value) {
        self.frames[frame.0].bindings.insert(name.into(), value);
    }
}
