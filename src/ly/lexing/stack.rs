//! The context stack
//!
//! A stack of [`Context`] frames, bottom first. The bottom frame is fixed when the stack
//! is created and is never unwound: `leave` and `replace` at depth one are no-ops. A stack
//! is a plain value, so a checkpoint is a clone and can be serialised between sessions.

use crate::ly::error::LexError;
use crate::ly::grammar::{ContextDef, ContextId};
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One live frame: a context and its pending argument count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Context {
    pub id: ContextId,
    pub argcount: u32,
}

impl Context {
    /// A fresh frame, with the argument count its table entry declares.
    pub fn new(id: ContextId) -> Self {
        Self {
            id,
            argcount: id.def().argcount,
        }
    }

    pub fn with_arguments(id: ContextId, argcount: u32) -> Self {
        Self { id, argcount }
    }

    pub fn def(&self) -> &'static ContextDef {
        self.id.def()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ContextStack {
    frames: Vec<Context>,
}

impl ContextStack {
    /// A stack holding only the toplevel context.
    pub fn new() -> Self {
        Self {
            frames: vec![Context::new(ContextId::Toplevel)],
        }
    }

    /// A stack whose bottom frame is `root`.
    pub fn with_root(root: ContextId) -> Result<Self, LexError> {
        Self::from_frames(vec![Context::new(root)])
    }

    /// Restore a stack from its frames, bottom first.
    pub fn from_frames(frames: Vec<Context>) -> Result<Self, LexError> {
        let root = frames.first().ok_or(LexError::EmptyStack)?;
        if !root.id.can_be_root() {
            return Err(LexError::InvalidRoot(root.id));
        }
        Ok(Self { frames })
    }

    pub fn frames(&self) -> &[Context] {
        &self.frames
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn root(&self) -> &Context {
        &self.frames[0]
    }

    /// The live top of the stack.
    pub fn top(&self) -> &Context {
        // The bottom frame is never removed.
        &self.frames[self.frames.len() - 1]
    }

    /// Mutable access to the live top, for transitions that adjust its argument count.
    pub fn current_context_mut(&mut self) -> &mut Context {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    pub fn enter(&mut self, context: Context) {
        trace!("enter {} (argcount {})", context.id, context.argcount);
        self.frames.push(context);
    }

    /// Pop the top frame. Returns false at depth one, where nothing is popped.
    pub fn leave(&mut self) -> bool {
        if self.frames.len() <= 1 {
            trace!("leave ignored at the bottom of the stack");
            return false;
        }
        if let Some(context) = self.frames.pop() {
            trace!("leave {}", context.id);
        }
        true
    }

    /// Swap the top frame for another one. The bottom frame is never replaced.
    pub fn replace(&mut self, context: Context) {
        if self.leave() {
            self.enter(context);
        }
    }

    /// Signal that one pending argument is complete.
    ///
    /// A top frame with one pending argument is finished and popped, and since a finished
    /// command is itself an argument of whatever encloses it, the signal moves on to the
    /// frame below. A frame with more arguments pending is decremented. A frame with none
    /// pending absorbs the signal.
    pub fn end_argument(&mut self) {
        loop {
            let depth = self.frames.len();
            match self.top().argcount {
                0 => break,
                1 if depth > 1 => {
                    self.leave();
                }
                _ => {
                    let top = self.current_context_mut();
                    top.argcount -= 1;
                    trace!("{} now expects {} argument(s)", top.id, top.argcount);
                    break;
                }
            }
        }
    }

    pub fn is_at_root(&self) -> bool {
        self.frames.len() == 1
    }
}

impl Default for ContextStack {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContextStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .frames
            .iter()
            .map(|frame| {
                if frame.argcount > 0 {
                    format!("{}({})", frame.id, frame.argcount)
                } else {
                    frame.id.to_string()
                }
            })
            .collect();
        f.write_str(&names.join(" > "))
    }
}

impl<'de> Deserialize<'de> for ContextStack {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Frames {
            frames: Vec<Context>,
        }

        let Frames { frames } = Frames::deserialize(deserializer)?;
        ContextStack::from_frames(frames).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(ids: &[(ContextId, u32)]) -> ContextStack {
        ContextStack::from_frames(
            ids.iter()
                .map(|(id, argcount)| Context::with_arguments(*id, *argcount))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_stack_is_toplevel() {
        let stack = ContextStack::new();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top().id, ContextId::Toplevel);
    }

    #[test]
    fn test_leave_never_pops_the_root() {
        let mut stack = ContextStack::new();
        stack.enter(Context::new(ContextId::Music));
        assert!(stack.leave());
        assert!(!stack.leave());
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_replace_keeps_depth() {
        let mut stack = ContextStack::new();
        stack.enter(Context::new(ContextId::ExpectScore));
        stack.replace(Context::new(ContextId::Score));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top().id, ContextId::Score);

        let mut root_only = ContextStack::new();
        root_only.replace(Context::new(ContextId::Music));
        assert_eq!(root_only.top().id, ContextId::Toplevel);
    }

    #[test]
    fn test_end_argument_decrements() {
        let mut stack = stack(&[(ContextId::Toplevel, 0), (ContextId::Markup, 3)]);
        stack.end_argument();
        assert_eq!(stack.top().argcount, 2);
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_end_argument_cascades_through_finished_frames() {
        let mut stack = stack(&[
            (ContextId::Toplevel, 0),
            (ContextId::Markup, 1),
            (ContextId::Markup, 2),
            (ContextId::Markup, 1),
        ]);
        stack.end_argument();
        assert_eq!(stack.depth(), 3);
        assert_eq!(stack.top().argcount, 1);
        stack.end_argument();
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_end_argument_stops_at_zero() {
        let mut stack = stack(&[
            (ContextId::Toplevel, 0),
            (ContextId::Markup, 1),
            (ContextId::Markup, 0),
        ]);
        stack.end_argument();
        assert_eq!(stack.depth(), 3);
    }

    #[test]
    fn test_invalid_roots_are_rejected() {
        assert!(matches!(
            ContextStack::with_root(ContextId::Repeat),
            Err(LexError::InvalidRoot(ContextId::Repeat))
        ));
        assert!(matches!(
            ContextStack::with_root(ContextId::ExpectBook),
            Err(LexError::InvalidRoot(ContextId::ExpectBook))
        ));
        assert!(matches!(
            ContextStack::from_frames(Vec::new()),
            Err(LexError::EmptyStack)
        ));
        assert!(ContextStack::with_root(ContextId::Music).is_ok());
    }

    #[test]
    fn test_serde_checkpoint() {
        let mut stack = ContextStack::new();
        stack.enter(Context::new(ContextId::Markup));
        let json = serde_json::to_string(&stack).unwrap();
        let restored: ContextStack = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, stack);

        let bad = r#"{"frames":[{"id":"Duration","argcount":0}]}"#;
        assert!(serde_json::from_str::<ContextStack>(bad).is_err());
    }

    #[test]
    fn test_display() {
        let mut stack = ContextStack::new();
        stack.enter(Context::with_arguments(ContextId::Markup, 2));
        assert_eq!(stack.to_string(), "Toplevel > Markup(2)");
    }
}
