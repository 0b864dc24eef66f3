//! Enumeration of every overload of a [`MethodWrapper`].
//!
//! For `k` defaulted arguments exactly `2^k` overloads are produced. The
//! baseline overload, which declares every parameter, comes first. The walk
//! then visits the defaulted positions left to right; at each one it first
//! explores the remaining defaulted positions with the argument still declared,
//! then switches the argument to its default literal, emits, and explores the
//! remaining positions again before restoring it. The overload declaring only
//! the required parameters is therefore always emitted last.
//!
//! Required arguments never branch, so the recursion depth is bounded by the
//! defaulted count rather than the argument count.

use crate::argument::ArgumentSpec;
use crate::error::{OverloadError, Result};
use crate::render::MethodBodyRenderer;
use crate::sink::OverloadSink;
use crate::wrapper::MethodWrapper;
use tracing::{debug, trace};

/// Drives overload generation for one method.
#[derive(Debug)]
pub struct CombinationEngine<'w> {
    method: &'w str,
    head: String,
    call_prefix: &'w str,
    arguments: Vec<&'w ArgumentSpec>,
    defaulted: Vec<usize>,
}

impl<'w> CombinationEngine<'w> {
    /// Prepare generation; fails if the method has no arguments.
    pub fn new(wrapper: &'w MethodWrapper) -> Result<Self> {
        if wrapper.arguments().len() == 0 {
            return Err(OverloadError::NoArguments {
                method: wrapper.name().to_string(),
            });
        }

        let arguments: Vec<&ArgumentSpec> = wrapper.arguments().collect();
        let defaulted = arguments
            .iter()
            .enumerate()
            .filter(|(_, arg)| arg.is_defaulted())
            .map(|(pos, _)| pos)
            .collect();

        Ok(Self {
            method: wrapper.name(),
            head: wrapper.signature_head(),
            call_prefix: wrapper.call_prefix(),
            arguments,
            defaulted,
        })
    }

    /// Emit every overload into `sink`, stopping early if the sink asks to.
    ///
    /// Returns the number of overloads emitted.
    pub fn run<S: OverloadSink + ?Sized>(self, sink: &mut S) -> Result<usize> {
        let mut walk = Walk {
            arguments: &self.arguments,
            defaulted: &self.defaulted,
            declared: vec![true; self.arguments.len()],
            renderer: MethodBodyRenderer::new(&self.head, self.call_prefix),
            emitted: 0,
            stopped: false,
        };

        walk.emit(sink)?;
        walk.explore(0, sink)?;

        debug!(
            method = self.method,
            emitted = walk.emitted,
            stopped = walk.stopped,
            "generated overloads"
        );
        Ok(walk.emitted)
    }
}

/// Mutable traversal state: one declared/substituted flag per position.
struct Walk<'a> {
    arguments: &'a [&'a ArgumentSpec],
    /// Positions of the defaulted arguments, ascending.
    defaulted: &'a [usize],
    declared: Vec<bool>,
    renderer: MethodBodyRenderer<'a>,
    emitted: usize,
    stopped: bool,
}

impl Walk<'_> {
    /// Walk the defaulted positions from index `next` of `self.defaulted` on.
    fn explore<S: OverloadSink + ?Sized>(&mut self, next: usize, sink: &mut S) -> Result<()> {
        if self.stopped {
            return Ok(());
        }
        let Some(&pos) = self.defaulted.get(next) else {
            return Ok(());
        };

        self.explore(next + 1, sink)?;
        self.declared[pos] = false;
        self.emit(sink)?;
        self.explore(next + 1, sink)?;
        self.declared[pos] = true;
        Ok(())
    }

    fn emit<S: OverloadSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        if self.stopped || !sink.wants_more() {
            self.stopped = true;
            return Ok(());
        }

        let pairs = self.arguments.iter().copied().zip(self.declared.iter().copied());
        let text = self.renderer.render(pairs);
        trace!(index = self.emitted, "emitting overload");
        sink.accept(text)?;
        self.emitted += 1;
        Ok(())
    }
}
