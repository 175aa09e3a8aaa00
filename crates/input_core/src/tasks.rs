//! Work deferred to the next turn of the host event loop.

use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredTask {
    /// Select the whole text once the engine has placed the caret.
    SelectContents,
}

/// Zero-delay tasks posted during one event-handling turn and run on the
/// next. Tasks are never cancelled.
#[derive(Clone, Debug, Default)]
pub(crate) struct DeferredQueue {
    tasks: VecDeque<DeferredTask>,
}

impl DeferredQueue {
    pub fn post(&mut self, task: DeferredTask) {
        self.tasks.push_back(task);
    }

    /// Take everything posted so far. Tasks posted while these run wait for
    /// the following turn.
    pub fn take(&mut self) -> VecDeque<DeferredTask> {
        std::mem::take(&mut self.tasks)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
