use super::error::WizardError;
use super::registry::{StepDescriptor, StepRegistry};

/// Result of a Next/Back press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Moved(usize),
    /// Next was pressed on the last step. The cursor did not move.
    FlowComplete,
    /// Back was pressed on the first step. The cursor did not move.
    ExitFlow,
}

/// Position inside a step registry plus the furthest step ever reached.
///
/// Invariants: `cursor <= registry.last_index()` and
/// `cursor <= max_reachable <= registry.last_index()`; `max_reachable`
/// never decreases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardCursor {
    registry: StepRegistry,
    cursor: usize,
    max_reachable: usize,
}

impl WizardCursor {
    pub fn new(registry: StepRegistry) -> Self {
        Self {
            registry,
            cursor: 0,
            max_reachable: 0,
        }
    }

    pub fn registry(&self) -> StepRegistry {
        self.registry
    }

    pub fn index(&self) -> usize {
        self.cursor
    }

    pub fn max_reachable(&self) -> usize {
        self.max_reachable
    }

    pub fn current(&self) -> Option<&'static StepDescriptor> {
        self.registry.get(self.cursor)
    }

    pub fn is_last(&self) -> bool {
        self.cursor >= self.registry.last_index()
    }

    pub fn advance(&mut self) -> CursorMove {
        if self.cursor < self.registry.last_index() {
            self.set(self.cursor + 1);
            CursorMove::Moved(self.cursor)
        } else {
            CursorMove::FlowComplete
        }
    }

    pub fn retreat(&mut self) -> CursorMove {
        if self.cursor > 0 {
            self.set(self.cursor - 1);
            CursorMove::Moved(self.cursor)
        } else {
            CursorMove::ExitFlow
        }
    }

    pub fn jump_to(&mut self, index: usize) -> Result<usize, WizardError> {
        if index > self.max_reachable || index > self.registry.last_index() {
            return Err(WizardError::OutOfRange {
                index,
                max_reachable: self.max_reachable,
            });
        }
        self.set(index);
        Ok(self.cursor)
    }

    /// Positions the cursor from an externally supplied location (a route
    /// path loaded directly). Unlike `jump_to` this may move past
    /// `max_reachable`, which is raised to match.
    pub fn restore(&mut self, index: usize) -> Result<usize, WizardError> {
        if index > self.registry.last_index() {
            return Err(WizardError::OutOfRange {
                index,
                max_reachable: self.max_reachable,
            });
        }
        self.set(index);
        Ok(self.cursor)
    }

    fn set(&mut self, index: usize) {
        self.cursor = index;
        self.max_reachable = self.max_reachable.max(index);
    }
}
