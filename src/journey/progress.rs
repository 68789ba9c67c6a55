use crate::wizard::WizardCursor;

/// Header progress for a wizard: "~15 mins setup • 3/8".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupProgress {
    pub completed: usize,
    pub total: usize,
    pub setup_minutes: u32,
}

impl SetupProgress {
    /// The step being worked on counts as completed, so the first step shows
    /// as 1/N.
    pub fn from_cursor(cursor: &WizardCursor, setup_minutes: u32) -> Self {
        let total = cursor.registry().len();
        Self {
            completed: (cursor.index() + 1).min(total),
            total,
            setup_minutes,
        }
    }

    pub fn label(&self) -> String {
        format!("{}/{}", self.completed, self.total)
    }

    pub fn percent(&self) -> u16 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed * 100) / self.total) as u16
    }

    pub fn headline(&self) -> String {
        format!("~{} mins setup • {}", self.setup_minutes, self.label())
    }
}
