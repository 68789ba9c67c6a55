#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("step index {index} is out of range (highest reachable step index is {max_reachable})")]
    OutOfRange { index: usize, max_reachable: usize },
}
