use super::cursor::WizardCursor;

/// Per-step "required inputs satisfied" predicate over a flow's form data.
///
/// Completion only drives affordances (sidebar badges, the "Next" label); it
/// never blocks navigation.
pub trait StepCompletion {
    fn is_complete(&self, step_index: usize) -> bool;
}

pub fn is_reachable(cursor: &WizardCursor, step_index: usize) -> bool {
    step_index <= cursor.max_reachable() && step_index < cursor.registry().len()
}

/// How a step is shown in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMarker {
    Current,
    Complete,
    Reached,
    Locked,
}

pub fn step_marker<F: StepCompletion + ?Sized>(
    cursor: &WizardCursor,
    form: &F,
    step_index: usize,
) -> StepMarker {
    if step_index == cursor.index() {
        StepMarker::Current
    } else if !is_reachable(cursor, step_index) {
        StepMarker::Locked
    } else if form.is_complete(step_index) {
        StepMarker::Complete
    } else {
        StepMarker::Reached
    }
}

pub fn step_markers<F: StepCompletion + ?Sized>(
    cursor: &WizardCursor,
    form: &F,
) -> Vec<StepMarker> {
    (0..cursor.registry().len())
        .map(|index| step_marker(cursor, form, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::registry::StepRegistry;

    struct EvenStepsDone;

    impl StepCompletion for EvenStepsDone {
        fn is_complete(&self, step_index: usize) -> bool {
            step_index % 2 == 0
        }
    }

    #[test]
    fn reachability_follows_max_reached_index() {
        let mut cursor = WizardCursor::new(StepRegistry::telemetry());
        cursor.advance();
        cursor.advance();
        cursor.retreat();
        assert!(is_reachable(&cursor, 0));
        assert!(is_reachable(&cursor, 2));
        assert!(!is_reachable(&cursor, 3));
    }

    #[test]
    fn markers_distinguish_current_complete_reached_and_locked() {
        let mut cursor = WizardCursor::new(StepRegistry::alerts());
        cursor.advance();
        cursor.advance();
        cursor.advance();
        cursor.jump_to(1).expect("jump back");

        let markers = step_markers(&cursor, &EvenStepsDone);
        assert_eq!(
            markers,
            vec![
                StepMarker::Complete,
                StepMarker::Current,
                StepMarker::Complete,
                StepMarker::Reached,
                StepMarker::Locked,
                StepMarker::Locked,
            ]
        );
    }
}
