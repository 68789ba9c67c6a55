//! Wizard navigation core: the step registry, the cursor that walks it,
//! gating/completion predicates and the routing glue between URL paths and
//! step indices.

pub mod cursor;
pub mod error;
pub mod gating;
pub mod registry;
pub mod routing;

pub use cursor::{CursorMove, WizardCursor};
pub use error::WizardError;
pub use gating::{is_reachable, StepCompletion, StepMarker};
pub use registry::{StepDescriptor, StepRegistry, ALERT_STEPS, TELEMETRY_STEPS};
pub use routing::{path_for_step, step_for_path, TelemetryStep, TELEMETRY_BASE_PATH};
