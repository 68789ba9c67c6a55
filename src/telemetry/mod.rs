pub mod clipboard;
pub mod form;
pub mod session;
pub mod snippets;

pub use clipboard::{
    osc52_sequence, Clipboard, CopyIndicator, MemoryClipboard, Osc52Clipboard,
    DEFAULT_COPY_INDICATOR,
};
pub use form::{EnrichmentField, Environment, NotificationTarget, TelemetryForm, ENRICHMENT_FIELDS};
pub use session::{TelemetrySetupSession, TELEMETRY_SETUP_MINUTES, TELEMETRY_TEAMS};
pub use snippets::{snippets_for, Snippet, DEFAULT_TRACKING_ID};
