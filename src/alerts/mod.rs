//! Customer-journey alert configuration: the metric catalog, the per-category
//! rule store, the expanded-rule tracker and the session that ties them to a
//! wizard cursor.

pub mod catalog;
pub mod rules;
pub mod selection;
pub mod session;

pub use catalog::{AlertCategory, CategorySpec, MetricDescriptor, CATEGORY_SPECS};
pub use rules::{
    AlertRule, ChannelKind, ChannelPatch, Condition, NotificationChannel, RuleError, RulePatch,
    RuleStore,
};
pub use selection::{ActiveSelection, ClickOrigin, RuleClick};
pub use session::{alert_badge, AlertSetupSession, AlertSidebarEntry, ALERT_SETUP_MINUTES, ALERT_TEAMS};
