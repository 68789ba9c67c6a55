pub mod actions;
pub mod controller;
pub mod host;
pub mod navigation;
pub mod screens;

pub use actions::{is_interactive, run_wizard, run_wizard_scripted};
pub use controller::{send_invites, Modal, WizardController};
pub use host::{SidebarRow, WizardHost, WizardView};
pub use navigation::{
    action_from_key, parse_scripted_keys, TextTarget, WizardAction, WizardEffect, WizardExit,
    WizardNavError, WizardTransition, SCRIPT_KEYS_ENV,
};
