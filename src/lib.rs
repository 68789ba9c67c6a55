pub mod alerts;
pub mod app;
pub mod config;
pub mod invite;
pub mod journey;
pub mod shared;
pub mod telemetry;
pub mod tui;
pub mod wizard;
