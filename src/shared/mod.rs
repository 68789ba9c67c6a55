pub mod ids;
pub mod logging;
pub mod time;
