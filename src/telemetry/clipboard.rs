use crossterm::execute;
use crossterm::style::Print;
use std::io::{self, Write};
use std::time::{Duration, Instant};

pub const DEFAULT_COPY_INDICATOR: Duration = Duration::from_millis(2000);

/// Clipboard collaborator. Callers treat failures as fire-and-forget.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), String>;
}

/// Session-local clipboard that keeps the last copied text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    last: Option<String>,
}

impl MemoryClipboard {
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), String> {
        self.last = Some(text.to_string());
        Ok(())
    }
}

/// Terminal clipboard: asks the terminal emulator to set the system
/// clipboard through an OSC 52 escape sequence.
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write = io::Stdout> {
    out: W,
}

impl Osc52Clipboard {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> Result<(), String> {
        execute!(self.out, Print(osc52_sequence(text))).map_err(|err| err.to_string())
    }
}

pub fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

/// Transient "Copied!" label. It clears itself once `duration` has passed
/// and gates nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyIndicator {
    duration: Duration,
    shown_at: Option<Instant>,
}

impl Default for CopyIndicator {
    fn default() -> Self {
        Self::new(DEFAULT_COPY_INDICATOR)
    }
}

impl CopyIndicator {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            shown_at: None,
        }
    }

    pub fn show(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.shown_at
            .is_some_and(|shown| now.saturating_duration_since(shown) < self.duration)
    }

    pub fn tick(&mut self, now: Instant) {
        if !self.is_visible(now) {
            self.shown_at = None;
        }
    }

    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_visible(now) {
            "Copied!"
        } else {
            "Copy"
        }
    }
}
