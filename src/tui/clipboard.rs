//! Clipboard delivery for copied cards.
//!
//! The system clipboard is tried first. When it is unavailable (no display
//! server, sandboxed session) or the write fails, the text is sent once more
//! through the terminal using an OSC 52 escape sequence. If that fails too
//! the caller is told to fall back to a manual copy.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;
use tracing::{debug, warn};

use crate::export::format_record;
use crate::models::Record;

/// Failure of a single clipboard backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The backend cannot be used in this session
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The backend accepted the request but the write failed
    #[error("Failed to write to clipboard: {0}")]
    Write(String),
}

/// A place copied text can be delivered to.
pub trait ClipboardBackend {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Replaces the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard through `arboard`.
///
/// The handle is kept for the whole session; on X11 the contents are only
/// served while it is alive.
pub struct SystemClipboard {
    inner: Result<arboard::Clipboard, String>,
}

impl SystemClipboard {
    /// Connects to the OS clipboard, remembering why if that fails.
    #[must_use]
    pub fn new() -> Self {
        let inner = arboard::Clipboard::new().map_err(|e| e.to_string());
        if let Err(reason) = &inner {
            debug!("system clipboard unavailable: {reason}");
        }
        Self { inner }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardBackend for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = self
            .inner
            .as_mut()
            .map_err(|reason| ClipboardError::Unavailable(reason.clone()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Builds the OSC 52 "set clipboard" sequence for `text`.
#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}

/// Terminal clipboard via OSC 52, written to any byte sink.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl Osc52Clipboard<io::Stdout> {
    /// Writes to the process's stdout (the terminal running the UI).
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    /// Wraps a writer.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Gives the writer back.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ClipboardBackend for Osc52Clipboard<W> {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let sequence = osc52_sequence(text);
        self.out
            .write_all(sequence.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// In-memory clipboard; clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    history: Arc<Mutex<Vec<String>>>,
    fail_with: Option<ClipboardError>,
}

impl MemoryClipboard {
    /// A working clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails with `error`.
    #[must_use]
    pub fn failing(error: ClipboardError) -> Self {
        Self {
            history: Arc::default(),
            fail_with: Some(error),
        }
    }

    /// Everything written so far, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .map(|h| h.clone())
            .unwrap_or_default()
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.history
            .lock()
            .map_err(|e| ClipboardError::Write(e.to_string()))?
            .push(text.to_owned());
        Ok(())
    }
}

/// How a copy request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The primary backend took the text
    Copied,
    /// The primary backend failed; the fallback took the text
    CopiedWithFallback,
    /// Both backends failed; the user has to copy the text by hand
    ManualCopyRequired {
        /// The text that could not be delivered
        text: String,
    },
}

impl CopyOutcome {
    /// Whether the text reached a clipboard.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Copied | Self::CopiedWithFallback)
    }

    /// Toast text for this outcome.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        if self.is_success() {
            "✓ Copied to clipboard!"
        } else {
            "Please select and copy manually"
        }
    }
}

/// Formats records and pushes them through the backend chain.
pub struct ClipboardExporter {
    primary: Box<dyn ClipboardBackend>,
    fallback: Box<dyn ClipboardBackend>,
}

impl ClipboardExporter {
    /// Creates an exporter from a primary and a fallback backend.
    #[must_use]
    pub fn new(primary: Box<dyn ClipboardBackend>, fallback: Box<dyn ClipboardBackend>) -> Self {
        Self { primary, fallback }
    }

    /// OS clipboard first, OSC 52 on stdout second.
    #[must_use]
    pub fn system() -> Self {
        Self::new(
            Box::new(SystemClipboard::new()),
            Box::new(Osc52Clipboard::stdout()),
        )
    }

    /// Copies `record` in the clipboard text format.
    pub fn copy(&mut self, record: &Record) -> CopyOutcome {
        self.copy_text(&format_record(record))
    }

    /// Copies arbitrary text; the fallback is tried at most once.
    pub fn copy_text(&mut self, text: &str) -> CopyOutcome {
        match self.primary.write_text(text) {
            Ok(()) => {
                debug!(backend = self.primary.name(), "copied to clipboard");
                CopyOutcome::Copied
            }
            Err(primary_err) => {
                warn!(backend = self.primary.name(), "{primary_err}");
                match self.fallback.write_text(text) {
                    Ok(()) => {
                        debug!(backend = self.fallback.name(), "copied via fallback");
                        CopyOutcome::CopiedWithFallback
                    }
                    Err(fallback_err) => {
                        warn!(backend = self.fallback.name(), "{fallback_err}");
                        CopyOutcome::ManualCopyRequired {
                            text: text.to_owned(),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_osc52_sequence_encodes_base64() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_osc52_writes_sequence() {
        let mut backend = Osc52Clipboard::new(Vec::new());
        backend.write_text("hi").unwrap();
        assert_eq!(backend.into_inner(), b"\x1b]52;c;aGk=\x07".to_vec());
    }

    #[test]
    fn test_primary_success() {
        let primary = MemoryClipboard::new();
        let fallback = MemoryClipboard::new();
        let mut exporter =
            ClipboardExporter::new(Box::new(primary.clone()), Box::new(fallback.clone()));

        assert_eq!(exporter.copy_text("abc"), CopyOutcome::Copied);
        assert_eq!(primary.history(), vec!["abc"]);
        assert!(fallback.history().is_empty());
    }

    #[test]
    fn test_unavailable_primary_uses_fallback_once() {
        let fallback = MemoryClipboard::new();
        let mut exporter = ClipboardExporter::new(
            Box::new(MemoryClipboard::failing(ClipboardError::Unavailable(
                "no display".to_string(),
            ))),
            Box::new(fallback.clone()),
        );

        let outcome = exporter.copy_text("abc");
        assert_eq!(outcome, CopyOutcome::CopiedWithFallback);
        assert!(outcome.is_success());
        assert_eq!(fallback.history(), vec!["abc"]);
    }

    #[test]
    fn test_both_failing_requires_manual_copy() {
        let mut exporter = ClipboardExporter::new(
            Box::new(MemoryClipboard::failing(ClipboardError::Write(
                "denied".to_string(),
            ))),
            Box::new(Osc52Clipboard::new(BrokenPipe)),
        );

        let outcome = exporter.copy_text("abc");
        assert_eq!(
            outcome,
            CopyOutcome::ManualCopyRequired {
                text: "abc".to_string()
            }
        );
        assert_eq!(outcome.message(), "Please select and copy manually");
    }
}
