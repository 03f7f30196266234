//! System clipboard access behind a small trait so the copy flow can be
//! exercised without a display server.

use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

pub type ClipboardResult<T> = Result<T, ClipboardError>;

pub trait ClipboardService {
    fn set_text(&mut self, text: String) -> ClipboardResult<()>;
}

/// OS clipboard via `arboard`. The handle is opened on first use and kept
/// alive afterwards; on X11 the copied text only survives while it exists.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> ClipboardResult<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let cb = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(cb);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("no clipboard handle".into()))
    }
}

impl ClipboardService for SystemClipboard {
    fn set_text(&mut self, text: String) -> ClipboardResult<()> {
        let len = text.len();
        self.handle()?
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        debug!(bytes = len, "copied to clipboard");
        Ok(())
    }
}
