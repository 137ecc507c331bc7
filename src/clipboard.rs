//! Clipboard collaborator for the copy affordance.

/// Copies text to a clipboard and reports whether it worked.
///
/// The chat core depends only on this contract; a copy failure is surfaced
/// to the user as a message, never as an error.
pub trait Clipboard {
    /// Copies `text`, returning true on success.
    fn copy(&mut self, text: &str) -> bool;
}

/// System clipboard backed by arboard.
///
/// The inner handle is held for the lifetime of the program; on Wayland the
/// clipboard contents die with the handle that set them.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Creates a system clipboard handle. If no clipboard is available
    /// (e.g. a headless session), every copy reports failure.
    pub fn new() -> Self {
        Self {
            inner: arboard::Clipboard::new().ok(),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> bool {
        match self.inner.as_mut() {
            Some(clipboard) => clipboard.set_text(text.to_string()).is_ok(),
            None => false,
        }
    }
}
