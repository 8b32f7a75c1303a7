//! System clipboard access.

use arboard::Clipboard;

/// Copy `text` to the system clipboard.
///
/// Errors are normal in headless or clipboard-less environments; callers
/// log them and move on rather than surfacing them to the user.
pub(crate) fn copy(text: &str) -> Result<(), String> {
    let mut clipboard = Clipboard::new().map_err(|e| format!("clipboard unavailable: {e}"))?;
    clipboard
        .set_text(text)
        .map_err(|e| format!("clipboard write failed: {e}"))
}
