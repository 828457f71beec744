//! The platform pasteboard capability.
//!
//! All buffer state lives in the OS pasteboard service; this trait is the
//! narrow seam through which the client reaches it. The backend is loaded
//! once at startup so that a missing platform implementation surfaces
//! immediately, not on the first call.

use std::fmt;

use crate::error::Result;

/// Low-level access to the platform pasteboard service.
///
/// Implementations receive the resolved pasteboard key (`general`, `find`,
/// ...) and are responsible for mapping it to whatever the platform wants.
/// Unknown keys must be handed to the platform unchanged.
pub trait PasteboardBackend: fmt::Debug {
    /// Current text content of the pasteboard, if any.
    fn read_text(&self, pasteboard: &str) -> Option<String>;

    /// Store text, replacing the previous content.
    ///
    /// Returns `false` when the platform refused the write.
    fn write_text(&self, text: &str, pasteboard: &str) -> bool;

    /// Remove all content from the pasteboard.
    fn clear(&self, pasteboard: &str) -> bool;

    /// Whether the pasteboard currently holds text content.
    fn has_text(&self, pasteboard: &str) -> bool;

    /// Type descriptors currently present, in backend order.
    fn types(&self, pasteboard: &str) -> Vec<String>;
}

/// Load the platform pasteboard backend.
///
/// Fails when the current platform has no `NSPasteboard` binding. Callers
/// are expected to treat this as fatal at startup; a client is never
/// constructed over a missing backend.
pub fn load_backend() -> Result<Box<dyn PasteboardBackend>> {
    #[cfg(target_os = "macos")]
    {
        Ok(Box::new(crate::macos::MacosPasteboard::new()))
    }

    #[cfg(not(target_os = "macos"))]
    {
        Err(crate::error::PasteboardError::backend_unavailable(format!(
            "the `{}` platform has no NSPasteboard binding; \
             pasteboard access requires macOS",
            std::env::consts::OS
        )))
    }
}
