//! The public pasteboard API.

use std::fmt::Display;

use crate::backend::{self, PasteboardBackend};
use crate::error::Result;
use crate::name;
use crate::verify::WriteVerifier;

/// High-level access to named pasteboards.
///
/// The client owns no buffer state; everything lives in the platform
/// pasteboard service, and each call is a self-contained synchronous
/// operation. Pasteboard names are optional everywhere and default to
/// `general`.
#[derive(Debug)]
pub struct PasteboardClient {
    backend: Box<dyn PasteboardBackend>,
    verifier: WriteVerifier,
}

impl PasteboardClient {
    /// Connect to the platform pasteboard service.
    ///
    /// Fails immediately when no backend exists for the current platform,
    /// so an integration problem surfaces at startup rather than on the
    /// first pasteboard call.
    pub fn new() -> Result<Self> {
        Ok(Self {
            backend: backend::load_backend()?,
            verifier: WriteVerifier::new(),
        })
    }

    /// Build a client over explicit collaborators.
    ///
    /// Primarily useful for substituting a fake backend or oracle in tests.
    pub fn with_parts(backend: Box<dyn PasteboardBackend>, verifier: WriteVerifier) -> Self {
        Self { backend, verifier }
    }

    /// Read the current text of a pasteboard.
    pub fn read_text(&self, pasteboard: Option<&str>) -> Option<String> {
        self.backend.read_text(name::resolve(pasteboard))
    }

    /// Write text to a pasteboard, replacing its previous content.
    ///
    /// Any displayable value is accepted and stringified before writing.
    /// For most pasteboards the result is the backend's own success report.
    /// For the find pasteboard that report is not trusted: the write is
    /// re-read through an independent oracle, and the result reflects that
    /// confirmation instead. A refused write, a mismatched readback, and a
    /// broken oracle all come back as `false`; the caller only learns that
    /// the write did not durably succeed.
    pub fn write_text(&self, text: impl Display, pasteboard: Option<&str>) -> bool {
        let text = text.to_string();
        let pasteboard = name::resolve(pasteboard);

        if !self.backend.write_text(&text, pasteboard) {
            return false;
        }

        if self.verifier.requires_verification(pasteboard) {
            return self.verifier.confirm(pasteboard, &text);
        }

        true
    }

    /// Remove all content from a pasteboard.
    pub fn clear(&self, pasteboard: Option<&str>) -> bool {
        self.backend.clear(name::resolve(pasteboard))
    }

    /// Whether a pasteboard currently holds text content.
    pub fn has_text(&self, pasteboard: Option<&str>) -> bool {
        self.backend.has_text(name::resolve(pasteboard))
    }

    /// Type descriptors currently present on a pasteboard, in backend order.
    pub fn types(&self, pasteboard: Option<&str>) -> Vec<String> {
        self.backend.types(name::resolve(pasteboard))
    }

    /// The fixed table of known pasteboards. Never touches the backend.
    pub fn known_pasteboards(&self) -> &'static [(&'static str, &'static str)] {
        name::KNOWN_PASTEBOARDS
    }

    /// Alias for [`read_text`](Self::read_text), kept for naming-convention
    /// compatibility.
    pub fn read_string(&self, pasteboard: Option<&str>) -> Option<String> {
        self.read_text(pasteboard)
    }

    /// Alias for [`write_text`](Self::write_text), kept for
    /// naming-convention compatibility.
    pub fn write_string(&self, text: impl Display, pasteboard: Option<&str>) -> bool {
        self.write_text(text, pasteboard)
    }
}
