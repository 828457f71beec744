//! Independent write verification for the find pasteboard.
//!
//! On macOS the find pasteboard is synchronized across processes by the
//! pasteboard server, and the writing process's own view can diverge from
//! what other applications will observe. A write to it is therefore only
//! reported successful after an independent, out-of-process reader has
//! observed the exact bytes that were written.

use std::fmt;
use std::process::Command;

use tracing::{debug, warn};

use crate::error::{PasteboardError, Result};
use crate::name;

/// An independent read path used to confirm pasteboard writes.
///
/// Implementations must not share any state with the backend that performed
/// the write; the whole point is to observe the pasteboard the way a
/// separate process would.
pub trait VerificationOracle: fmt::Debug {
    /// Read the current text of the named pasteboard.
    fn readback(&self, pasteboard: &str) -> Result<String>;
}

/// Oracle backed by the system `pbpaste` tool.
///
/// Spawns `pbpaste -pboard <name>` and captures raw stdout. The subprocess
/// and its pipes live only for the duration of the call.
#[derive(Debug, Default)]
pub struct PbpasteOracle;

impl VerificationOracle for PbpasteOracle {
    fn readback(&self, pasteboard: &str) -> Result<String> {
        let output = Command::new("pbpaste")
            .args(["-pboard", pasteboard])
            .output()?;

        if !output.status.success() {
            return Err(PasteboardError::Oracle(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("pbpaste exited with {}", output.status),
            )));
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

/// Applies the write-verification policy for pasteboards with external
/// consumers.
#[derive(Debug)]
pub struct WriteVerifier {
    oracle: Box<dyn VerificationOracle>,
}

impl WriteVerifier {
    /// Create a verifier backed by `pbpaste`.
    pub fn new() -> Self {
        Self::with_oracle(Box::new(PbpasteOracle))
    }

    /// Create a verifier over a custom oracle.
    pub fn with_oracle(oracle: Box<dyn VerificationOracle>) -> Self {
        Self { oracle }
    }

    /// Whether writes to this pasteboard must be independently confirmed.
    ///
    /// True exactly for the find pasteboard, under any of its names.
    pub fn requires_verification(&self, pasteboard: &str) -> bool {
        name::is_find(pasteboard)
    }

    /// Confirm that `written` is what an independent reader observes on
    /// `pasteboard`.
    ///
    /// The comparison is exact: a trailing newline or any encoding
    /// difference counts as a mismatch, since those are precisely the
    /// divergences this check exists to catch. An oracle failure degrades
    /// to "write not confirmed" rather than an error; a verification outage
    /// must never crash the caller. One attempt per call, no retries.
    pub fn confirm(&self, pasteboard: &str, written: &str) -> bool {
        match self.oracle.readback(pasteboard) {
            Ok(observed) => {
                let matched = observed == written;
                if !matched {
                    debug!(
                        "readback mismatch on {}: wrote {} bytes, observed {} bytes",
                        pasteboard,
                        written.len(),
                        observed.len()
                    );
                }
                matched
            }
            Err(e) => {
                warn!("verification oracle failed for {}: {}", pasteboard, e);
                false
            }
        }
    }
}

impl Default for WriteVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Oracle that replays a fixed response and counts invocations.
    #[derive(Debug)]
    struct ScriptedOracle {
        response: Option<String>,
        calls: Cell<usize>,
    }

    impl ScriptedOracle {
        fn returning(text: &str) -> Self {
            Self {
                response: Some(text.to_string()),
                calls: Cell::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                response: None,
                calls: Cell::new(0),
            }
        }
    }

    impl VerificationOracle for ScriptedOracle {
        fn readback(&self, _pasteboard: &str) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            match &self.response {
                Some(text) => Ok(text.clone()),
                None => Err(PasteboardError::Oracle(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no such executable",
                ))),
            }
        }
    }

    #[test]
    fn exact_match_confirms() {
        let verifier = WriteVerifier::with_oracle(Box::new(ScriptedOracle::returning(
            "hello find [123]",
        )));
        assert!(verifier.confirm("find", "hello find [123]"));
    }

    #[test]
    fn any_difference_fails() {
        let verifier =
            WriteVerifier::with_oracle(Box::new(ScriptedOracle::returning("hello find [124]")));
        assert!(!verifier.confirm("find", "hello find [123]"));
    }

    #[test]
    fn trailing_newline_fails() {
        let verifier =
            WriteVerifier::with_oracle(Box::new(ScriptedOracle::returning("payload\n")));
        assert!(!verifier.confirm("find", "payload"));
    }

    #[test]
    fn oracle_error_degrades_to_unconfirmed() {
        let verifier = WriteVerifier::with_oracle(Box::new(ScriptedOracle::failing()));
        assert!(!verifier.confirm("find", "payload"));
    }

    #[test]
    fn empty_write_confirms_against_empty_readback() {
        let verifier = WriteVerifier::with_oracle(Box::new(ScriptedOracle::returning("")));
        assert!(verifier.confirm("find", ""));
    }

    #[test]
    fn only_find_requires_verification() {
        let verifier = WriteVerifier::with_oracle(Box::new(ScriptedOracle::failing()));
        assert!(verifier.requires_verification("find"));
        assert!(verifier.requires_verification("NSFindPboard"));
        assert!(verifier.requires_verification("NSPasteboardNameFind"));
        assert!(!verifier.requires_verification("general"));
        assert!(!verifier.requires_verification("font"));
        assert!(!verifier.requires_verification("Find"));
    }
}
