//! Pasteboard - read, write, and inspect named macOS pasteboards.
//!
//! Pasteboard exposes a small cross-process API over the OS pasteboard
//! service, addressing buffers by short key (`general`, `find`, `font`,
//! `ruler`, `drag`) with `general` as the default everywhere.
//!
//! Writes to the find pasteboard carry an extra guarantee: the backend's
//! own success report is not trusted. The written text is re-read through
//! an independent `pbpaste` subprocess and compared byte for byte, and the
//! write only counts as successful when both agree. Every other pasteboard
//! reports the backend result directly.
//!
//! # Example
//!
//! ```ignore
//! use pasteboard::PasteboardClient;
//!
//! let client = PasteboardClient::new()?;
//! client.write_text("hello", None);
//! assert_eq!(client.read_text(None).as_deref(), Some("hello"));
//!
//! // Only reported successful once an independent reader agrees.
//! let confirmed = client.write_text("search term", Some("find"));
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod backend;
pub mod client;
pub mod error;
#[cfg(target_os = "macos")]
pub mod macos;
pub mod name;
pub mod verify;

pub use client::PasteboardClient;
pub use error::{PasteboardError, Result};
pub use name::KNOWN_PASTEBOARDS;
