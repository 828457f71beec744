//! `NSPasteboard`-backed implementation of the pasteboard capability.
//!
//! Plain text travels as the `public.utf8-plain-text` pasteboard type, the
//! raw value of `NSPasteboardTypeString`. Named pasteboards are opened with
//! `pasteboardWithName:` using the canonical `Apple CFPasteboard <key>`
//! names; the general pasteboard goes through `generalPasteboard` directly.

// The AppKit bindings change the safety audit status of individual methods
// between releases, so the blocks below stay `unsafe` even where a given
// release marks the call safe.
#![allow(unused_unsafe)]

use objc2::rc::Retained;
use objc2_app_kit::NSPasteboard;
use objc2_foundation::NSString;
use tracing::debug;

use crate::backend::PasteboardBackend;
use crate::name;

/// Pasteboard type identifier for plain text (`NSPasteboardTypeString`).
const UTF8_PLAIN_TEXT: &str = "public.utf8-plain-text";

/// Pasteboard access through AppKit's `NSPasteboard`.
#[derive(Debug, Default)]
pub struct MacosPasteboard;

impl MacosPasteboard {
    /// Create a new backend. Holds no state; every call opens the addressed
    /// pasteboard anew.
    pub fn new() -> Self {
        Self
    }

    fn open(&self, pasteboard: &str) -> Retained<NSPasteboard> {
        if pasteboard == name::GENERAL {
            unsafe { NSPasteboard::generalPasteboard() }
        } else {
            let canonical = NSString::from_str(name::canonical(pasteboard));
            unsafe { NSPasteboard::pasteboardWithName(&canonical) }
        }
    }
}

impl PasteboardBackend for MacosPasteboard {
    fn read_text(&self, pasteboard: &str) -> Option<String> {
        let pb = self.open(pasteboard);
        let text = unsafe { pb.stringForType(&NSString::from_str(UTF8_PLAIN_TEXT)) };
        text.map(|s| s.to_string())
    }

    fn write_text(&self, text: &str, pasteboard: &str) -> bool {
        let pb = self.open(pasteboard);
        let accepted = unsafe {
            pb.clearContents();
            pb.setString_forType(
                &NSString::from_str(text),
                &NSString::from_str(UTF8_PLAIN_TEXT),
            )
        };
        if !accepted {
            debug!("NSPasteboard refused setString:forType: on {}", pasteboard);
        }
        accepted
    }

    fn clear(&self, pasteboard: &str) -> bool {
        let pb = self.open(pasteboard);
        unsafe { pb.clearContents() };
        true
    }

    fn has_text(&self, pasteboard: &str) -> bool {
        let pb = self.open(pasteboard);
        let text = unsafe { pb.stringForType(&NSString::from_str(UTF8_PLAIN_TEXT)) };
        text.is_some()
    }

    fn types(&self, pasteboard: &str) -> Vec<String> {
        let pb = self.open(pasteboard);
        let types = unsafe { pb.types() };
        match types.as_deref() {
            Some(array) => array.iter().map(|t| t.to_string()).collect(),
            None => Vec::new(),
        }
    }
}
