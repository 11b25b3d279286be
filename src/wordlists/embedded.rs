//! Embedded word lists
//!
//! Word lists compiled into the binary at build time from `data/`.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/wordlists.rs"));

/// Look up an embedded list by identifier
#[must_use]
pub fn embedded_list(identifier: &str) -> Option<&'static [&'static str]> {
    EMBEDDED_LISTS
        .iter()
        .find(|(name, _)| *name == identifier)
        .map(|(_, words)| *words)
}
