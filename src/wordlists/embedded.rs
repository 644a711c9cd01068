//! Embedded word list
//!
//! The default word-list artifact compiled into the binary at build time.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/wordlist.rs"));
