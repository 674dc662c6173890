//! Element Tree (etree) Utilities
//!
//! Removal that respects the text/tail model: the text following a removed
//! element can be kept in place.
//!
//! This module re-exports functions from the `html-cleaning` crate.

pub use html_cleaning::tree::remove;
