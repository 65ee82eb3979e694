/*! Paper record types.

Canonical shape into which loosely-schematized CORD-19 JSON documents are
mapped. Source documents come from many publishers with inconsistent
completeness, so every field has a well-defined empty default: scalars
fall back to [None], collections to empty, and nested records to their
own defaults. Traversal code only ever needs to null-check scalars.
!*/
mod author;
mod paper;
mod paragraph;

pub use author::Author;
pub use paper::MetaData;
pub use paper::Paper;
pub use paragraph::Paragraph;

/// Open-ended JSON object, used where upstream schemas vary too much
/// to pin down (affiliations, citation spans, bibliography entries).
/// Key order follows the source document.
pub type Fields = serde_json::Map<String, serde_json::Value>;
