use serde::Deserialize;
use serde::Serialize;

use super::Author;
use super::Fields;
use super::Paragraph;

/// Title and byline of a paper.
///
/// Author order reflects the byline and is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<Author>,
}

/// Structured form of one CORD-19 source document.
///
/// Built once at load time and held immutably for the lifetime of the
/// corpus. Unknown fields in the source are ignored; missing ones take
/// the defaults documented in [crate::types].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    /// unique within a corpus. Not enforced here.
    #[serde(default)]
    pub paper_id: Option<String>,
    #[serde(default)]
    pub metadata: MetaData,
    #[serde(default)]
    pub r#abstract: Vec<Paragraph>,
    #[serde(default)]
    pub body_text: Vec<Paragraph>,
    /// bibliography entries, keyed by citation id (`BIBREF0`, ...).
    #[serde(default)]
    pub bib_entries: Fields,
    /// figure/table entries, keyed by reference id (`FIGREF0`, ...).
    #[serde(default)]
    pub ref_entries: Fields,
    #[serde(default)]
    pub back_matter: Vec<Fields>,
}

impl Paper {
    /// Abstract paragraphs as plain text, in order.
    /// Suitable for handing to an external annotator.
    pub fn abstract_texts(&self) -> Vec<&str> {
        Self::texts(&self.r#abstract)
    }

    /// Body paragraphs as plain text, in order.
    pub fn body_texts(&self) -> Vec<&str> {
        Self::texts(&self.body_text)
    }

    fn texts(paragraphs: &[Paragraph]) -> Vec<&str> {
        paragraphs
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect()
    }
}
