use serde::Deserialize;
use serde::Serialize;

use super::Fields;

/// One block of abstract or body text, along with its citation and
/// figure/table span annotations and a section label
/// (e.g. "Introduction", "Methods").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub text: Option<String>,
    /// spans pointing into [Paper::bib_entries](super::Paper::bib_entries).
    #[serde(default)]
    pub cite_spans: Vec<Fields>,
    /// spans pointing into [Paper::ref_entries](super::Paper::ref_entries).
    #[serde(default)]
    pub ref_spans: Vec<Fields>,
    #[serde(default)]
    pub section: Option<String>,
}
