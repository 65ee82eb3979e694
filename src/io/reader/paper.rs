use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Error;
use crate::types::Paper;

/// Parse a single JSON document into a [Paper].
///
/// Unknown fields are ignored and missing ones take their defaults, but a
/// field holding the wrong shape (e.g. `body_text` as a string) is a
/// [Error::Parse] carrying the offending path.
pub fn read_paper(path: &Path) -> Result<Paper, Error> {
    let doc = File::open(path)?;
    let br = BufReader::new(doc);
    serde_json::from_reader(br).map_err(|e| Error::Parse(path.to_path_buf(), e))
}
