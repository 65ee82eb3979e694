/*! Corpus reader

Recursively discovers `*.json` documents under a root directory and maps
each one into a [Paper]. Discovery order would otherwise be filesystem
dependent, so paths are sorted lexicographically to keep corpus order
reproducible across machines.
!*/
use std::path::Path;
use std::path::PathBuf;

use log::info;
use rayon::prelude::*;

use super::paper::read_paper;
use crate::error::Error;
use crate::types::Paper;

/// Discover document files under `src`, sorted lexicographically.
///
/// Fails before any parsing if `src` is missing or is not a directory.
fn find_documents(src: &Path) -> Result<Vec<PathBuf>, Error> {
    if !src.exists() {
        return Err(Error::NotFound(src.to_path_buf()));
    }
    if !src.is_dir() {
        return Err(Error::NotADirectory(src.to_path_buf()));
    }

    let pattern = format!("{}/**/*.json", src.display());
    let mut paths = glob::glob(&pattern)?.collect::<Result<Vec<_>, glob::GlobError>>()?;
    paths.sort();
    Ok(paths)
}

/// Streaming reader over the documents of a corpus directory.
///
/// Iterates in lexicographic path order, yielding one [Paper] per file.
/// Useful when the whole corpus does not need to be in memory at once.
#[derive(Debug)]
pub struct CorpusReader {
    paths: std::vec::IntoIter<PathBuf>,
}

impl CorpusReader {
    pub fn new(src: &Path) -> Result<Self, Error> {
        Ok(Self {
            paths: find_documents(src)?.into_iter(),
        })
    }
}

impl Iterator for CorpusReader {
    type Item = Result<Paper, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.paths.next().map(|path| read_paper(&path))
    }
}

/// An in-memory corpus of [Paper] records, in discovery order.
#[derive(Debug, Default)]
pub struct Corpus {
    papers: Vec<Paper>,
}

impl Corpus {
    /// Load every document under `src`.
    ///
    /// `limit` caps the number of records; `0` means no limit. The limit
    /// is exact: once reached, remaining files are not parsed at all.
    ///
    /// One malformed or unreadable document fails the whole load; no
    /// partial corpus is returned.
    pub fn load(src: &Path, limit: usize) -> Result<Self, Error> {
        let mut papers = Vec::new();
        for paper in CorpusReader::new(src)? {
            papers.push(paper?);
            if limit != 0 && papers.len() == limit {
                break;
            }
        }

        info!("Read {} files from {}.", papers.len(), src.display());
        Ok(Self { papers })
    }

    /// Parallel variant of [Corpus::load].
    ///
    /// Documents are parsed on the rayon pool; record order still follows
    /// lexicographic path order. With a limit set, only the first `limit`
    /// paths are parsed, so the result matches [Corpus::load] exactly.
    /// Which parse error surfaces first is unspecified when several
    /// documents are malformed.
    pub fn load_parallel(src: &Path, limit: usize) -> Result<Self, Error> {
        let mut paths = find_documents(src)?;
        if limit != 0 && paths.len() > limit {
            paths.truncate(limit);
        }

        let papers = paths
            .par_iter()
            .map(|path| read_paper(path))
            .collect::<Result<Vec<Paper>, Error>>()?;

        info!("Read {} files from {}.", papers.len(), src.display());
        Ok(Self { papers })
    }

    /// Get a reference to the corpus' papers.
    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    pub fn into_papers(self) -> Vec<Paper> {
        self.papers
    }
}

impl IntoIterator for Corpus {
    type Item = Paper;
    type IntoIter = std::vec::IntoIter<Paper>;

    fn into_iter(self) -> Self::IntoIter {
        self.papers.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::find_documents;

    #[test]
    fn discovery_is_recursive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        // created out of order on purpose
        fs::write(dir.path().join("c.json"), "{}").unwrap();
        fs::write(dir.path().join("nested").join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let paths = find_documents(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.json", "c.json", "nested/b.json"]);
    }
}
