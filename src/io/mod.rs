/*!
# IO utilities

Corpus loading from a directory tree of JSON documents.
!*/
pub mod reader;
pub use reader::Corpus;
pub use reader::CorpusReader;
