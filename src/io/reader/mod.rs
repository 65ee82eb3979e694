/*! Corpus reading utilities

[read_paper] maps a single document file into a [crate::types::Paper],
[corpus] discovers document files and accumulates them into a [Corpus].
!*/
pub mod corpus;
mod paper;

pub use corpus::Corpus;
pub use corpus::CorpusReader;
pub use paper::read_paper;
