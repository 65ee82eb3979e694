//! # Corvid
//!
//! Corvid loads a corpus of CORD-19 scientific papers into structured
//! records, for downstream NLP analysis (named-entity recognition,
//! keyword extraction) done by external tooling.
//!
//! This project can be used as a tool to dump a corpus as JSON lines,
//! or as a lib to load papers into other projects.
//!
//! ## Getting started
//!
//! ```sh
//! corvid 0.1.0
//! CORD-19 corpus loading tool.
//!
//! USAGE:
//!     corvid <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help    Prints this message or the help of the given subcommand(s)
//!     load    Load a corpus and dump it as JSON lines
//! ```
use std::io::Write;

use log::debug;
use structopt::StructOpt;

use corvid::error::Error;
use corvid::io::Corpus;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Corvid::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Corvid::Load(l) => {
            let corpus = if l.parallel {
                Corpus::load_parallel(&l.src, l.limit)?
            } else {
                Corpus::load(&l.src, l.limit)?
            };

            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            for paper in corpus {
                serde_json::to_writer(&mut handle, &paper)?;
                writeln!(handle)?;
            }
        }
    };
    Ok(())
}
