//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "corvid", about = "CORD-19 corpus loading tool.")]
/// Holds every command that is callable by the `corvid` command.
pub enum Corvid {
    #[structopt(about = "Load a corpus and dump it as JSON lines")]
    Load(Load),
}

#[derive(Debug, StructOpt)]
/// Load command and parameters.
pub struct Load {
    #[structopt(parse(from_os_str), help = "corpus root directory")]
    pub src: PathBuf,
    #[structopt(
        short = "l",
        long = "limit",
        default_value = "0",
        help = "maximum number of documents to load. 0 means no limit."
    )]
    pub limit: usize,
    #[structopt(
        short = "p",
        long = "parallel",
        help = "parse documents on a thread pool"
    )]
    pub parallel: bool,
}
