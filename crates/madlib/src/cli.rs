//! CLI structure using clap

use clap::Parser;

/// Fill a word-game template read from stdin.
///
/// Input is five words (noun1, noun2, verb, adjective, adverb) followed by
/// template lines using <noun1>, <noun2>, <verb>, <adjective> and <adverb>.
///
/// Exit status: 101 missing word, 103 line longer than 100 bytes,
/// 104 unknown placeholder or stray '<'.
#[derive(Parser)]
#[command(name = "madlib")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Print diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
