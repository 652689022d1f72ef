use clap::Subcommand;

mod repl;

pub use repl::*;

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive question loop (the default)
    Chat,

    /// Answer a single question and exit
    Ask {
        question: String,
    },
}
