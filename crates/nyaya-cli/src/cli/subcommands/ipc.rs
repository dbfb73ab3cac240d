use clap::Subcommand;

/// Indian Penal Code lookups.
#[derive(Clone, Debug, Subcommand)]
pub enum IpcCommands {
    /// Find sections by number, title, or text.
    Search {
        /// Words to look for, e.g. "theft" or "302".
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Explain one section in plain language.
    Explain {
        /// Section number, e.g. 420.
        section: String,
    },
}
