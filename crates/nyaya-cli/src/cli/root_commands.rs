use clap::{Args, Subcommand};

use crate::cli::global::ConnectVia;
use crate::cli::subcommands::IpcCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Ask the legal assistant. Starts an interactive chat without a message.
    Chat(ChatArgs),
    /// Semantic search over Supreme Court judgments.
    Search(SearchArgs),
    /// Request a paid consultation with a lawyer.
    Consult(ConsultArgs),
    /// IPC crime trends dashboard.
    Crime,
    /// Crimes against women dashboard.
    Women,
    /// Backend status and dataset sizes.
    Health,
    /// Indian Penal Code sections.
    Ipc {
        #[command(subcommand)]
        action: IpcCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// Message to send. Omit for an interactive session; `/close` ends it.
    pub message: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Legal question, e.g. "conditions for anticipatory bail".
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ConsultArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub email: String,
    /// Short description of the legal issue.
    #[arg(long, default_value = "")]
    pub message: String,
    /// Connect by phone call or messaging app [default: call].
    #[arg(long, value_enum)]
    pub via: Option<ConnectVia>,
    /// Open the call or chat link once the request is accepted.
    #[arg(long)]
    pub open: bool,
}
