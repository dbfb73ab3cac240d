use clap::ValueEnum;
use nyaya_core::enums::PreferredMethod;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// How `nyaya consult` hands the user over once the request is accepted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ConnectVia {
    Call,
    Chat,
}

impl From<ConnectVia> for PreferredMethod {
    fn from(via: ConnectVia) -> Self {
        match via {
            ConnectVia::Call => Self::Call,
            ConnectVia::Chat => Self::Chat,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub api_url: Option<String>,
    pub timeout: Option<u64>,
}
