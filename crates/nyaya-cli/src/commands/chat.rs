use std::io::{IsTerminal, Write};

use anyhow::{Context, bail};
use nyaya_core::entities::Turn;
use nyaya_core::enums::Role;
use nyaya_session::chat::{self, ChatSession};
use nyaya_session::{Mounted, Rejected};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChatArgs;
use crate::context::AppContext;
use crate::output::output_with;
use crate::progress::Progress;

const CLOSE_COMMAND: &str = "/close";

/// Handle `nyaya chat`.
pub async fn handle(args: &ChatArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let widget = Mounted::mount(ChatSession::new());
    let result = if args.message.is_empty() {
        interactive(ctx, &widget, flags).await
    } else {
        one_shot(ctx, &widget, &args.message.join(" "), flags).await
    };
    widget.unmount();
    result
}

async fn one_shot(
    ctx: &AppContext,
    widget: &Mounted<ChatSession>,
    message: &str,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if !exchange(ctx, widget, message).await? {
        bail!("message is empty");
    }

    let session = widget.snapshot();
    let transcript = session.history().to_vec();
    output_with(&transcript, flags.format, |turns| {
        turns.iter().map(turn_text).collect::<Vec<_>>().join("\n")
    })?;

    if let Some(error) = session.core().last_error() {
        bail!("chat failed: {error}");
    }
    Ok(())
}

async fn interactive(
    ctx: &AppContext,
    widget: &Mounted<ChatSession>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let prompt = std::io::stdin().is_terminal() && !flags.quiet;
    if prompt {
        eprintln!("Ask a legal question. Type {CLOSE_COMMAND} to leave.");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if prompt {
            eprint!("you> ");
            std::io::stderr().flush().ok();
        }
        let Some(line) = lines.next_line().await.context("failed to read from stdin")? else {
            break;
        };

        let line = line.trim();
        if line == CLOSE_COMMAND {
            widget.with(ChatSession::close);
            break;
        }
        if !exchange(ctx, widget, line).await? {
            continue;
        }

        if let Some(reply) = widget.with(|session| session.history().last().cloned()) {
            output_with(&reply, flags.format, turn_text)?;
        }
    }
    Ok(())
}

/// Send one message. Returns `false` when the input was blank and nothing
/// was sent.
async fn exchange(
    ctx: &AppContext,
    widget: &Mounted<ChatSession>,
    message: &str,
) -> anyhow::Result<bool> {
    let spinner = Progress::spinner("Thinking...");
    let sent = chat::send(&ctx.client, widget, message).await;
    spinner.finish_clear();

    match sent {
        Ok(()) => Ok(true),
        Err(Rejected::Empty) => Ok(false),
        Err(reason) => Err(reason.into()),
    }
}

fn turn_text(turn: &Turn) -> String {
    let speaker = match turn.role {
        Role::User => "you",
        Role::Assistant => "nyaya",
    };
    format!("{speaker}> {}", turn.text)
}
