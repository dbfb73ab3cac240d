use anyhow::bail;
use nyaya_core::enums::{PreferredMethod, SessionStatus};
use nyaya_session::consultation::{
    self, ConnectTarget, Connector, ConsultationDraft, ConsultationSession,
};
use nyaya_session::{Mounted, Rejected};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ConsultArgs;
use crate::context::AppContext;
use crate::output::output_with;
use crate::progress::Progress;

/// Prints the hand-off link and optionally opens it.
struct TerminalConnector {
    open: bool,
}

impl Connector for TerminalConnector {
    fn connect(&self, target: &ConnectTarget) {
        match target {
            ConnectTarget::Dial { uri } => eprintln!("Call the lawyer: {uri}"),
            ConnectTarget::Open { url } => eprintln!("Chat with the lawyer: {url}"),
        }
        if self.open
            && let Err(error) = open::that(target.link())
        {
            tracing::warn!(%error, link = target.link(), "failed to open link");
        }
    }
}

#[derive(Debug, Serialize)]
struct ConsultOutcome {
    status: SessionStatus,
    notice: Option<String>,
    connect: Option<String>,
}

/// Handle `nyaya consult`.
pub async fn handle(args: &ConsultArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut session = ConsultationSession::new(ctx.config.consultation.clone());
    *session.draft_mut() = ConsultationDraft {
        name: args.name.clone(),
        phone: args.phone.clone(),
        email: args.email.clone(),
        message: args.message.clone(),
        preferred: PreferredMethod::default(),
    };
    let widget = Mounted::mount(session);

    let spinner = Progress::spinner("Submitting consultation request...");
    let submitted = consultation::request(&ctx.client, &widget, args.via.map(Into::into)).await;
    spinner.finish_clear();

    let deferred = match submitted {
        Ok(deferred) => deferred,
        Err(Rejected::Missing(field)) => bail!("--{field} must not be empty"),
        Err(reason) => bail!(reason),
    };
    let session = widget.snapshot();
    widget.unmount();

    let Some(deferred) = deferred else {
        bail!("{}", session.notice().unwrap_or("consultation request failed"));
    };

    let summary = ConsultOutcome {
        status: session.status(),
        notice: session.notice().map(str::to_string),
        connect: Some(deferred.target().link().to_string()),
    };
    output_with(&summary, flags.format, |outcome| {
        outcome.notice.clone().unwrap_or_default()
    })?;

    deferred
        .fire_after_delay(&TerminalConnector { open: args.open })
        .await;
    Ok(())
}
