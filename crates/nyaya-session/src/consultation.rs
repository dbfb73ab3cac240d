//! Lawyer consultation form session.
//!
//! A successful submission hands back a [`DeferredConnect`]: the call or
//! messaging hand-off that runs after a short pause. It is consumed when
//! fired, so one success connects exactly once and a failure never does.

use std::sync::Arc;
use std::time::Duration;

use nyaya_client::{ApiClient, ClientError};
use nyaya_config::ConsultationConfig;
use nyaya_core::entities::ConsultationRequest;
use nyaya_core::enums::{PreferredMethod, SessionStatus};
use tokio::task::JoinHandle;

use crate::{Mounted, Rejected, SessionCore, Ticket};

pub const SUBMITTED: &str = "Request submitted — connecting now...";
pub const FAILED_PREFIX: &str = "Failed: ";

/// Form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsultationDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub preferred: PreferredMethod,
}

/// Where the user is sent once the request is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectTarget {
    /// Place a phone call, e.g. `tel:+911234567890`.
    Dial { uri: String },
    /// Open a messaging deep link.
    Open { url: String },
}

impl ConnectTarget {
    #[must_use]
    pub fn for_method(method: PreferredMethod, settings: &ConsultationConfig) -> Self {
        match method {
            PreferredMethod::Call => Self::Dial {
                uri: format!("tel:{}", settings.lawyer_phone),
            },
            PreferredMethod::Chat => Self::Open {
                url: settings.whatsapp_link.clone(),
            },
        }
    }

    #[must_use]
    pub fn link(&self) -> &str {
        match self {
            Self::Dial { uri } => uri,
            Self::Open { url } => url,
        }
    }
}

/// Performs the external hand-off.
pub trait Connector: Send + Sync {
    fn connect(&self, target: &ConnectTarget);
}

/// A pending hand-off. Firing consumes it.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a deferred connect does nothing until fired"]
pub struct DeferredConnect {
    target: ConnectTarget,
    delay: Duration,
}

impl DeferredConnect {
    #[must_use]
    pub const fn target(&self) -> &ConnectTarget {
        &self.target
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Connect now.
    pub fn fire(self, connector: &dyn Connector) {
        tracing::debug!(link = self.target.link(), "connecting to lawyer");
        connector.connect(&self.target);
    }

    /// Wait out the configured pause, then connect.
    pub async fn fire_after_delay(self, connector: &dyn Connector) {
        tokio::time::sleep(self.delay).await;
        self.fire(connector);
    }
}

/// Consultation form state.
#[derive(Debug, Clone)]
pub struct ConsultationSession {
    core: SessionCore,
    draft: ConsultationDraft,
    settings: ConsultationConfig,
    notice: Option<String>,
    pending_method: Option<PreferredMethod>,
}

impl ConsultationSession {
    #[must_use]
    pub fn new(settings: ConsultationConfig) -> Self {
        Self {
            core: SessionCore::new(),
            draft: ConsultationDraft::default(),
            settings,
            notice: None,
            pending_method: None,
        }
    }

    #[must_use]
    pub const fn core(&self) -> &SessionCore {
        &self.core
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.core.status()
    }

    #[must_use]
    pub const fn draft(&self) -> &ConsultationDraft {
        &self.draft
    }

    pub const fn draft_mut(&mut self) -> &mut ConsultationDraft {
        &mut self.draft
    }

    /// Success or failure line shown under the form.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Snapshot the draft into a request. `trigger` overrides the draft's
    /// preferred method for this submission only.
    ///
    /// # Errors
    ///
    /// [`Rejected::Missing`] when name or phone is blank, [`Rejected::Busy`]
    /// while a request is pending.
    pub fn submit(
        &mut self,
        trigger: Option<PreferredMethod>,
    ) -> Result<(Ticket, ConsultationRequest), Rejected> {
        let name = SessionCore::validate_text(&self.draft.name)
            .map_err(|_| Rejected::Missing("name"))?;
        let phone = SessionCore::validate_text(&self.draft.phone)
            .map_err(|_| Rejected::Missing("phone"))?;
        let ticket = self.core.begin()?;

        let method = trigger.unwrap_or(self.draft.preferred);
        self.pending_method = Some(method);
        self.notice = None;

        let request = ConsultationRequest {
            name,
            phone,
            email: self.draft.email.trim().to_string(),
            message: self.draft.message.trim().to_string(),
            preferred_method: method,
            cost: self.settings.cost,
        };
        Ok((ticket, request))
    }

    /// Apply the backend outcome for `ticket`. On success the draft is
    /// cleared and the hand-off is returned for the caller to fire.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        outcome: Result<(), ClientError>,
    ) -> Option<DeferredConnect> {
        match outcome {
            Ok(()) => {
                if !self.core.succeed(ticket) {
                    return None;
                }
                let method = self.pending_method.take().unwrap_or(self.draft.preferred);
                self.notice = Some(SUBMITTED.to_string());
                self.draft = ConsultationDraft {
                    preferred: self.draft.preferred,
                    ..ConsultationDraft::default()
                };
                Some(DeferredConnect {
                    target: ConnectTarget::for_method(method, &self.settings),
                    delay: self.settings.connect_delay(),
                })
            }
            Err(e) => {
                let message = e.user_message();
                tracing::warn!(%e, "consultation request failed");
                if !self.core.fail(ticket, message.clone()) {
                    return None;
                }
                self.pending_method = None;
                self.notice = Some(format!("{FAILED_PREFIX}{message}"));
                None
            }
        }
    }
}

/// Submit the form and wait for the backend. The hand-off is returned
/// unfired so the caller can show the outcome first.
///
/// # Errors
///
/// Returns the [`Rejected`] reason if the submission was dropped.
pub async fn request(
    client: &ApiClient,
    widget: &Mounted<ConsultationSession>,
    trigger: Option<PreferredMethod>,
) -> Result<Option<DeferredConnect>, Rejected> {
    let (ticket, request) = widget.with(|session| session.submit(trigger))?;
    let outcome = client.request_consultation(&request).await;
    Ok(widget.with(|session| session.resolve(ticket, outcome)))
}

/// Submit the form, wait for the backend, and run the hand-off after the
/// configured pause.
///
/// # Errors
///
/// Returns the [`Rejected`] reason if the submission was dropped.
pub async fn submit(
    client: &ApiClient,
    widget: &Mounted<ConsultationSession>,
    trigger: Option<PreferredMethod>,
    connector: &dyn Connector,
) -> Result<(), Rejected> {
    if let Some(deferred) = request(client, widget, trigger).await? {
        deferred.fire_after_delay(connector).await;
    }
    Ok(())
}

/// Background variant of [`submit`]. Nothing is applied or fired if the
/// widget is torn down before the backend answers.
///
/// # Errors
///
/// Returns the [`Rejected`] reason if the submission was dropped.
pub fn spawn_submit(
    client: ApiClient,
    widget: &Mounted<ConsultationSession>,
    trigger: Option<PreferredMethod>,
    connector: Arc<dyn Connector>,
) -> Result<JoinHandle<()>, Rejected> {
    let (ticket, request) = widget.with(|session| session.submit(trigger))?;
    let detached = widget.detach();

    Ok(tokio::spawn(async move {
        let outcome = client.request_consultation(&request).await;
        if let Some(deferred) = detached
            .apply(|session| session.resolve(ticket, outcome))
            .flatten()
        {
            deferred.fire_after_delay(connector.as_ref()).await;
        }
    }))
}
