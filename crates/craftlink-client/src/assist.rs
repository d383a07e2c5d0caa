//! Client for the external drafting backend.
//!
//! Two request shapes: a rough idea becomes a structured job draft, and a
//! support message (with prior turns) becomes a reply plus an escalation
//! flag.  Any transport or decode failure degrades to a fixed fallback
//! payload; callers never see an error.
//!
//! Every request carries a ticket from a monotonic counter.  A completion
//! whose ticket is no longer the latest is discarded instead of being
//! displayed over a newer answer, and the HTTP client enforces a request
//! timeout so a hung call cannot pin a loading state forever.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Upper bound on any single drafting request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Structured job draft returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
}

impl JobDraft {
    /// Deterministic payload used when the backend is unreachable.
    pub fn fallback() -> Self {
        Self {
            title: "Development project".to_string(),
            description: "Automatic drafting is unavailable. Please describe your \
                          need in detail."
                .to_string(),
            skills: vec!["General".to_string()],
        }
    }
}

/// Support-desk reply returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SupportReply {
    pub reply: String,
    pub escalate: bool,
}

impl SupportReply {
    /// Deterministic payload used when the backend is unreachable.  Always
    /// escalates, so a human picks up when the assistant cannot.
    pub fn fallback() -> Self {
        Self {
            reply: "Our support team will get back to you shortly.".to_string(),
            escalate: true,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DraftJobRequest<'a> {
    idea: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SupportRequest<'a> {
    message: &'a str,
    history: &'a [String],
}

/// Ticket identifying one in-flight drafting request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftTicket(u64);

pub struct AssistClient {
    http: reqwest::Client,
    base_url: String,
    latest: AtomicU64,
}

impl AssistClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            latest: AtomicU64::new(0),
        })
    }

    /// Issue a ticket for a new request, superseding every earlier one.
    pub fn begin(&self) -> DraftTicket {
        DraftTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether the ticket still identifies the most recent request.
    pub fn is_current(&self, ticket: DraftTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Turn a rough idea into a structured job draft.
    ///
    /// Returns `None` when a newer request superseded this one while it was
    /// in flight; otherwise always yields a draft, falling back on error.
    pub async fn draft_job(&self, ticket: DraftTicket, idea: &str) -> Option<JobDraft> {
        let result = self
            .post_json::<_, JobDraft>("draft/job", &DraftJobRequest { idea })
            .await;

        if !self.is_current(ticket) {
            debug!("discarding superseded job draft");
            return None;
        }

        Some(result.unwrap_or_else(|e| {
            warn!(error = %e, "job draft failed, using fallback");
            JobDraft::fallback()
        }))
    }

    /// Draft a support reply from the user's message and prior turns.
    pub async fn draft_support_reply(
        &self,
        ticket: DraftTicket,
        message: &str,
        history: &[String],
    ) -> Option<SupportReply> {
        let result = self
            .post_json::<_, SupportReply>("draft/support", &SupportRequest { message, history })
            .await;

        if !self.is_current(ticket) {
            debug!("discarding superseded support reply");
            return None;
        }

        Some(result.unwrap_or_else(|e| {
            warn!(error = %e, "support draft failed, using fallback");
            SupportReply::fallback()
        }))
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, reqwest::Error>
    where
        B: Serialize,
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        self.http
            .post(&url)
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}
