use serde::Serialize;
use tracing::info;

/// What happened to a token or session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    TokenIssued,
    SessionAdmitted,
    SessionRejected,
    TokenConsumed,
    ResultScored,
    ProgressReset,
}

impl AuditAction {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditAction::TokenIssued => "token_issued",
            AuditAction::SessionAdmitted => "session_admitted",
            AuditAction::SessionRejected => "session_rejected",
            AuditAction::TokenConsumed => "token_consumed",
            AuditAction::ResultScored => "result_scored",
            AuditAction::ProgressReset => "progress_reset",
        }
    }
}

/// A structured audit event.
///
/// Tokens appear only as their 8-character hint.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: AuditAction,
    pub token_hint: Option<String>,
    pub details: Option<serde_json::Value>,
    pub at: jiff::Timestamp,
}

impl AuditEvent {
    pub fn new(action: AuditAction) -> Self {
        Self {
            action,
            token_hint: None,
            details: None,
            at: jiff::Timestamp::now(),
        }
    }

    pub fn with_token_hint(mut self, hint: impl Into<String>) -> Self {
        self.token_hint = Some(hint.into());
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            audit.action = self.action.as_str(),
            audit.token = self.token_hint.as_deref().unwrap_or("-"),
            audit.details = %details,
            audit.at = %self.at,
            "audit event"
        );
    }
}
