use scl90_access::error::AccessError;
use scl90_access::gate;
use scl90_access::usage::get_current;
use scl90_audit::events::{AuditAction, AuditEvent};
use scl90_core::models::answer::{AnswerSet, ItemId, Response};
use scl90_core::models::token::AccessToken;
use scl90_core::store_keys;
use scl90_instruments::config::Questionnaire;
use scl90_instruments::scoring::OverallResult;
use scl90_storage::state::{load_state, save_state};
use scl90_storage::store::KeyValueStore;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::SessionError;

/// How far through the questionnaire the stored answers are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    /// Lowest item still without a response; `None` once complete.
    pub next_unanswered: Option<ItemId>,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.next_unanswered.is_none()
    }
}

/// An assessment session over a questionnaire and a local store.
///
/// Answers are written back to the store after every response, so a
/// session can be dropped and resumed at any point. In-progress answers
/// belong to the token they were recorded under; admitting a different
/// token starts a fresh answer set.
pub struct Session<S: KeyValueStore> {
    questionnaire: Questionnaire,
    store: S,
    answers: AnswerSet,
}

impl<S: KeyValueStore> Session<S> {
    /// Load any in-progress answers from `store`. An unreadable answer set
    /// is discarded with a warning rather than failing the session.
    pub fn resume(questionnaire: Questionnaire, store: S) -> Self {
        let answers = match load_state::<AnswerSet, _>(&store, store_keys::ANSWERS) {
            Ok(answers) => answers.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "stored answers unreadable, starting over");
                AnswerSet::new()
            }
        };
        debug!(answered = answers.len(), "session resumed");

        Self {
            questionnaire,
            store,
            answers,
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// The token this session is redeeming, if one was admitted.
    pub fn current_token(&self) -> Option<AccessToken> {
        get_current(&self.store)
    }

    /// Admit `token` for this session. Malformed and already-consumed
    /// tokens are refused and nothing is written.
    ///
    /// Answers recorded under another token are discarded. Answers recorded
    /// before any token was admitted are taken over by this one.
    pub fn begin(&mut self, token: &str) -> Result<AccessToken, SessionError> {
        match gate::admit(token, &mut self.store) {
            Ok(token) => {
                self.claim_answers(&token)?;
                AuditEvent::new(AuditAction::SessionAdmitted)
                    .with_token_hint(token.hint())
                    .emit();
                Ok(token)
            }
            Err(e) => {
                let mut event = AuditEvent::new(AuditAction::SessionRejected);
                if let AccessError::AlreadyConsumed { hint } = &e {
                    event = event.with_token_hint(hint.clone());
                }
                event
                    .with_details(serde_json::json!({ "reason": e.to_string() }))
                    .emit();
                Err(e.into())
            }
        }
    }

    /// Record the response for one item and persist the answer set.
    pub fn record(&mut self, item: ItemId, value: u8) -> Result<(), SessionError> {
        if !self.questionnaire.contains_item(item) {
            return Err(SessionError::UnknownItem {
                item,
                item_count: self.questionnaire.item_count(),
            });
        }
        let response = Response::new(value)?;

        self.answers.insert(item, response);
        save_state(&mut self.store, store_keys::ANSWERS, &self.answers)?;
        debug!(item, value, answered = self.answers.len(), "recorded response");
        Ok(())
    }

    pub fn progress(&self) -> Progress {
        let total = usize::from(self.questionnaire.item_count());
        Progress {
            answered: total - self.questionnaire.missing_count(&self.answers),
            total,
            next_unanswered: self.questionnaire.first_unanswered(&self.answers),
        }
    }

    /// Score the complete answer set and consume the current token.
    ///
    /// Fails with `Incomplete` while any item is unanswered, and with
    /// `ConsumptionNotRecorded` when the token cannot be marked used; the
    /// token and the answers stay live in both cases. On success the answers
    /// move to the last-result slot and the next session starts empty.
    pub fn finish(&mut self) -> Result<OverallResult, SessionError> {
        let result = self.questionnaire.score_complete(&self.answers)?;

        let consumed = gate::complete(&mut self.store)?;
        self.archive_answers();

        let details = serde_json::json!({
            "total_score": result.total_score,
            "positive_count": result.positive_count,
        });
        let mut event = AuditEvent::new(AuditAction::ResultScored).with_details(details);
        if let Some(token) = &consumed {
            event = event.with_token_hint(token.hint());
            AuditEvent::new(AuditAction::TokenConsumed)
                .with_token_hint(token.hint())
                .emit();
        }
        event.emit();

        Ok(result)
    }

    /// The report of the last finished session, without touching any token.
    pub fn result(&self) -> Result<OverallResult, SessionError> {
        let answers = load_state::<AnswerSet, _>(&self.store, store_keys::LAST_ANSWERS)?
            .ok_or(SessionError::NoResult)?;
        Ok(self.questionnaire.score_complete(&answers)?)
    }

    /// Discard the in-progress answers so the questionnaire can be retaken.
    /// The last finished result is kept.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.answers = AnswerSet::new();
        self.store.remove(store_keys::ANSWERS)?;
        self.store.remove(store_keys::ANSWERS_OWNER)?;
        AuditEvent::new(AuditAction::ProgressReset).emit();
        Ok(())
    }

    fn claim_answers(&mut self, token: &AccessToken) -> Result<(), SessionError> {
        let owner = self
            .store
            .get(store_keys::ANSWERS_OWNER)?
            .and_then(|raw| AccessToken::parse(&raw).ok());
        if owner.as_ref().is_some_and(|owner| owner != token) {
            info!(
                token = token.hint(),
                discarded = self.answers.len(),
                "answers belong to another token, starting fresh"
            );
            self.answers = AnswerSet::new();
            self.store.remove(store_keys::ANSWERS)?;
        }
        self.store.set(store_keys::ANSWERS_OWNER, token.as_str())?;
        Ok(())
    }

    /// Runs after the token is consumed, so failures here are logged rather
    /// than returned.
    fn archive_answers(&mut self) {
        if let Err(e) = save_state(&mut self.store, store_keys::LAST_ANSWERS, &self.answers) {
            warn!(error = %e, "failed to keep finished answers");
        }
        // The owner marker must outlive the answers it guards.
        match self.store.remove(store_keys::ANSWERS) {
            Ok(()) => {
                if let Err(e) = self.store.remove(store_keys::ANSWERS_OWNER) {
                    warn!(error = %e, "failed to clear answer owner");
                }
            }
            Err(e) => warn!(error = %e, "failed to clear finished answers"),
        }
        self.answers = AnswerSet::new();
    }
}
