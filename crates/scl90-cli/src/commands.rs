use std::path::Path;

use eyre::{Result, WrapErr};
use scl90_access::token;
use scl90_audit::events::{AuditAction, AuditEvent};
use scl90_core::models::answer::AnswerSet;
use scl90_instruments::scoring::OverallResult;
use scl90_instruments::{get_instrument, load_instrument};
use scl90_session::session::{Progress, Session};
use scl90_storage::file::JsonFileStore;
use serde::Serialize;

use crate::config::Scl90Config;
use crate::render::render_report;

const INSTRUMENT_ID: &str = "scl90";

/// Open the session backed by the configured store file. An unreadable
/// store file is set aside and replaced with an empty one.
pub fn open_session(config: &Scl90Config) -> Result<Session<JsonFileStore>> {
    let store_path = config.store_path()?;
    let store = JsonFileStore::open_or_recover(&store_path)
        .wrap_err_with(|| format!("failed to open store at {}", store_path.display()))?;
    let questionnaire = load_instrument(INSTRUMENT_ID)?;
    Ok(Session::resume(questionnaire, store))
}

/// Derive the access token for an order id.
pub fn verify(config: &Scl90Config, order_id: &str) -> Result<String> {
    let token = token::derive_with_secret(order_id, config.secret())?;
    AuditEvent::new(AuditAction::TokenIssued)
        .with_token_hint(token.hint())
        .emit();
    Ok(token.to_string())
}

pub fn check(config: &Scl90Config, order_id: &str, candidate: &str) -> bool {
    token::verify_with_secret(order_id, candidate, config.secret())
}

pub fn start(config: &Scl90Config, candidate: &str) -> Result<String> {
    let mut session = open_session(config)?;
    let token = session.begin(candidate)?;
    let progress = session.progress();

    let mut out = format!("Access granted ({}...).\n", token.hint());
    out.push_str(&describe_progress(&progress));
    if let Some(instrument) = get_instrument(INSTRUMENT_ID) {
        out.push_str("\nAnswer each item with:\n");
        for option in instrument.response_options() {
            out.push_str(&format!("  {}  {}\n", option.value, option.label));
        }
    }
    Ok(out)
}

pub fn answer(config: &Scl90Config, item: u16, value: u8) -> Result<String> {
    let mut session = open_session(config)?;
    session.record(item, value)?;
    Ok(describe_progress(&session.progress()))
}

#[derive(Debug, Serialize)]
struct StatusReport {
    #[serde(flatten)]
    progress: Progress,
    token_hint: Option<String>,
}

pub fn status(config: &Scl90Config, json: bool) -> Result<String> {
    let session = open_session(config)?;
    let report = StatusReport {
        progress: session.progress(),
        token_hint: session.current_token().map(|t| t.hint().to_string()),
    };
    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = describe_progress(&report.progress);
    match &report.token_hint {
        Some(hint) => out.push_str(&format!("Access token: {hint}...\n")),
        None => out.push_str("No access token admitted.\n"),
    }
    Ok(out)
}

/// Score the complete answer set and consume the current token.
pub fn finish(config: &Scl90Config, json: bool) -> Result<String> {
    let mut session = open_session(config)?;
    let result = session.finish()?;
    present(&session, &result, json)
}

/// Show the report again for the stored answers. Never touches a token.
pub fn report(config: &Scl90Config, json: bool) -> Result<String> {
    let session = open_session(config)?;
    let result = session.result()?;
    present(&session, &result, json)
}

/// Score an answers file directly. Partial files are scored as they are.
pub fn score_file(path: &Path, json: bool) -> Result<String> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let answers = AnswerSet::from_json(&contents)
        .wrap_err_with(|| format!("{} is not a valid answer set", path.display()))?;
    let questionnaire = load_instrument(INSTRUMENT_ID)?;

    let missing = questionnaire.missing_count(&answers);
    if missing > 0 {
        tracing::warn!(missing, "answer set is incomplete, scoring answered items only");
    }

    let result = questionnaire.score(&answers);
    AuditEvent::new(AuditAction::ResultScored)
        .with_details(serde_json::json!({
            "total_score": result.total_score,
            "positive_count": result.positive_count,
            "source": path.display().to_string(),
        }))
        .emit();

    if json {
        return Ok(serde_json::to_string_pretty(&result)?);
    }
    Ok(render_report(&result, &questionnaire)?)
}

pub fn reset(config: &Scl90Config) -> Result<String> {
    let mut session = open_session(config)?;
    session.reset()?;
    Ok("Answers cleared.".to_string())
}

fn present(
    session: &Session<JsonFileStore>,
    result: &OverallResult,
    json: bool,
) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(result)?);
    }
    Ok(render_report(result, session.questionnaire())?)
}

fn describe_progress(progress: &Progress) -> String {
    match progress.next_unanswered {
        Some(next) => format!(
            "{} of {} answered. Next item: {next}.\n",
            progress.answered, progress.total
        ),
        None => format!(
            "All {} items answered. Run `scl90 finish` for the report.\n",
            progress.total
        ),
    }
}
