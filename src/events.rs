//! Event logging for docketpost.
//!
//! Every subscription and publish attempt is appended to an NDJSON log
//! (`events.ndjson` in the state directory), one JSON object per line:
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: `subscribe`, `publish`, or `publish_failed`
//! - `actor`: `user@HOST`
//! - `case`: PACER case id, when the event concerns one case
//! - `details`: action-specific object
//!
//! The log is the audit trail of what was posted and when.

use crate::context::AppContext;
use crate::error::{DocketPostError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// A case was subscribed to (or was already tracked).
    Subscribe,
    /// A post was published.
    Publish,
    /// A publish attempt failed.
    PublishFailed,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Subscribe => write!(f, "subscribe"),
            EventAction::Publish => write!(f, "publish"),
            EventAction::PublishFailed => write!(f, "publish_failed"),
        }
    }
}

/// An event record for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub ts: DateTime<Utc>,

    pub action: EventAction,

    /// Who ran the command (`user@HOST`).
    pub actor: String,

    /// PACER case id the event concerns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,

    pub details: Value,
}

impl Event {
    /// Create an event stamped with the current time and actor.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: actor_string(),
            case: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn with_case(mut self, pacer_case_id: impl Into<String>) -> Self {
        self.case = Some(pacer_case_id.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            DocketPostError::UserError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the log, creating the state directory if needed.
pub fn append_event(ctx: &AppContext, event: &Event) -> Result<()> {
    let events_file = ctx.events_file();
    let json_line = event.to_ndjson_line()?;

    if !ctx.state_dir.exists() {
        fs::create_dir_all(&ctx.state_dir).map_err(|e| {
            DocketPostError::UserError(format!(
                "failed to create state directory '{}': {}",
                ctx.state_dir.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            DocketPostError::UserError(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        DocketPostError::UserError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })
}

/// Read every event in the log. A missing log reads as empty.
pub fn read_events(ctx: &AppContext) -> Result<Vec<Event>> {
    let events_file = ctx.events_file();
    if !events_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&events_file).map_err(|e| {
        DocketPostError::UserError(format!(
            "failed to read events file '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|e| {
                DocketPostError::UserError(format!(
                    "malformed event on line {} of '{}': {}",
                    i + 1,
                    events_file.display(),
                    e
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_event_creation() {
        let event = Event::new(EventAction::Publish);

        assert_eq!(event.action, EventAction::Publish);
        assert!(!event.actor.is_empty());
        assert!(event.case.is_none());
        let age = Utc::now().signed_duration_since(event.ts);
        assert!(age.num_minutes() < 1);
    }

    #[test]
    fn test_event_serialization_omits_missing_case() {
        let line = Event::new(EventAction::Subscribe).to_ndjson_line().unwrap();
        assert!(!line.contains("\"case\""));
        assert!(line.contains("\"action\":\"subscribe\""));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_append_and_read_events() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = AppContext::at(temp_dir.path().join("state"));

        append_event(&ctx, &Event::new(EventAction::Subscribe).with_case("590000")).unwrap();
        append_event(
            &ctx,
            &Event::new(EventAction::Publish)
                .with_case("590000")
                .with_details(json!({"post_id": "42", "template": "post"})),
        )
        .unwrap();

        let events = read_events(&ctx).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].action, EventAction::Subscribe);
        assert_eq!(events[1].case.as_deref(), Some("590000"));
        assert_eq!(events[1].details["post_id"], "42");
    }

    #[test]
    fn test_read_missing_log_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = AppContext::at(temp_dir.path());
        assert!(read_events(&ctx).unwrap().is_empty());
    }

    #[test]
    fn test_action_display_matches_serde() {
        for action in [
            EventAction::Subscribe,
            EventAction::Publish,
            EventAction::PublishFailed,
        ] {
            let serialized = serde_json::to_string(&action).unwrap();
            assert_eq!(serialized, format!("\"{}\"", action));
        }
    }
}
