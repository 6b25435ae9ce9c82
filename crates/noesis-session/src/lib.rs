//! # noesis-session
//!
//! Process-wide reactive session state for Noesis.
//!
//! Two mutable cells with application-lifetime scope: the current auth token
//! (`None` when signed out) and the definition currently being drafted or
//! reviewed (`None` otherwise). Writers assign through the setters; any
//! subscriber observes the update through its [`tokio::sync::watch`]
//! receiver. No further invariants and no persistence; the token lives in
//! memory only.

use std::sync::OnceLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use noesis_core::entities::UserDefinition;

/// Token bundle issued by the auth provider on sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthToken {
    pub access_token: String,
    pub id_token: Option<String>,
    pub refresh_token: Option<String>,
    /// Lifetime in seconds, as reported by the provider.
    pub expires_in: Option<i64>,
}

/// The two session cells. Usually accessed through [`session()`].
#[derive(Debug)]
pub struct Session {
    token: watch::Sender<Option<AuthToken>>,
    active_definition: watch::Sender<Option<UserDefinition>>,
}

impl Session {
    /// Create an empty (signed-out) session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: watch::Sender::new(None),
            active_definition: watch::Sender::new(None),
        }
    }

    /// Sign in: store the token and notify subscribers.
    pub fn set_token(&self, token: AuthToken) {
        self.token.send_replace(Some(token));
    }

    /// Sign out: clear the token and notify subscribers.
    pub fn clear_token(&self) {
        self.token.send_replace(None);
    }

    /// Current token, if signed in.
    #[must_use]
    pub fn token(&self) -> Option<AuthToken> {
        self.token.borrow().clone()
    }

    /// Current access token for `Authorization: Bearer` headers.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.token.borrow().as_ref().map(|t| t.access_token.clone())
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.token.borrow().is_some()
    }

    /// Observe token changes. The receiver sees the current value first.
    #[must_use]
    pub fn subscribe_token(&self) -> watch::Receiver<Option<AuthToken>> {
        self.token.subscribe()
    }

    /// Stage the definition being drafted or reviewed.
    pub fn set_active_definition(&self, definition: UserDefinition) {
        self.active_definition.send_replace(Some(definition));
    }

    /// Drop the staged definition (submitted, discarded, or review done).
    pub fn clear_active_definition(&self) {
        self.active_definition.send_replace(None);
    }

    /// Definition currently being drafted or reviewed, if any.
    #[must_use]
    pub fn active_definition(&self) -> Option<UserDefinition> {
        self.active_definition.borrow().clone()
    }

    /// Observe changes to the staged definition.
    #[must_use]
    pub fn subscribe_active_definition(&self) -> watch::Receiver<Option<UserDefinition>> {
        self.active_definition.subscribe()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

static SESSION: OnceLock<Session> = OnceLock::new();

/// The shared process-wide session.
pub fn session() -> &'static Session {
    SESSION.get_or_init(Session::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use noesis_core::entities::{
        Definition, ReviewStatus, Source, SourceKind, UserDefinition, WebDetails,
    };
    use noesis_core::enums::Category;
    use pretty_assertions::assert_eq;

    fn token(access: &str) -> AuthToken {
        AuthToken {
            access_token: access.into(),
            id_token: None,
            refresh_token: None,
            expires_in: Some(3600),
        }
    }

    fn draft() -> UserDefinition {
        UserDefinition {
            definition: Definition {
                id: "d-1".into(),
                category: Category::HumanIntelligence,
                content: "The capacity to learn.".into(),
                source: Source {
                    id: "s-1".into(),
                    submitted_by: "u-1".into(),
                    submitted_date: Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap(),
                    title: "On Minds".into(),
                    authors: vec![],
                    kind: SourceKind::Web(WebDetails {
                        url: "https://example.org".into(),
                        access_date: Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap(),
                        publication_date: None,
                    }),
                },
                submitted_by: "u-2".into(),
                submitted_on: Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap(),
            },
            status: ReviewStatus::Pending,
            rejections: vec![],
        }
    }

    #[test]
    fn fresh_session_is_signed_out() {
        let session = Session::new();
        assert!(!session.is_signed_in());
        assert!(session.token().is_none());
        assert!(session.active_definition().is_none());
    }

    #[test]
    fn set_and_clear_token() {
        let session = Session::new();
        session.set_token(token("jwt-abc"));
        assert!(session.is_signed_in());
        assert_eq!(session.access_token().as_deref(), Some("jwt-abc"));

        session.clear_token();
        assert!(!session.is_signed_in());
        assert!(session.access_token().is_none());
    }

    #[tokio::test]
    async fn subscriber_observes_token_update() {
        let session = Session::new();
        let mut receiver = session.subscribe_token();
        assert!(receiver.borrow().is_none());

        session.set_token(token("jwt-abc"));
        receiver.changed().await.expect("sender alive");
        assert_eq!(
            receiver.borrow().as_ref().map(|t| t.access_token.clone()),
            Some("jwt-abc".to_string())
        );
    }

    #[tokio::test]
    async fn two_subscribers_both_observe() {
        let session = Session::new();
        let mut first = session.subscribe_active_definition();
        let mut second = session.subscribe_active_definition();

        session.set_active_definition(draft());
        first.changed().await.expect("sender alive");
        second.changed().await.expect("sender alive");
        assert!(first.borrow().is_some());
        assert!(second.borrow().is_some());
    }

    #[test]
    fn staged_definition_round_trips() {
        let session = Session::new();
        session.set_active_definition(draft());
        assert_eq!(
            session.active_definition().map(|d| d.definition.id),
            Some("d-1".to_string())
        );
        session.clear_active_definition();
        assert!(session.active_definition().is_none());
    }

    #[test]
    fn process_wide_accessor_returns_one_instance() {
        let first: *const Session = session();
        let second: *const Session = session();
        assert_eq!(first, second);
    }
}
