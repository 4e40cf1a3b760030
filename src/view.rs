use crate::models::Mood;
use crate::state::Session;
use crate::support::Support;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodOption {
    pub tag: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub message: &'static str,
    pub kind: &'static str,
}

/// Everything the page shows, derived from the session and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub moods: Vec<MoodOption>,
    pub status: StatusLine,
    /// `None` keeps the response panel hidden.
    pub response: Option<Support>,
    pub history: Vec<String>,
}

pub fn project(session: &Session) -> View {
    let moods = Mood::ALL
        .into_iter()
        .map(|mood| MoodOption {
            tag: mood.as_str(),
            label: mood.label(),
            active: session.selector.is_active(mood),
        })
        .collect();

    View {
        moods,
        status: StatusLine {
            message: session.phase.message(),
            kind: session.phase.kind(),
        },
        response: session.last_support.clone(),
        history: session.history.log().lines(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryStore;
    use crate::state::{Phase, UNREACHABLE_MESSAGE};

    async fn empty_session() -> (tempfile::TempDir, Session) {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::load(dir.path().join("history.json")).await;
        (dir, Session::new(store))
    }

    #[tokio::test]
    async fn fresh_session_projects_idle_page() {
        let (_dir, session) = empty_session().await;
        let view = project(&session);

        assert_eq!(view.moods.len(), Mood::ALL.len());
        assert!(view.moods.iter().all(|option| !option.active));
        assert_eq!(view.status.message, "");
        assert!(view.response.is_none());
        assert_eq!(view.history, vec!["No check-ins yet"]);
    }

    #[tokio::test]
    async fn selection_and_failure_are_reflected() {
        let (_dir, mut session) = empty_session().await;
        session.selector.select(Mood::Tired);
        session.phase = Phase::Failed;

        let view = project(&session);
        let active: Vec<&str> = view
            .moods
            .iter()
            .filter(|option| option.active)
            .map(|option| option.tag)
            .collect();
        assert_eq!(active, vec!["tired"]);
        assert_eq!(view.status.message, UNREACHABLE_MESSAGE);
        assert_eq!(view.status.kind, "error");
    }
}
