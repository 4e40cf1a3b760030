use crate::models::CheckIn;
use crate::state::{AppState, Phase};
use chrono::Utc;
use tracing::{error, info, warn};

/// Runs one submission to completion and returns the phase it settled in.
///
/// The session lock is released while the support service is contacted, so
/// overlapping submissions are possible. Whichever completes last decides the
/// final status and response, and history is ordered by completion.
pub async fn submit(state: &AppState, note: Option<&str>) -> Phase {
    let check_in = {
        let mut session = state.session.lock().await;
        let Some(mood) = session.selector.selected() else {
            session.phase = Phase::MoodMissing;
            return Phase::MoodMissing;
        };

        session.phase = Phase::Contacting;
        CheckIn::new(
            mood,
            note,
            Utc::now().timestamp_millis(),
            state.config.username.as_str(),
        )
    };

    let outcome = state.client.request_support(&check_in).await;

    let mut session = state.session.lock().await;
    match outcome {
        Ok(support) => {
            info!(mood = %check_in.mood, "check-in supported");
            session.last_support = Some(support);
            if let Err(err) = session.history.record(check_in).await {
                error!(
                    path = %session.history.path().display(),
                    "failed to persist history: {err}"
                );
            }
            session.phase = Phase::Success;
        }
        Err(err) => {
            warn!(endpoint = %state.client.endpoint(), "support request failed: {err}");
            session.phase = Phase::Failed;
        }
    }
    session.phase
}
