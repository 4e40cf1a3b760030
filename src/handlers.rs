use crate::checkin::submit;
use crate::errors::AppError;
use crate::models::{CheckIn, CheckInRequest, Mood, MoodForm, NoteForm};
use crate::state::AppState;
use crate::ui::render_index;
use crate::view::{project, View};
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_index(&project(&session)))
}

pub async fn get_state(State(state): State<AppState>) -> Json<View> {
    let session = state.session.lock().await;
    Json(project(&session))
}

pub async fn get_history(State(state): State<AppState>) -> Json<Vec<CheckIn>> {
    let session = state.session.lock().await;
    Json(session.history.log().entries().to_vec())
}

pub async fn select_mood(
    State(state): State<AppState>,
    Form(form): Form<MoodForm>,
) -> Result<Redirect, AppError> {
    apply_selection(&state, &form.mood).await?;
    Ok(Redirect::to("/"))
}

pub async fn select_mood_json(
    State(state): State<AppState>,
    Json(payload): Json<MoodForm>,
) -> Result<Json<View>, AppError> {
    apply_selection(&state, &payload.mood).await?;
    let session = state.session.lock().await;
    Ok(Json(project(&session)))
}

pub async fn request_support(State(state): State<AppState>, Form(form): Form<NoteForm>) -> Redirect {
    submit(&state, Some(form.note.as_str())).await;
    Redirect::to("/")
}

/// Validation and transport failures are reported through the view's status
/// line, so this only rejects unknown mood tags.
pub async fn check_in(
    State(state): State<AppState>,
    Json(payload): Json<CheckInRequest>,
) -> Result<Json<View>, AppError> {
    if let Some(tag) = payload.mood.as_deref() {
        apply_selection(&state, tag).await?;
    }

    submit(&state, payload.note.as_deref()).await;
    let session = state.session.lock().await;
    Ok(Json(project(&session)))
}

async fn apply_selection(state: &AppState, tag: &str) -> Result<(), AppError> {
    let mood: Mood = tag.parse()?;
    state.session.lock().await.selector.select(mood);
    Ok(())
}
