use crate::catalog::{ACTIVITIES, Activity};
use crate::errors::AppError;
use crate::models::{
    CalculateResponse, RecoveryForm, SavedEntry, ShareQuery, ShareResponse, ThemePayload,
};
use crate::mood::share_text;
use crate::scoring::{calculate, percentage_at};
use crate::state::AppState;
use crate::theme::{load_dark_mode, store_dark_mode};
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};
use chrono::Local;
use tracing::info;

/// Storage calls touch the filesystem, so they run off the async workers.
async fn blocking<T, F>(task: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(AppError::internal)
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let dark_mode = blocking(move || load_dark_mode(state.store.as_ref())).await?;
    Ok(Html(render_index(dark_mode)))
}

pub async fn list_activities() -> Json<&'static [Activity]> {
    Json(&ACTIVITIES[..])
}

pub async fn calculate_recovery(
    State(state): State<AppState>,
    Json(form): Json<RecoveryForm>,
) -> Result<Json<CalculateResponse>, AppError> {
    let input = form.validate()?;
    let result = {
        let mut rng = state.rng.lock().await;
        calculate(&input, &mut *rng)
    };
    info!(
        percentage = result.rounded_percentage(),
        activities = input.activities.len(),
        "calculated recovery"
    );

    Ok(Json(CalculateResponse {
        share_text: share_text(result.percentage),
        input,
        result,
    }))
}

pub async fn list_history(State(state): State<AppState>) -> Json<Vec<SavedEntry>> {
    let history = state.history.lock().await;
    Json(history.entries().to_vec())
}

pub async fn save_history(
    State(state): State<AppState>,
    Json(form): Json<RecoveryForm>,
) -> Result<(StatusCode, Json<SavedEntry>), AppError> {
    let input = form.validate()?;
    let now = Local::now();
    let percentage = percentage_at(now.naive_local(), &input);

    let mut history = state.history.clone().lock_owned().await;
    let (entry, total) = blocking(move || {
        let entry = history.snapshot(now, input, percentage);
        history.save(entry.clone())?;
        Ok::<_, std::io::Error>((entry, history.entries().len()))
    })
    .await??;
    info!(id = %entry.id, total, "saved history entry");

    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn get_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SavedEntry>, AppError> {
    let history = state.history.lock().await;
    history
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("no saved entry '{id}'")))
}

pub async fn delete_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<SavedEntry>>, AppError> {
    let mut history = state.history.clone().lock_owned().await;
    let remaining = blocking(move || {
        if history.remove(&id)? {
            info!(%id, "deleted history entry");
        }
        Ok::<_, std::io::Error>(history.entries().to_vec())
    })
    .await??;
    Ok(Json(remaining))
}

pub async fn clear_history(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let mut history = state.history.clone().lock_owned().await;
    blocking(move || history.clear()).await??;
    info!("cleared history");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_theme(State(state): State<AppState>) -> Result<Json<ThemePayload>, AppError> {
    let dark_mode = blocking(move || load_dark_mode(state.store.as_ref())).await?;
    Ok(Json(ThemePayload { dark_mode }))
}

pub async fn set_theme(
    State(state): State<AppState>,
    Json(payload): Json<ThemePayload>,
) -> Result<Json<ThemePayload>, AppError> {
    blocking(move || store_dark_mode(state.store.as_ref(), payload.dark_mode)).await??;
    Ok(Json(payload))
}

pub async fn share(Query(query): Query<ShareQuery>) -> Result<Json<ShareResponse>, AppError> {
    if !query.percentage.is_finite() {
        return Err(AppError::bad_request("percentage must be a number"));
    }
    Ok(Json(ShareResponse {
        text: share_text(query.percentage),
    }))
}
