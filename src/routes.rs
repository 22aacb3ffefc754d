use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::{AppError, AppJson, AppResult},
    models::{BulkAddRequest, MovieOut, MoviePatch, NewMovie, to_wire_many},
};

pub async fn add_movie(
    State(state): State<AppState>,
    AppJson(body): AppJson<NewMovie>,
) -> AppResult<Json<MovieOut>> {
    let created = state.store.insert(body).await?;
    Ok(Json(created.into()))
}

pub async fn add_movies(
    State(state): State<AppState>,
    AppJson(body): AppJson<BulkAddRequest>,
) -> AppResult<Json<Vec<MovieOut>>> {
    let created = state.store.insert_many(body.movies).await?;
    Ok(Json(to_wire_many(created)))
}

pub async fn get_movies(State(state): State<AppState>) -> AppResult<Json<Vec<MovieOut>>> {
    let rows = state.store.all().await?;
    Ok(Json(to_wire_many(rows)))
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MovieOut>> {
    let movie = state.store.find(id).await?.ok_or(AppError::NotFound(id))?;
    Ok(Json(movie.into()))
}

pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<&'static str>> {
    state.store.delete(id).await?;
    Ok(Json("that movie was deleted"))
}

pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(patch): AppJson<MoviePatch>,
) -> AppResult<Json<MovieOut>> {
    let updated = state.store.update(id, patch).await?;
    Ok(Json(updated.into()))
}
