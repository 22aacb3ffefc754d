pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::store::MovieStore;

#[derive(Clone)]
pub struct AppState {
    pub store: MovieStore,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/movie/add", post(routes::add_movie))
        .route("/movies/add", post(routes::add_movies))
        .route("/movies/get", get(routes::get_movies))
        .route("/movie/get/{id}", get(routes::get_movie))
        .route("/movie/delete/{id}", delete(routes::delete_movie))
        .route("/movie/update/{id}", patch(routes::update_movie))
        .with_state(state)
}
