use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Joke {
    pub id: String,
    pub joke: String,
    pub status: u16,
}

/// Search items carry no `status`, matching the live API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub joke: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
    pub search_term: String,
    pub status: u16,
    pub total_jokes: usize,
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub term: String,
}

pub type Db = Arc<Vec<Joke>>;

pub fn default_jokes() -> Vec<Joke> {
    [
        ("R7UfaahVfFd", "My dog used to chase people on a bike a lot. It got so bad I had to take his bike away."),
        ("0189hNRf2g", "I'm tired of following my dreams. I'm just going to ask them where they are going and meet up with them later."),
        ("08EQZ8EQukb", "Did you hear about the guy whose whole left side was cut off? He's all right now."),
        ("0DtrrOZDlyd", "Why didn't the skeleton cross the road? Because he had no guts."),
        ("0LuXvkq4Muc", "What did one nut say as he chased another nut? I'm a cashew!"),
    ]
    .into_iter()
    .map(|(id, joke)| Joke {
        id: id.to_string(),
        joke: joke.to_string(),
        status: 200,
    })
    .collect()
}

pub fn app() -> Router {
    app_with_jokes(default_jokes())
}

pub fn app_with_jokes(jokes: Vec<Joke>) -> Router {
    let db: Db = Arc::new(jokes);
    Router::new()
        .route("/", get(random_joke))
        .route("/search", get(search_jokes))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_jokes(listener: TcpListener, jokes: Vec<Joke>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_jokes(jokes)).await
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"))
}

async fn random_joke(State(db): State<Db>, headers: HeaderMap) -> Response {
    let Some(joke) = db.choose(&mut rand::thread_rng()).cloned() else {
        let body = serde_json::json!({ "message": "no jokes available", "status": 404 });
        return (StatusCode::NOT_FOUND, Json(body)).into_response();
    };
    if wants_json(&headers) {
        Json(joke).into_response()
    } else {
        ([(header::CONTENT_TYPE, "text/plain")], joke.joke).into_response()
    }
}

async fn search_jokes(State(db): State<Db>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    let needle = params.term.to_lowercase();
    let results: Vec<SearchHit> = db
        .iter()
        .filter(|j| j.joke.to_lowercase().contains(&needle))
        .map(|j| SearchHit {
            id: j.id.clone(),
            joke: j.joke.clone(),
        })
        .collect();
    Json(SearchResponse {
        total_jokes: results.len(),
        results,
        search_term: params.term,
        status: 200,
    })
}
