use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_jokes, default_jokes, Joke, SearchResponse};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_get(uri: &str) -> Request<String> {
    Request::builder()
        .uri(uri)
        .header(http::header::ACCEPT, "application/json")
        .body(String::new())
        .unwrap()
}

fn joke(id: &str, text: &str) -> Joke {
    Joke {
        id: id.to_string(),
        joke: text.to_string(),
        status: 200,
    }
}

// --- random ---

#[tokio::test]
async fn random_joke_returns_json_from_the_set() {
    let resp = app().oneshot(json_get("/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let got: Joke = body_json(resp).await;
    assert_eq!(got.status, 200);
    assert!(default_jokes().iter().any(|j| j.id == got.id && j.joke == got.joke));
}

#[tokio::test]
async fn random_joke_without_accept_is_plain_text() {
    let app = app_with_jokes(vec![joke("1", "Only joke")]);
    let resp = app
        .oneshot(Request::builder().uri("/").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(http::header::CONTENT_TYPE).unwrap(),
        "text/plain"
    );
    assert_eq!(&body_bytes(resp).await[..], b"Only joke");
}

#[tokio::test]
async fn random_joke_with_empty_set_returns_404() {
    let resp = app_with_jokes(Vec::new()).oneshot(json_get("/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["status"], 404);
}

// --- search ---

#[tokio::test]
async fn search_filters_case_insensitively() {
    let app = app_with_jokes(vec![
        joke("1", "A Cat walks into a bar"),
        joke("2", "A dog walks into a bar"),
        joke("3", "Concatenate this"),
    ]);
    let resp = app.oneshot(json_get("/search?term=cat")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let got: SearchResponse = body_json(resp).await;
    assert_eq!(got.search_term, "cat");
    assert_eq!(got.total_jokes, 2);
    let ids: Vec<_> = got.results.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, ["1", "3"]);
}

#[tokio::test]
async fn search_decodes_encoded_term() {
    let app = app_with_jokes(vec![joke("1", "knock knock"), joke("2", "knockout")]);
    let resp = app.oneshot(json_get("/search?term=knock+knock")).await.unwrap();

    let got: SearchResponse = body_json(resp).await;
    assert_eq!(got.search_term, "knock knock");
    assert_eq!(got.total_jokes, 1);
    assert_eq!(got.results[0].id, "1");
}

#[tokio::test]
async fn search_without_matches_is_empty() {
    let resp = app().oneshot(json_get("/search?term=zzz")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let got: SearchResponse = body_json(resp).await;
    assert!(got.results.is_empty());
    assert_eq!(got.total_jokes, 0);
    assert_eq!(got.status, 200);
}

#[tokio::test]
async fn search_without_term_matches_everything() {
    let resp = app().oneshot(json_get("/search")).await.unwrap();

    let got: SearchResponse = body_json(resp).await;
    assert_eq!(got.total_jokes, default_jokes().len());
    assert_eq!(got.search_term, "");
}

#[tokio::test]
async fn search_items_omit_status() {
    let resp = app().oneshot(json_get("/search?term=road")).await.unwrap();

    let body: serde_json::Value = body_json(resp).await;
    let first = &body["results"][0];
    assert!(first.get("joke").is_some());
    assert!(first.get("status").is_none());
}

// --- routing ---

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app().oneshot(json_get("/j/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
