use std::fs;
use std::path::PathBuf;

use exam_review::server::{routes, ServerState};
use exam_review::{load_questions_or_placeholder, LoadErrorKind, PageConfig, QuestionStore};
use tempfile::TempDir;

const QUESTIONS: &str = r#"[
    {
        "id": 1,
        "section": "Sensors",
        "question_text": "What is MQTT?",
        "options": [
            {"key": "a", "text": "A protocol"},
            {"key": "b", "text": "A sensor"}
        ],
        "correct_answer_letter": "a",
        "explanation": "MQTT is a lightweight pub/sub protocol."
    },
    {
        "id": 2,
        "section": "Networking",
        "question_text": "Which layer does CoAP run over?",
        "options": [
            {"key": "a", "text": "TCP"},
            {"key": "b", "text": "UDP"},
            {"key": "c", "text": "Bluetooth"}
        ],
        "correct_answer_letter": "B",
        "explanation": "CoAP is designed for UDP."
    }
]"#;

fn questions_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("questions.json");
    fs::write(&path, content).unwrap();
    path
}

async fn get(store: QuestionStore, path: &str) -> warp::http::Response<warp::hyper::body::Bytes> {
    let filter = routes(ServerState::new(store, PageConfig::default()).shared());
    warp::test::request()
        .method("GET")
        .path(path)
        .reply(&filter)
        .await
}

fn body(res: &warp::http::Response<warp::hyper::body::Bytes>) -> String {
    String::from_utf8(res.body().to_vec()).unwrap()
}

#[tokio::test]
async fn test_index_lists_every_question() {
    let dir = TempDir::new().unwrap();
    let store = load_questions_or_placeholder(questions_file(&dir, QUESTIONS));
    assert!(store.load_error().is_none());

    let res = get(store, "/").await;
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "text/html; charset=utf-8");

    let page = body(&res);
    assert_eq!(page.matches("id=\"question_card_").count(), 2);
    assert!(page.find("Question 1").unwrap() < page.find("Question 2").unwrap());
    assert!(page.contains("A. A protocol"));
    assert!(page.contains("B. UDP"));
    assert!(page.contains("Correct Answer: B"));
    assert_eq!(page.matches(r#"<input type="radio""#).count(), 5);
}

#[tokio::test]
async fn test_missing_file_serves_placeholder() {
    let dir = TempDir::new().unwrap();
    let store = load_questions_or_placeholder(dir.path().join("questions.json"));
    assert_eq!(
        store.load_error().map(|e| e.kind()),
        Some(LoadErrorKind::NotFound)
    );

    let res = get(store, "/").await;
    assert_eq!(res.status(), 200);

    let page = body(&res);
    assert_eq!(page.matches("id=\"question_card_").count(), 1);
    assert!(page.contains("Section: Error"));
    assert!(page.contains("not found. Please create this file."));
    assert!(!page.contains(r#"<input type="radio""#));
}

#[tokio::test]
async fn test_malformed_file_serves_placeholder() {
    let dir = TempDir::new().unwrap();
    let store = load_questions_or_placeholder(questions_file(&dir, "[{\"id\": 1,"));
    assert_eq!(
        store.load_error().map(|e| e.kind()),
        Some(LoadErrorKind::Parse)
    );

    let page = body(&get(store, "/").await);
    assert_eq!(page.matches("id=\"question_card_").count(), 1);
    assert!(page.contains("Section: Error"));
    assert!(page.contains("Please check its format."));
    assert!(!page.contains("not found"));
    assert!(!page.contains(r#"<input type="radio""#));
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let dir = TempDir::new().unwrap();
    let store = load_questions_or_placeholder(questions_file(&dir, QUESTIONS));
    let filter = routes(ServerState::new(store, PageConfig::default()).shared());

    let first = warp::test::request().path("/").reply(&filter).await;
    // Changing the file after startup must not change what is served.
    fs::write(dir.path().join("questions.json"), "[]").unwrap();
    let second = warp::test::request().path("/").reply(&filter).await;

    assert_eq!(first.body(), second.body());
}

#[tokio::test]
async fn test_only_root_is_served() {
    let res = get(QuestionStore::new(Vec::new()), "/questions").await;
    assert_eq!(res.status(), 404);

    let state = ServerState::new(QuestionStore::new(Vec::new()), PageConfig::default());
    let filter = routes(state.shared());
    let res = warp::test::request()
        .method("POST")
        .path("/")
        .reply(&filter)
        .await;
    assert_eq!(res.status(), 405);
}
