use axum::http::{Method, StatusCode};
use serde_json::json;
use time::Duration;
use tower::ServiceExt;

use crate::db::models::QuizQuestion;
use crate::db::types::{AnswerValue, QuestionType};
use crate::test_support;

fn one_question() -> Vec<QuizQuestion> {
    vec![QuizQuestion {
        id: "q1".to_string(),
        kind: QuestionType::ShortAnswer,
        text: "1+1?".to_string(),
        options: None,
        correct_answer: AnswerValue::One("2".to_string()),
    }]
}

fn true_false_quiz_payload(creator: &str) -> serde_json::Value {
    json!({
        "title": "مراجعة التربية الإسلامية",
        "subject": "islamic",
        "creatorName": creator,
        "questions": [
            {
                "type": "trueFalse",
                "text": "الصلاة عماد الدين",
                "options": ["صح", "خطأ"],
                "correctAnswer": "صح"
            }
        ]
    })
}

async fn create_quiz(ctx: &test_support::TestContext, payload: serde_json::Value) -> serde_json::Value {
    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(Method::POST, "/api/quizzes", None, Some(payload)))
        .await
        .expect("create quiz");

    let status = response.status();
    let created = test_support::read_json(response).await;
    assert_eq!(status, StatusCode::CREATED, "response: {created}");
    created
}

#[tokio::test]
async fn create_assigns_code_and_question_ids() {
    let ctx = test_support::setup_test_context().await;

    let payload = json!({
        "title": "Chemistry revision",
        "subject": "chemistry",
        "creatorName": "Sara",
        "questions": [
            {
                "type": "multipleChoice",
                "text": "Which of these are noble gases?",
                "options": ["He", "O2", "Ne", "N2"],
                "correctAnswer": ["He", "Ne"]
            },
            {
                "type": "shortAnswer",
                "text": "Chemical symbol for iron?",
                "correctAnswer": "Fe"
            }
        ]
    });

    let created = create_quiz(&ctx, payload).await;

    let code = created["code"].as_str().expect("code");
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit()));

    let questions = created["questions"].as_array().expect("questions");
    assert_eq!(questions.len(), 2);
    for question in questions {
        assert!(!question["id"].as_str().expect("question id").is_empty());
    }
}

#[tokio::test]
async fn lookup_by_code_is_case_insensitive() {
    let ctx = test_support::setup_test_context().await;

    let created = create_quiz(&ctx, true_false_quiz_payload("Sara")).await;
    let code = created["code"].as_str().expect("code");

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::GET,
            &format!("/api/quizzes/code/{}", code.to_lowercase()),
            None,
            None,
        ))
        .await
        .expect("lookup by code");

    let status = response.status();
    let found = test_support::read_json(response).await;
    assert_eq!(status, StatusCode::OK, "response: {found}");
    assert_eq!(found["id"], created["id"]);
}

#[tokio::test]
async fn create_rejects_malformed_quizzes() {
    let ctx = test_support::setup_test_context().await;

    let short_title = json!({
        "title": "ab",
        "subject": "math",
        "creatorName": "Sara",
        "questions": [
            {"type": "shortAnswer", "text": "1+1?", "correctAnswer": "2"}
        ]
    });
    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(Method::POST, "/api/quizzes", None, Some(short_title)))
        .await
        .expect("short title");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let no_questions = json!({
        "title": "Empty quiz",
        "subject": "math",
        "creatorName": "Sara",
        "questions": []
    });
    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(Method::POST, "/api/quizzes", None, Some(no_questions)))
        .await
        .expect("no questions");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let single_option = json!({
        "title": "Broken choices",
        "subject": "math",
        "creatorName": "Sara",
        "questions": [
            {
                "type": "multipleChoice",
                "text": "Pick one",
                "options": ["only"],
                "correctAnswer": "only"
            }
        ]
    });
    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(Method::POST, "/api/quizzes", None, Some(single_option)))
        .await
        .expect("single option");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_blank_term_returns_nothing() {
    let ctx = test_support::setup_test_context().await;

    create_quiz(&ctx, true_false_quiz_payload("Sara")).await;

    for uri in ["/api/quizzes/search", "/api/quizzes/search?term="] {
        let response = ctx
            .app
            .clone()
            .oneshot(test_support::json_request(Method::GET, uri, None, None))
            .await
            .expect("blank search");

        let status = response.status();
        let results = test_support::read_json(response).await;
        assert_eq!(status, StatusCode::OK, "response: {results}");
        assert_eq!(results.as_array().expect("array").len(), 0);
    }
}

#[tokio::test]
async fn search_matches_subject_substring_newest_first() {
    let ctx = test_support::setup_test_context().await;

    let base = test_support::now();
    let older = test_support::insert_quiz(
        ctx.state.db(),
        "AAAA11",
        "Acids and bases",
        "chemistry",
        "Sara",
        one_question(),
        base - Duration::hours(2),
    )
    .await;
    let newer = test_support::insert_quiz(
        ctx.state.db(),
        "BBBB22",
        "Organic compounds",
        "chemistry",
        "Omar",
        one_question(),
        base - Duration::hours(1),
    )
    .await;
    test_support::insert_quiz(
        ctx.state.db(),
        "CCCC33",
        "Fractions",
        "math",
        "Sara",
        one_question(),
        base,
    )
    .await;

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(Method::GET, "/api/quizzes/search?term=CHEM", None, None))
        .await
        .expect("subject search");

    let status = response.status();
    let results = test_support::read_json(response).await;
    assert_eq!(status, StatusCode::OK, "response: {results}");
    let items = results.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], newer.id.as_str());
    assert_eq!(items[1]["id"], older.id.as_str());

    // Exact code lookup through search, regardless of case
    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(Method::GET, "/api/quizzes/search?term=cccc33", None, None))
        .await
        .expect("code search");
    let results = test_support::read_json(response).await;
    let items = results.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["code"], "CCCC33");
}

#[tokio::test]
async fn delete_is_limited_to_creator_and_admin() {
    let ctx = test_support::setup_test_context().await;

    let created = create_quiz(&ctx, true_false_quiz_payload("Sara")).await;
    let quiz_id = created["id"].as_str().expect("quiz id").to_string();
    let question_id = created["questions"][0]["id"].as_str().expect("question id").to_string();

    let attempt = json!({
        "quizId": quiz_id,
        "userName": "Lina",
        "answers": [{"questionId": question_id, "answer": "صح"}]
    });
    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(Method::POST, "/api/quizzes/attempts", None, Some(attempt)))
        .await
        .expect("submit attempt");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::DELETE,
            &format!("/api/quizzes/{quiz_id}"),
            None,
            Some(json!({"creatorName": "Bob"})),
        ))
        .await
        .expect("delete as stranger");
    let status = response.status();
    let body = test_support::read_json(response).await;
    assert_eq!(status, StatusCode::FORBIDDEN, "response: {body}");
    assert_eq!(body["detail"], "not authorized to delete this quiz");

    // Nothing was touched: the quiz and its attempts are still there.
    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(Method::GET, &format!("/api/quizzes/{quiz_id}"), None, None))
        .await
        .expect("quiz still present");
    assert_eq!(response.status(), StatusCode::OK);

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::GET,
            &format!("/api/quizzes/{quiz_id}/attempts"),
            None,
            None,
        ))
        .await
        .expect("attempts still present");
    let attempts = test_support::read_json(response).await;
    assert_eq!(attempts.as_array().expect("array").len(), 1);

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::DELETE,
            &format!("/api/quizzes/{quiz_id}"),
            None,
            Some(json!({"creatorName": "Sara"})),
        ))
        .await
        .expect("delete as creator");
    assert_eq!(response.status(), StatusCode::OK);

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(Method::GET, &format!("/api/quizzes/{quiz_id}"), None, None))
        .await
        .expect("quiz gone");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let created = create_quiz(&ctx, true_false_quiz_payload("Sara")).await;
    let quiz_id = created["id"].as_str().expect("quiz id").to_string();

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::DELETE,
            &format!("/api/quizzes/{quiz_id}"),
            None,
            Some(json!({"creatorName": "admin"})),
        ))
        .await
        .expect("delete as admin");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn delete_requires_creator_name_and_existing_quiz() {
    let ctx = test_support::setup_test_context().await;

    let created = create_quiz(&ctx, true_false_quiz_payload("Sara")).await;
    let quiz_id = created["id"].as_str().expect("quiz id").to_string();

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::DELETE,
            &format!("/api/quizzes/{quiz_id}"),
            None,
            Some(json!({})),
        ))
        .await
        .expect("delete without name");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::DELETE,
            "/api/quizzes/does-not-exist",
            None,
            Some(json!({"creatorName": "Sara"})),
        ))
        .await
        .expect("delete missing quiz");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn attempts_are_graded_and_listed() {
    let ctx = test_support::setup_test_context().await;

    let created = create_quiz(&ctx, true_false_quiz_payload("Sara")).await;
    let quiz_id = created["id"].as_str().expect("quiz id").to_string();
    let question_id = created["questions"][0]["id"].as_str().expect("question id").to_string();

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::POST,
            "/api/quizzes/attempts",
            None,
            Some(json!({
                "quizId": quiz_id,
                "userName": "Lina",
                "answers": [{"questionId": question_id, "answer": "صح"}]
            })),
        ))
        .await
        .expect("correct attempt");
    let status = response.status();
    let graded = test_support::read_json(response).await;
    assert_eq!(status, StatusCode::CREATED, "response: {graded}");
    assert_eq!(graded["score"], 1);
    assert_eq!(graded["totalQuestions"], 1);
    assert_eq!(graded["answers"][0]["isCorrect"], true);

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::POST,
            "/api/quizzes/attempts",
            None,
            Some(json!({
                "quizId": quiz_id,
                "userName": "Omar",
                "answers": [{"questionId": question_id, "answer": "خطأ"}]
            })),
        ))
        .await
        .expect("wrong attempt");
    let graded = test_support::read_json(response).await;
    assert_eq!(graded["score"], 0);
    assert_eq!(graded["answers"][0]["isCorrect"], false);

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::GET,
            &format!("/api/quizzes/{quiz_id}/attempts"),
            None,
            None,
        ))
        .await
        .expect("list attempts");
    let attempts = test_support::read_json(response).await;
    assert_eq!(attempts.as_array().expect("array").len(), 2);

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::GET,
            &format!("/api/quizzes/{quiz_id}/my-attempt?userName=Lina"),
            None,
            None,
        ))
        .await
        .expect("my attempt");
    let mine = test_support::read_json(response).await;
    assert_eq!(mine["userName"], "Lina");
    assert_eq!(mine["score"], 1);

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::GET,
            &format!("/api/quizzes/{quiz_id}/my-attempt?userName=Nobody"),
            None,
            None,
        ))
        .await
        .expect("absent attempt");
    let status = response.status();
    let missing = test_support::read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert!(missing.is_null());

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::GET,
            &format!("/api/quizzes/{quiz_id}/my-attempt"),
            None,
            None,
        ))
        .await
        .expect("missing user name");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unmatched_answers_are_dropped_but_denominator_stays() {
    let ctx = test_support::setup_test_context().await;

    let created = create_quiz(
        &ctx,
        json!({
            "title": "Two questions",
            "subject": "math",
            "creatorName": "Sara",
            "questions": [
                {"type": "shortAnswer", "text": "1+1?", "correctAnswer": "2"},
                {"type": "shortAnswer", "text": "2+2?", "correctAnswer": "4"}
            ]
        }),
    )
    .await;
    let quiz_id = created["id"].as_str().expect("quiz id").to_string();
    let first_question = created["questions"][0]["id"].as_str().expect("question id").to_string();

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::POST,
            "/api/quizzes/attempts",
            None,
            Some(json!({
                "quizId": quiz_id,
                "userName": "Lina",
                "answers": [
                    {"questionId": first_question, "answer": "2"},
                    {"questionId": "not-a-question", "answer": "4"}
                ]
            })),
        ))
        .await
        .expect("attempt with stray answer");
    let status = response.status();
    let graded = test_support::read_json(response).await;
    assert_eq!(status, StatusCode::CREATED, "response: {graded}");
    assert_eq!(graded["score"], 1);
    assert_eq!(graded["totalQuestions"], 2);
    assert_eq!(graded["answers"].as_array().expect("answers").len(), 1);
}

#[tokio::test]
async fn attempt_against_unknown_quiz_is_not_found() {
    let ctx = test_support::setup_test_context().await;

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::POST,
            "/api/quizzes/attempts",
            None,
            Some(json!({
                "quizId": "missing-quiz",
                "userName": "Lina",
                "answers": []
            })),
        ))
        .await
        .expect("attempt on missing quiz");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_returns_quizzes_newest_first() {
    let ctx = test_support::setup_test_context().await;

    let base = test_support::now();
    let older = test_support::insert_quiz(
        ctx.state.db(),
        "DDDD44",
        "First quiz",
        "english",
        "Sara",
        one_question(),
        base - Duration::hours(1),
    )
    .await;
    let newer = test_support::insert_quiz(
        ctx.state.db(),
        "EEEE55",
        "Second quiz",
        "english",
        "Sara",
        one_question(),
        base,
    )
    .await;

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(Method::GET, "/api/quizzes", None, None))
        .await
        .expect("list quizzes");
    let status = response.status();
    let results = test_support::read_json(response).await;
    assert_eq!(status, StatusCode::OK, "response: {results}");
    let items = results.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], newer.id.as_str());
    assert_eq!(items[1]["id"], older.id.as_str());
}
