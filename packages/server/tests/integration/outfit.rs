use serde_json::{Value, json};

use crate::common::{TestApp, routes};

fn answers() -> Value {
    json!({ "occasion": "work", "weather": "cool", "style_vibe": "professional" })
}

const THREE_OUTFITS: &str = r#"{"outfits":[
    {"name":"Office Classic","items":["white t-shirt","black jeans"],"missing":[],"explanation":"Clean and simple."},
    {"name":"Smart Layers","items":["white t-shirt"],"missing":["blazer"],"explanation":"Add a blazer."},
    {"name":"Easy Friday","items":["black jeans"],"missing":["loafers"],"explanation":"Relaxed but tidy."}
]}"#;

#[tokio::test]
async fn quiz_has_three_questions_with_five_options() {
    let app = TestApp::spawn().await;
    let token = app.token("alice");

    let res = app.get_with_token(routes::QUIZ, &token).await;
    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["language"], "en");
    let questions = res.body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 3);
    for question in questions {
        assert_eq!(question["options"].as_array().unwrap().len(), 5);
    }
    assert_eq!(questions[0]["prompt"], "What's the occasion?");
}

#[tokio::test]
async fn recommendations_are_saved_per_outfit() {
    let app = TestApp::spawn().await;
    let token = app.token("alice");
    app.save_item(&token, "tops").await;
    app.ai.push_reply(THREE_OUTFITS);

    let res = app
        .post_with_token(routes::RECOMMENDATIONS, &answers(), &token)
        .await;
    assert_eq!(res.status, 201, "{}", res.text);
    assert_eq!(res.body["total"], 3);
    let first = &res.body["recommendations"][0];
    assert_eq!(first["occasion"], "work");
    assert_eq!(first["weather"], "cool");
    assert_eq!(first["style_vibe"], "professional");
    assert_eq!(first["ai_explanation"], "Clean and simple.");
    assert_eq!(res.body["recommendations"][1]["missing_items"][0], "blazer");

    let res = app.get_with_token(routes::RECOMMENDATIONS, &token).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["total"], 3);
}

#[tokio::test]
async fn unparseable_reply_saves_single_fallback_outfit() {
    let app = TestApp::spawn().await;
    let token = app.token("alice");
    app.save_item(&token, "tops").await;
    app.ai.push_reply("Here are some ideas: wear a shirt.");

    let res = app
        .post_with_token(routes::RECOMMENDATIONS, &answers(), &token)
        .await;
    assert_eq!(res.status, 201, "{}", res.text);
    assert_eq!(res.body["total"], 1);
    let outfit = &res.body["recommendations"][0];
    assert_eq!(outfit["recommended_items"][0], "Any available top");
    assert_eq!(
        outfit["ai_explanation"],
        "A simple, comfortable outfit perfect for the occasion."
    );
}

#[tokio::test]
async fn empty_wardrobe_is_rejected_before_ai_call() {
    let app = TestApp::spawn().await;
    let token = app.token("alice");

    let res = app
        .post_with_token(routes::RECOMMENDATIONS, &answers(), &token)
        .await;
    assert_eq!(res.status, 409, "{}", res.text);
    assert_eq!(res.body["code"], "EMPTY_WARDROBE");
    assert_eq!(app.ai.request_count(), 0);
}

#[tokio::test]
async fn incomplete_answers_are_rejected() {
    let app = TestApp::spawn().await;
    let token = app.token("alice");
    app.save_item(&token, "tops").await;

    let res = app
        .post_with_token(
            routes::RECOMMENDATIONS,
            &json!({ "occasion": "work", "weather": "", "style_vibe": "classic" }),
            &token,
        )
        .await;
    assert_eq!(res.status, 400, "{}", res.text);

    let res = app
        .post_with_token(routes::RECOMMENDATIONS, &json!({ "occasion": "work" }), &token)
        .await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
    assert_eq!(app.ai.request_count(), 0);
}

#[tokio::test]
async fn history_limit_is_validated() {
    let app = TestApp::spawn().await;
    let token = app.token("alice");

    let res = app
        .get_with_token(&format!("{}?limit=0", routes::RECOMMENDATIONS), &token)
        .await;
    assert_eq!(res.status, 400);

    let res = app
        .get_with_token(&format!("{}?limit=5", routes::RECOMMENDATIONS), &token)
        .await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["total"], 0);
}

#[tokio::test]
async fn history_is_newest_first_and_limited() {
    let app = TestApp::spawn().await;
    let token = app.token("alice");
    app.save_item(&token, "tops").await;
    app.ai.push_reply(THREE_OUTFITS);
    app.post_with_token(routes::RECOMMENDATIONS, &answers(), &token)
        .await;
    app.ai.push_reply(
        r#"{"outfits":[{"name":"Late","items":["tee"],"missing":[],"explanation":"Newest."}]}"#,
    );
    app.post_with_token(routes::RECOMMENDATIONS, &answers(), &token)
        .await;

    let res = app
        .get_with_token(&format!("{}?limit=2", routes::RECOMMENDATIONS), &token)
        .await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["total"], 2);
    assert_eq!(res.body["recommendations"][0]["ai_explanation"], "Newest.");

    let other = app.token("bob");
    let res = app.get_with_token(routes::RECOMMENDATIONS, &other).await;
    assert_eq!(res.body["total"], 0);
}

#[tokio::test]
async fn failed_insert_reports_records_already_saved() {
    let app = TestApp::spawn().await;
    let token = app.token("alice");
    app.save_item(&token, "tops").await;
    app.limit_outfit_inserts(1).await;
    app.ai.push_reply(THREE_OUTFITS);

    let res = app
        .post_with_token(routes::RECOMMENDATIONS, &answers(), &token)
        .await;
    assert_eq!(res.status, 500, "{}", res.text);
    assert_eq!(res.body["code"], "PARTIAL_SAVE");
    let message = res.body["message"].as_str().unwrap();
    assert!(
        message.starts_with("Saved 1 of 3 recommendations before failing"),
        "{message}"
    );
    let saved = res.body["saved"].as_array().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0]["ai_explanation"], "Clean and simple.");

    let res = app.get_with_token(routes::RECOMMENDATIONS, &token).await;
    assert_eq!(res.body["total"], 1);
    assert_eq!(res.body["recommendations"][0]["id"], saved[0]["id"]);
}
