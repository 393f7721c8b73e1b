use serde_json::json;

use crate::common::{TestApp, draft, routes};

const CLASSIFICATION: &str = r#"{"category":"bottoms","subcategory":"jeans","color":"blue","style":"casual","season":"all","description":"Straight-leg denim"}"#;

#[tokio::test]
async fn analyze_uploads_image_and_returns_classification() {
    let app = TestApp::spawn().await;
    let token = app.token("alice");
    app.ai.push_reply(CLASSIFICATION);

    let res = app.upload_image(b"fake-jpeg-bytes".to_vec(), &token).await;

    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["staged"]["fallback"], false);
    assert_eq!(res.body["staged"]["analysis"]["subcategory"], "jeans");
    assert_eq!(res.body["draft"]["category"], "bottoms");
    assert_eq!(res.body["draft"]["color"], "blue");
    assert_eq!(app.ai.request_count(), 1);

    let image_url = res.body["staged"]["image_url"].as_str().unwrap();
    assert!(image_url.contains("/api/v1/media/clothing/alice/"), "{image_url}");

    let media = app.client.get(image_url).send().await.unwrap();
    assert_eq!(media.status().as_u16(), 200);
    assert_eq!(media.headers()["content-type"], "image/jpeg");
    assert_eq!(media.bytes().await.unwrap().as_ref(), b"fake-jpeg-bytes");
}

#[tokio::test]
async fn analyze_falls_back_on_unparseable_reply() {
    let app = TestApp::spawn().await;
    let token = app.token("alice");
    app.ai.push_reply("Sorry, I can't tell what this is.");

    let res = app.upload_image(b"img".to_vec(), &token).await;

    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["staged"]["fallback"], true);
    assert_eq!(res.body["staged"]["analysis"]["category"], "tops");
    assert_eq!(res.body["staged"]["analysis"]["color"], "unknown");
    assert_eq!(res.body["draft"]["description"], "Clothing item");
}

#[tokio::test]
async fn analyze_reports_ai_failure() {
    let app = TestApp::spawn().await;
    let token = app.token("alice");
    app.ai.push_failure("quota exceeded");

    let res = app.upload_image(b"img".to_vec(), &token).await;

    assert_eq!(res.status, 502, "{}", res.text);
    assert_eq!(res.body["code"], "AI_UNAVAILABLE");
}

#[tokio::test]
async fn analyze_without_image_field_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.token("alice");
    let form = reqwest::multipart::Form::new().text("note", "no image here");

    let res = app
        .client
        .post(app.url(routes::CLOTHING_ANALYZE))
        .header("Authorization", format!("Bearer {token}"))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 400);
    assert_eq!(app.ai.request_count(), 0);
}

#[tokio::test]
async fn requests_without_token_are_unauthorized() {
    let app = TestApp::spawn().await;

    let res = app.get_without_token(routes::CLOTHING).await;
    assert_eq!(res.status, 401);
    assert_eq!(res.body["code"], "TOKEN_MISSING");

    let res = app.get_with_token(routes::CLOTHING, "not-a-jwt").await;
    assert_eq!(res.status, 401);
    assert_eq!(res.body["code"], "TOKEN_INVALID");
}

#[tokio::test]
async fn save_list_and_filter_items() {
    let app = TestApp::spawn().await;
    let token = app.token("alice");

    let res = app
        .post_with_token(routes::CLOTHING, &draft("tops"), &token)
        .await;
    assert_eq!(res.status, 201, "{}", res.text);
    assert_eq!(res.body["user_id"], "alice");
    assert_eq!(res.body["ai_description"], "Plain tee");
    app.save_item(&token, "shoes").await;

    let res = app.get_with_token(routes::CLOTHING, &token).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["total"], 2);
    assert_eq!(res.body["items"][0]["category"], "shoes");

    let res = app
        .get_with_token(&format!("{}?category=tops", routes::CLOTHING), &token)
        .await;
    assert_eq!(res.body["total"], 1);
    assert_eq!(res.body["items"][0]["category"], "tops");

    let res = app
        .get_with_token(&format!("{}?category=all", routes::CLOTHING), &token)
        .await;
    assert_eq!(res.body["total"], 2);
}

#[tokio::test]
async fn items_are_scoped_to_their_owner() {
    let app = TestApp::spawn().await;
    let alice = app.token("alice");
    let bob = app.token("bob");
    let id = app.save_item(&alice, "tops").await;

    let res = app.get_with_token(routes::CLOTHING, &bob).await;
    assert_eq!(res.body["total"], 0);

    let res = app
        .delete_with_token(&routes::clothing_item(&id), &bob)
        .await;
    assert_eq!(res.status, 404);

    let res = app.get_with_token(routes::CLOTHING, &alice).await;
    assert_eq!(res.body["total"], 1);
}

#[tokio::test]
async fn delete_removes_one_item() {
    let app = TestApp::spawn().await;
    let token = app.token("alice");
    let id = app.save_item(&token, "tops").await;
    app.save_item(&token, "tops").await;

    let res = app
        .delete_with_token(&routes::clothing_item(&id), &token)
        .await;
    assert_eq!(res.status, 204);

    let res = app
        .delete_with_token(&routes::clothing_item(&id), &token)
        .await;
    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");

    let res = app.get_with_token(routes::CLOTHING, &token).await;
    assert_eq!(res.body["total"], 1);
}

#[tokio::test]
async fn save_with_blank_category_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.token("alice");

    let res = app
        .post_with_token(routes::CLOTHING, &draft(""), &token)
        .await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn fifteenth_item_triggers_upgrade_offer() {
    let app = TestApp::spawn().await;
    let token = app.token("alice");
    for _ in 0..15 {
        app.save_item(&token, "tops").await;
    }

    let res = app
        .post_with_token(routes::CLOTHING, &draft("tops"), &token)
        .await;
    assert_eq!(res.status, 402, "{}", res.text);
    assert_eq!(res.body["code"], "UPGRADE_REQUIRED");
    assert_eq!(res.body["offer"]["required_tier"], "pro");
    assert_eq!(res.body["offer"]["price_usd"], 10);
    assert_eq!(res.body["offer"]["new_limit"], 100);
    assert_eq!(res.body["offer"]["current_count"], 15);
    assert_eq!(
        res.body["message"],
        "Upgrade to Pro for $10 to add up to 100 clothing items"
    );

    // Accepting the offer saves the pending item once.
    let res = app
        .post_with_token(
            routes::CLOTHING_UPGRADE,
            &json!({ "tier": "pro", "item": draft("tops") }),
            &token,
        )
        .await;
    assert_eq!(res.status, 201, "{}", res.text);

    let res = app.get_with_token(routes::CLOTHING, &token).await;
    assert_eq!(res.body["total"], 16);

    // The tier is not remembered.
    let res = app
        .post_with_token(routes::CLOTHING, &draft("tops"), &token)
        .await;
    assert_eq!(res.status, 402);
}

#[tokio::test]
async fn upgrade_message_follows_language() {
    let app = TestApp::spawn().await;
    let token = app.token("alice");
    for _ in 0..15 {
        app.save_item(&token, "tops").await;
    }
    app.put_with_token(routes::LANGUAGE, &json!({ "language": "es" }), &token)
        .await;

    let res = app
        .post_with_token(routes::CLOTHING, &draft("tops"), &token)
        .await;
    assert_eq!(res.status, 402);
    assert_eq!(
        res.body["message"],
        "Actualiza a Pro por $10 para agregar hasta 100 prendas"
    );
}

#[tokio::test]
async fn options_are_localized() {
    let app = TestApp::spawn().await;
    let token = app.token("alice");

    let res = app.get_with_token(routes::CLOTHING_OPTIONS, &token).await;
    assert_eq!(res.status, 200, "{}", res.text);
    let categories = res.body["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 5);
    assert_eq!(categories[0]["value"], "tops");
    assert!(!categories[0]["subcategories"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn upgrade_below_current_count_offers_next_tier_in_caller_language() {
    let app = TestApp::spawn().await;
    let token = app.token("alice");
    app.seed_items("alice", 100).await;
    app.put_with_token(routes::LANGUAGE, &json!({ "language": "es" }), &token)
        .await;

    let res = app
        .post_with_token(
            routes::CLOTHING_UPGRADE,
            &json!({ "tier": "pro", "item": draft("tops") }),
            &token,
        )
        .await;
    assert_eq!(res.status, 402, "{}", res.text);
    assert_eq!(res.body["offer"]["required_tier"], "premium");
    assert_eq!(res.body["offer"]["current_count"], 100);
    assert_eq!(
        res.body["message"],
        "Actualiza a Premium por $20 para agregar hasta 500 prendas"
    );

    let res = app
        .post_with_token(
            routes::CLOTHING_UPGRADE,
            &json!({ "tier": "premium", "item": draft("tops") }),
            &token,
        )
        .await;
    assert_eq!(res.status, 201, "{}", res.text);
}
