use mockito::Server;
use std::env;

fn envelope(text: &str) -> String {
    serde_json::json!({ "content": [{ "text": text }] }).to_string()
}

// Both one-shot helpers read PANTRY_CHEF__ENDPOINT, so they share one test
// to keep the process environment race-free.
#[tokio::test]
async fn test_one_shot_helpers_use_env_endpoint() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/.netlify/functions/anthropic")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(
            r#"[{"name": "Omelette", "description": "d", "ingredients": ["egg"],
                "time": "5 minutes", "difficulty": "easy"}]"#,
        ))
        .create();

    env::set_var(
        "PANTRY_CHEF__ENDPOINT",
        format!("{}/.netlify/functions/anthropic", server.url()),
    );

    let recipes = pantry_chef::suggest_recipes(&["egg"]).await.unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].name, "Omelette");

    server.reset_async().await;
    server
        .mock("POST", "/.netlify/functions/anthropic")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(r#"["tomato", "basil"]"#))
        .create();

    let path = env::temp_dir().join(format!("pantry-{}.jpg", std::process::id()));
    std::fs::write(&path, b"jpeg bytes").unwrap();

    let found = pantry_chef::scan_image(&path).await.unwrap();
    assert_eq!(found, ["tomato", "basil"]);

    std::fs::remove_file(&path).unwrap();
    env::remove_var("PANTRY_CHEF__ENDPOINT");
}
