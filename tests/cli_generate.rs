mod common;

use common::{GENERATE_PATH, TestContext, candidate_body, error_body};
use mockito::Matcher;
use predicates::prelude::*;

#[test]
fn generate_prints_trimmed_prompt() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), common::TEST_API_KEY.into()))
        .match_body(Matcher::Regex("Image Style: Anime".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(candidate_body("  A fox in snow, anime, --ar 16:9  \n"))
        .create();
    ctx.write_config(&server.url());

    ctx.cli()
        .args(["generate", "--style", "Anime", "--details", "a fox in snow"])
        .assert()
        .success()
        .stdout("A fox in snow, anime, --ar 16:9\n");

    mock.assert();
}

#[test]
fn generate_alias_accepts_short_flags() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .match_body(Matcher::Regex("Lighting: Moonlight".into()))
        .with_status(200)
        .with_body(candidate_body("moonlit harbor"))
        .create();
    ctx.write_config(&server.url());

    ctx.cli().args(["g", "-l", "Moonlight"]).assert().success().stdout("moonlit harbor\n");

    mock.assert();
}

#[test]
fn empty_form_fails_without_request() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", Matcher::Any).expect(0).create();
    ctx.write_config(&server.url());

    ctx.cli()
        .arg("generate")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: Please provide at least some details to generate a prompt.",
        ));

    mock.assert();
}

#[test]
fn invalid_platform_fails_without_request() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", Matcher::Any).expect(0).create();
    ctx.write_config(&server.url());

    ctx.cli()
        .args(["generate", "--tone", "Warm Hues", "--platform", "DALL-E"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid platform selected."));

    mock.assert();
}

#[test]
fn rate_limit_is_reported_as_failure() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body(error_body("Resource has been exhausted"))
        .create();
    ctx.write_config(&server.url());

    ctx.cli()
        .args(["generate", "--details", "a lighthouse"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: Failed to generate prompt: API error: 429 Too Many Requests - Resource has been exhausted",
        ));
}

#[test]
fn error_body_without_message_reports_unknown_error() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("<html>oops</html>")
        .create();
    ctx.write_config(&server.url());

    ctx.cli()
        .args(["generate", "--details", "a lighthouse"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("500 Internal Server Error - Unknown error"));
}

#[test]
fn empty_candidates_fall_back_to_placeholder_text() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"candidates":[]}"#)
        .create();
    ctx.write_config(&server.url());

    ctx.cli()
        .args(["generate", "--details", "a lighthouse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The model returned an empty or malformed response."));
}

#[test]
fn prompt_preview_makes_no_request() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", Matcher::Any).expect(0).create();
    ctx.write_config(&server.url());

    ctx.cli()
        .args([
            "generate",
            "--angle",
            "Low Angle",
            "--platform",
            "GPT Image Generation",
            "--prompt-preview",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Image Style: not specified"))
        .stdout(predicate::str::contains("- Camera Angle: Low Angle"))
        .stdout(predicate::str::contains("general text-to-image model"))
        .stdout(predicate::str::contains("--ar").not());

    mock.assert();
}

#[test]
fn explicit_config_path_must_exist() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--details", "x", "--config", "missing.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn unknown_config_keys_are_rejected() {
    let ctx = TestContext::new();
    ctx.write_file("artprompt.toml", "[gemini]\nendpoint = \"http://localhost\"\n");

    ctx.cli()
        .args(["generate", "--details", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn preview_conflicts_with_copy() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--details", "x", "--prompt-preview", "--copy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
