use std::env;
use std::fs;

use api_url::API_URL_ENV;
use assert_cmd::Command;

fn apiurl(api_url: Option<&str>) -> Command {
    let mut cmd = Command::cargo_bin("apiurl").unwrap();
    cmd.current_dir(env::temp_dir()).env_remove("RUST_LOG");
    match api_url {
        Some(value) => cmd.env(API_URL_ENV, value),
        None => cmd.env_remove(API_URL_ENV),
    };
    cmd
}

fn stdout(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn base_defaults_to_api() {
    assert_eq!(stdout(apiurl(None).arg("base")), "/api\n");
    assert_eq!(stdout(apiurl(Some("  ")).arg("base")), "/api\n");
}

#[test]
fn build_joins_each_endpoint() {
    let out = stdout(apiurl(Some("https://example.com/api/")).args(["build", "/users", "auth/login"]));
    assert_eq!(
        out,
        "https://example.com/api/users\nhttps://example.com/api/auth/login\n"
    );
}

#[test]
fn routes_as_json() {
    let out = stdout(apiurl(None).args(["routes", "--json"]));
    let entries: serde_json::Value = serde_json::from_str(&out).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 18);
    assert_eq!(entries[1]["name"], "auth-login");
    assert_eq!(entries[1]["method"], "POST");
    assert_eq!(entries[1]["area"], "auth");
    assert_eq!(entries[1]["url"], "/api/auth/login");
    assert_eq!(entries[1]["multipart"], false);
    assert_eq!(entries[5]["name"], "data-analyze-prices");
    assert_eq!(entries[5]["multipart"], true);
}

#[test]
fn routes_as_text_mark_multipart() {
    let out = stdout(apiurl(None).arg("routes"));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 18);
    assert_eq!(lines[1], "POST   /api/auth/login auth-login");
    assert_eq!(
        lines[5],
        "POST   /api/data/analyze-prices data-analyze-prices (multipart)"
    );
}

#[test]
fn named_route() {
    let out = stdout(apiurl(Some("https://example.com")).args(["route", "admin-subscriptions"]));
    assert_eq!(out, "https://example.com/admin/subscriptions\n");

    apiurl(None).args(["route", "nope"]).assert().failure();
}

#[test]
fn missing_env_file_fails() {
    apiurl(None)
        .args(["--env-file", "no/such/file.env", "base"])
        .assert()
        .failure();
}

#[test]
fn frontend_env_file_sets_the_base() {
    let dir = env::temp_dir().join(format!("apiurl_cli_env_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let file = dir.join(".env.production");
    fs::write(&file, "VITE_API_URL=https://prod.example/api\n").unwrap();

    let out = stdout(apiurl(None).arg("--env-file").arg(&file).arg("base"));
    assert_eq!(out, "https://prod.example/api\n");

    let out = stdout(apiurl(None).arg("--env-file").arg(&file).args(["build", "auth/login"]));
    assert_eq!(out, "https://prod.example/api/auth/login\n");

    fs::remove_dir_all(&dir).unwrap();
}
