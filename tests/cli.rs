use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const REST_SERVER: &str = "/webservice/rest/server.php";

fn write_config(dir: &Path, site: &str, extra: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    let contents =
        format!("site: {site}\ntoken: test-token\npreferences:\n  keyword: moodle\n{extra}");
    fs::write(&path, contents).expect("failed to write config");
    path
}

fn title(item: &Value) -> &str {
    item["title"].as_str().unwrap_or_default()
}

fn json_output(assert: &assert_cmd::assert::Assert) -> Value {
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    serde_json::from_str(&stdout).expect("stdout is not JSON")
}

fn bin() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("moodle-launcher"));
    for var in [
        "MOODLE_CONFIG",
        "MOODLE_SITE",
        "MOODLE_TOKEN",
        "MOODLE_FORMAT",
        "MOODLE_NO_CACHE",
        "MOODLE_DEBUG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn version_prints_package_version() {
    bin()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn status_uses_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "https://moodle.test", "  kw_events: ev\n");

    let assert = bin()
        .arg("--config")
        .arg(&config_path)
        .arg("status")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("Site: https://moodle.test"));
    assert!(stdout.contains("Events shortcut: ev"));
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));

    Ok(())
}

#[test]
fn missing_config_shows_helpful_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let nonexistent_config = temp.path().join("does-not-exist.yaml");

    bin()
        .arg("--config")
        .arg(&nonexistent_config)
        .arg("query")
        .arg("moodle")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("moodle-launcher init"));

    Ok(())
}

#[test]
fn empty_query_shows_menu_without_network() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    // Nothing listens here; the menu must not need the site
    let config_path = write_config(temp.path(), "http://127.0.0.1:9", "");

    let assert = bin()
        .arg("--config")
        .arg(&config_path)
        .arg("--format")
        .arg("json")
        .arg("query")
        .assert()
        .success();

    let value = json_output(&assert);
    assert_eq!(value["data"][0]["title"], "Upcoming events");
    assert_eq!(value["data"][0]["action"]["value"], "moodle events ");
    assert_eq!(value["data"][1]["action"]["value"], "moodle courses ");

    Ok(())
}

#[test]
fn events_are_sorted_and_filtered() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("POST", REST_SERVER)
        .match_body(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("wstoken".into(), "test-token".into()),
            mockito::Matcher::UrlEncoded(
                "wsfunction".into(),
                "core_calendar_get_calendar_upcoming_view".into(),
            ),
            mockito::Matcher::UrlEncoded("moodlewsrestformat".into(), "json".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"events": [
                {"name": "Quiz three", "timestart": 300, "course": {"id": 5}},
                {"name": "Essay", "timestart": 50},
                {"name": "Quiz one.", "timestart": 100, "action": {"name": "Attempt"}},
                {"name": "Quiz two", "timestart": 200}
            ]}"#,
        )
        .expect(1)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url(), "");

    let assert = bin()
        .arg("--config")
        .arg(&config_path)
        .arg("--format")
        .arg("json")
        .arg("query")
        .arg("moodle")
        .arg("events")
        .arg("quiz")
        .assert()
        .success();

    mock.assert();
    let value = json_output(&assert);
    let data = value["data"].as_array().expect("data array");

    assert_eq!(data.len(), 3);
    assert!(title(&data[0]).starts_with(" - Quiz one:"));
    assert_eq!(data[0]["description"], "Not done | Full Name: Quiz one");
    assert!(title(&data[1]).contains("Quiz two"));
    assert!(title(&data[2]).starts_with("5 - Quiz three:"));
    assert_eq!(data[2]["icon"], "images/tick.png");

    Ok(())
}

#[test]
fn courses_shortcut_honours_starred_mode() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _courses = server
        .mock("POST", REST_SERVER)
        .match_body(mockito::Matcher::UrlEncoded(
            "classification".into(),
            "future".into(),
        ))
        .with_status(200)
        .with_body(
            r#"{"courses": [
                {
                    "fullname": "A",
                    "coursecategory": "One",
                    "isfavourite": true,
                    "viewurl": "https://moodle.test/a"
                },
                {
                    "fullname": "B",
                    "coursecategory": "Two",
                    "isfavourite": false,
                    "viewurl": "https://moodle.test/b"
                }
            ], "nextoffset": 2}"#,
        )
        .create();

    let temp = tempdir()?;
    let config_path = write_config(
        temp.path(),
        &server.url(),
        "  course_status: future\n  courses_type: Starred\n",
    );

    let assert = bin()
        .arg("--config")
        .arg(&config_path)
        .arg("--format")
        .arg("json")
        .arg("query")
        .arg("mc")
        .assert()
        .success();

    let value = json_output(&assert);

    assert_eq!(value["meta"]["count"], 1);
    assert_eq!(value["data"][0]["title"], "A");
    assert_eq!(value["data"][0]["description"], "Category: One");
    assert_eq!(value["data"][0]["action"]["value"], "https://moodle.test/a");

    Ok(())
}

#[test]
fn server_exception_is_shown_as_message() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _error = server
        .mock("POST", REST_SERVER)
        .with_status(200)
        .with_body(
            r#"{
                "exception": "moodle_exception",
                "errorcode": "invalidtoken",
                "message": "Invalid token - token not found"
            }"#,
        )
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url(), "");

    bin()
        .arg("--config")
        .arg(&config_path)
        .arg("--format")
        .arg("table")
        .arg("events")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid token - token not found"));

    Ok(())
}

#[test]
fn exception_with_error_status_is_shown_as_message() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _denied = server
        .mock("POST", REST_SERVER)
        .with_status(403)
        .with_body(
            r#"{
                "exception": "webservice_access_exception",
                "errorcode": "accessexception",
                "message": "Access control exception"
            }"#,
        )
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url(), "");

    let assert = bin()
        .arg("--config")
        .arg(&config_path)
        .arg("--format")
        .arg("json")
        .arg("query")
        .arg("me")
        .assert()
        .success();

    let value = json_output(&assert);
    let data = value["data"].as_array().expect("data array");

    assert_eq!(data.len(), 1);
    assert_eq!(title(&data[0]), "Access control exception");
    assert_eq!(data[0]["action"]["type"], "do_nothing");

    Ok(())
}

#[test]
fn malformed_response_falls_back_to_menu() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _broken = server
        .mock("POST", REST_SERVER)
        .with_status(200)
        .with_body("<html>Site maintenance</html>")
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url(), "");

    let assert = bin()
        .arg("--config")
        .arg(&config_path)
        .arg("--format")
        .arg("json")
        .arg("query")
        .arg("moodle")
        .arg("courses")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("Upcoming events"));

    Ok(())
}

#[test]
fn site_and_token_flags_work_without_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _events = server
        .mock("POST", REST_SERVER)
        .match_body(mockito::Matcher::UrlEncoded(
            "wstoken".into(),
            "flag-token".into(),
        ))
        .with_status(200)
        .with_body(r#"{"events": []}"#)
        .create();

    let temp = tempdir()?;

    bin()
        .arg("--config")
        .arg(temp.path().join("absent.yaml"))
        .arg("--site")
        .arg(server.url())
        .arg("--token")
        .arg("flag-token")
        .arg("--format")
        .arg("table")
        .arg("events")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to Show"));

    Ok(())
}
