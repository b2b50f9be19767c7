//! CLI smoke tests for the notes-cli binary against a mocked server.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use httpmock::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

struct Env {
    dir: TempDir,
    config: PathBuf,
}

impl Env {
    fn new(server: Option<&MockServer>) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let session = dir.path().join("session.json");
        let (api, summarizer) = match server {
            Some(s) => (s.base_url(), s.url("/summarize")),
            None => (
                "http://127.0.0.1:1".to_string(),
                "http://127.0.0.1:1/summarize".to_string(),
            ),
        };
        let config = dir.path().join("client.yaml");
        std::fs::write(
            &config,
            format!(
                "api_base_url: \"{api}\"\nsummarizer_url: \"{summarizer}\"\nsession_file: \"{}\"\ntimeout_sec: 5\n",
                session.to_string_lossy().replace('\\', "/")
            ),
        )
        .expect("Failed to write config");
        Self { dir, config }
    }

    fn session_file(&self) -> PathBuf {
        self.dir.path().join("session.json")
    }

    fn write_session(&self) {
        std::fs::write(
            self.session_file(),
            json!({"token": "tok", "user": user_json()}).to_string(),
        )
        .unwrap();
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_notes-cli"));
        cmd.arg("--config")
            .arg(&self.config)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute notes-cli")
    }
}

fn user_json() -> Value {
    json!({
        "id": 1, "name": "Ann", "email": "ann@example.com",
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-01T10:00:00Z"
    })
}

fn note_json(id: i32, title: &str, content: &str) -> Value {
    json!({
        "id": id, "user_id": 1, "title": title, "content": content,
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-01T10:00:00Z"
    })
}

fn stdout(o: &Output) -> String {
    String::from_utf8_lossy(&o.stdout).to_string()
}

fn stderr(o: &Output) -> String {
    String::from_utf8_lossy(&o.stderr).to_string()
}

#[test]
fn test_cli_help_lists_commands() {
    let output = Command::new(env!("CARGO_BIN_EXE_notes-cli"))
        .arg("--help")
        .output()
        .unwrap();
    assert!(output.status.success());
    let out = stdout(&output);
    for cmd in [
        "register", "login", "logout", "whoami", "list", "show", "create", "edit", "delete",
    ] {
        assert!(out.contains(cmd), "help should mention {cmd}: {out}");
    }
}

#[test]
fn test_commands_without_session_ask_to_login() {
    let env = Env::new(None);
    for args in [
        vec!["whoami"],
        vec!["list"],
        vec!["show", "1"],
        vec!["create", "--title", "T", "--content", "C"],
    ] {
        let output = env.run(&args);
        assert!(!output.status.success(), "{args:?}");
        assert!(
            stderr(&output).contains("Please login again"),
            "{args:?}: {}",
            stderr(&output)
        );
    }
}

#[test]
fn test_register_validates_locally() {
    let env = Env::new(None);
    let output = env.run(&["register", "--email", "ann@example"]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Name is required"), "{err}");
    assert!(err.contains("Please enter a valid email"), "{err}");
    assert!(err.contains("Password is required"), "{err}");
}

#[test]
fn test_login_then_search_list() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(200).json_body(json!({
            "message": "Login successful",
            "token": "tok",
            "user": user_json()
        }));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/notes")
            .header("authorization", "Bearer tok");
        then.status(200).json_body(json!({"notes": [
            note_json(2, "Team Meeting", "Agenda"),
            note_json(1, "Groceries", "Milk"),
        ]}));
    });

    let env = Env::new(Some(&server));
    let output = env.run(&["login", "--email", "ann@example.com", "--password", "secret123"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Welcome, Ann"));
    assert!(env.session_file().is_file());

    let output = env.run(&["list", "--search", "Meet"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Team Meeting"));
    assert!(!out.contains("Groceries"));
}

#[test]
fn test_logout_clears_session_even_when_server_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/logout");
        then.status(500);
    });

    let env = Env::new(Some(&server));
    env.write_session();

    let output = env.run(&["logout"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Logged out successfully"));
    assert!(!env.session_file().exists());
}

#[test]
fn test_delete_can_be_cancelled() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/notes");
        then.status(200)
            .json_body(json!({"notes": [note_json(3, "Keep me", "x")]}));
    });
    let env = Env::new(Some(&server));
    env.write_session();

    let mut child = env
        .command(&["delete", "3"])
        .stdin(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"n\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Delete note #3 \"Keep me\"?"), "{out}");
    assert!(out.contains("Cancelled"));
}

#[test]
fn test_forbidden_delete_is_one_line() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/notes");
        then.status(200).json_body(json!({"notes": []}));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/notes/8");
        then.status(403).json_body(json!({
            "type": "https://errors.notes.local/NOTES_FORBIDDEN",
            "title": "Forbidden",
            "status": 403,
            "detail": "Unauthorized access",
            "instance": "/notes/8",
            "code": "NOTES_FORBIDDEN"
        }));
    });
    let env = Env::new(Some(&server));
    env.write_session();

    let output = env.run(&["delete", "8", "--yes"]);
    assert!(!output.status.success());
    assert_eq!(
        stderr(&output).trim(),
        "Failed to delete note: Unauthorized access"
    );
}

#[test]
fn test_create_saves_original_content_when_summary_fails() {
    let content = "n".repeat(120);
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/summarize");
        then.status(500)
            .json_body(json!({"detail": "Error summarizing text: offline"}));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/notes")
            .json_body(json!({"title": "Long", "content": content.clone()}));
        then.status(201).json_body(json!({
            "message": "Note created successfully",
            "note": note_json(9, "Long", &content)
        }));
    });
    let env = Env::new(Some(&server));
    env.write_session();

    let output = env.run(&["create", "--title", "Long", "--content", &content, "--summarize"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Note created successfully (#9)"));
    assert!(stderr(&output).contains("Error summarizing text: offline"));
}

#[test]
fn test_edit_requires_a_change() {
    let env = Env::new(None);
    env.write_session();
    let output = env.run(&["edit", "1"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Nothing to update"));
}
