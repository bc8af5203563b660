use std::fs;

use github_v3::{package::gists::GistFile, Error, Options};
use httptest::{all_of, matchers::*, responders::*, Expectation, Server};
use serde_json::json;

mod utils;

use utils::*;

#[tokio::test]
async fn creates_gist_from_files() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("hello.rs");
	fs::write(&path, "fn main() {}\n").unwrap();

	let server = Server::run();
	server.expect(
		Expectation::matching(all_of![
			request::method_path("POST", "/gists"),
			request::body(json_decoded(eq(json!({
				"files": {
					"hello.rs": { "content": "fn main() {}\n" },
					"notes.txt": { "content": "inline" },
				},
				"public": true,
				"description": "Example",
			})))),
		])
		.respond_with(
			status_code(201).body(r#"{"id":"aa5a315d61ae9438b18d"}"#),
		),
	);

	let github = setup_github(&server, Options::new());

	let gist = github
		.gists()
		.create(
			&[GistFile::path(&path), GistFile::content("notes.txt", "inline")],
			true,
			Some("Example"),
		)
		.await
		.unwrap();

	assert_eq!(gist["id"], "aa5a315d61ae9438b18d");
}

#[tokio::test]
async fn missing_file_sends_nothing() {
	let dir = tempfile::tempdir().unwrap();
	let server = Server::run();

	let github = setup_github(&server, Options::new());

	let result = github
		.gists()
		.create(&[GistFile::path(dir.path().join("missing.rs"))], false, None)
		.await;

	assert!(matches!(result, Err(Error::Io { .. })));
}
