use mockito::Matcher;
use predicates::prelude::*;

use crate::common::{TestEnv, bearer};

const EXTENSION_PATH: &str = "/v1.0/schemaExtensions/exttyg4fc4m_MySchemaExtension";

#[test]
fn schemaextension_remove_with_confirm_deletes_extension() {
  let mut env = TestEnv::new();
  let mock = env
    .server
    .mock("DELETE", EXTENSION_PATH)
    .match_header("authorization", bearer().as_str())
    .match_header("accept", "application/json;odata.metadata=none")
    .with_status(204)
    .create();

  env
    .m365_cmd()
    .args(["graph", "schemaextension", "remove"])
    .args(["--id", "exttyg4fc4m_MySchemaExtension", "--confirm"])
    .assert()
    .success();

  mock.assert();
}

#[test]
fn schemaextension_remove_prints_done_in_verbose_mode() {
  let mut env = TestEnv::new();
  env.server.mock("DELETE", EXTENSION_PATH).with_status(204).create();

  env
    .m365_cmd()
    .args(["graph", "schemaextension", "remove"])
    .args(["-i", "exttyg4fc4m_MySchemaExtension", "--confirm", "--verbose"])
    .assert()
    .success()
    .stdout(predicate::str::contains("DONE"));
}

#[test]
fn schemaextension_remove_without_confirm_refuses_to_prompt() {
  let mut env = TestEnv::new();
  let mock = env.server.mock("DELETE", Matcher::Any).expect(0).create();

  env
    .m365_cmd()
    .args(["graph", "schemaextension", "remove", "--id", "exttyg4fc4m_MySchemaExtension"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Use --confirm to proceed"));

  mock.assert();
}

#[test]
fn schemaextension_remove_surfaces_graph_error() {
  let mut env = TestEnv::new();
  env
    .server
    .mock("DELETE", EXTENSION_PATH)
    .with_status(404)
    .with_body(r#"{"error":{"code":"Request_ResourceNotFound","message":"Resource 'exttyg4fc4m_MySchemaExtension' does not exist."}}"#)
    .create();

  env
    .m365_cmd()
    .args(["graph", "schemaextension", "remove"])
    .args(["--id", "exttyg4fc4m_MySchemaExtension", "--confirm"])
    .assert()
    .code(1)
    .stderr(predicate::str::contains(
      "Resource 'exttyg4fc4m_MySchemaExtension' does not exist.",
    ));
}

#[test]
fn refused_connection_is_reported_once() {
  let env = TestEnv::new();

  let output = env
    .m365_cmd()
    .env("M365_GRAPH_URL", "http://127.0.0.1:1")
    .args(["graph", "schemaextension", "remove", "--id", "x", "--confirm"])
    .output()
    .unwrap();

  assert_eq!(output.status.code(), Some(1));
  let stderr = String::from_utf8(output.stderr).unwrap();
  let lines: Vec<&str> = stderr.lines().collect();
  assert_eq!(lines.len(), 1, "unexpected stderr: {}", stderr);
  assert!(lines[0].starts_with("✗ error sending request for url (http://127.0.0.1:1/v1.0/schemaExtensions/x): "));
  assert_eq!(
    stderr
      .matches("error sending request for url (http://127.0.0.1:1/v1.0/schemaExtensions/x)")
      .count(),
    1
  );
}
