use mockito::Matcher;
use predicates::prelude::*;
use serde_json::json;

use crate::common::TestEnv;

const GROUP_ID: &str = "f3db5c2b-068f-480d-985b-ec78b9fa0e76";

const GROUP_RESPONSE: &str = r#"{
  "id": "f3db5c2b-068f-480d-985b-ec78b9fa0e76",
  "description": "My awesome group",
  "displayName": "My Group",
  "groupTypes": ["Unified"],
  "mail": "my_group@contoso.onmicrosoft.com",
  "mailEnabled": true,
  "mailNickname": "my_group",
  "securityEnabled": false,
  "visibility": "Private"
}"#;

fn add_group_args() -> [&'static str; 9] {
  [
    "aad",
    "o365group",
    "add",
    "--display-name",
    "My Group",
    "--description",
    "My awesome group",
    "--mail-nickname",
    "my_group",
  ]
}

#[test]
fn o365group_add_creates_private_group() {
  let mut env = TestEnv::new();
  let mock = env
    .server
    .mock("POST", "/v1.0/groups")
    .match_body(Matcher::PartialJson(json!({
      "displayName": "My Group",
      "groupTypes": ["Unified"],
      "visibility": "Private"
    })))
    .with_status(201)
    .with_body(GROUP_RESPONSE)
    .create();

  env
    .m365_cmd()
    .args(add_group_args())
    .args(["--is-private", "true"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Created group My Group"))
    .stdout(predicate::str::contains(GROUP_ID));

  mock.assert();
}

#[test]
fn o365group_add_prints_json() {
  let mut env = TestEnv::new();
  env
    .server
    .mock("POST", "/v1.0/groups")
    .with_status(201)
    .with_body(GROUP_RESPONSE)
    .create();

  let output = env
    .m365_cmd()
    .args(add_group_args())
    .args(["--output", "json"])
    .output()
    .unwrap();

  assert!(output.status.success());
  let group: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(group["id"], GROUP_ID);
  assert_eq!(group["mailNickname"], "my_group");
}

#[test]
fn o365group_add_sets_owners() {
  let mut env = TestEnv::new();
  env
    .server
    .mock("POST", "/v1.0/groups")
    .with_status(201)
    .with_body(GROUP_RESPONSE)
    .create();
  env
    .server
    .mock("GET", "/v1.0/users")
    .match_query(Matcher::UrlEncoded(
      "$filter".into(),
      "userPrincipalName eq 'anne@contoso.onmicrosoft.com'".into(),
    ))
    .with_status(200)
    .with_body(r#"{"value":[{"id":"949b16c1-a032-453e-a8ae-89a52bfc1d8a"}]}"#)
    .create();
  let owner = env
    .server
    .mock("POST", format!("/v1.0/groups/{}/owners/$ref", GROUP_ID).as_str())
    .match_body(Matcher::Json(json!({
      "@odata.id": "https://graph.microsoft.com/v1.0/users/949b16c1-a032-453e-a8ae-89a52bfc1d8a"
    })))
    .with_status(204)
    .create();

  env
    .m365_cmd()
    .args(add_group_args())
    .args(["--owners", "anne@contoso.onmicrosoft.com"])
    .assert()
    .success();

  owner.assert();
}

#[test]
fn o365group_add_rejects_invalid_member_before_calling_graph() {
  let mut env = TestEnv::new();
  let mock = env.server.mock("POST", Matcher::Any).expect(0).create();

  env
    .m365_cmd()
    .args(add_group_args())
    .args(["--members", "anne"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("anne is not a valid userPrincipalName"));

  mock.assert();
}

#[test]
fn o365group_add_rejects_missing_logo() {
  let env = TestEnv::new();
  let logo = env.temp.path().join("missing.png");

  env
    .m365_cmd()
    .args(add_group_args())
    .arg("--logo-path")
    .arg(&logo)
    .assert()
    .failure()
    .stderr(predicate::str::contains(format!("File '{}' not found", logo.display())));
}
