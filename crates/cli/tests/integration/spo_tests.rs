use mockito::Matcher;
use predicates::prelude::*;
use serde_json::json;

use crate::common::TestEnv;

const SCRIPT_ID: &str = "449c0c6d-5380-4df2-b84b-622e0ac8ec24";
const UPDATE_PATH: &str = "/_api/Microsoft.Sharepoint.Utilities.WebTemplateExtensions.SiteScriptUtility.UpdateSiteScript";

fn mock_digest(env: &mut TestEnv) -> mockito::Mock {
  env
    .server
    .mock("POST", "/_api/contextinfo")
    .with_status(200)
    .with_body(r#"{"FormDigestValue":"ABC","FormDigestTimeoutSeconds":1800}"#)
    .create()
}

#[test]
fn sitescript_set_updates_script() {
  let mut env = TestEnv::new();
  mock_digest(&mut env);
  let update = env
    .server
    .mock("POST", UPDATE_PATH)
    .match_header("x-requestdigest", "ABC")
    .match_body(Matcher::Json(json!({
      "updateInfo": { "Id": SCRIPT_ID, "Title": "Contoso", "Version": 2 }
    })))
    .with_status(200)
    .with_body(format!(
      r#"{{"Id":"{}","Title":"Contoso","Description":"","Content":"{{}}","Version":2}}"#,
      SCRIPT_ID
    ))
    .create();

  env
    .m365_spo_cmd()
    .args(["spo", "sitescript", "set", "--id", SCRIPT_ID, "--title", "Contoso", "-v", "2"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Updated site script"))
    .stdout(predicate::str::contains("Contoso"));

  update.assert();
}

#[test]
fn sitescript_set_discovers_and_stores_sharepoint_url() {
  let mut env = TestEnv::new();
  let spo_url = env.server.url();
  let root = env
    .server
    .mock("GET", "/v1.0/sites/root")
    .match_query(Matcher::UrlEncoded("$select".into(), "webUrl".into()))
    .with_status(200)
    .with_body(json!({ "webUrl": spo_url }).to_string())
    .create();
  mock_digest(&mut env);
  env
    .server
    .mock("POST", UPDATE_PATH)
    .with_status(200)
    .with_body(format!(r#"{{"Id":"{}"}}"#, SCRIPT_ID))
    .create();

  env
    .m365_cmd()
    .args(["spo", "sitescript", "set", "--id", SCRIPT_ID, "--output", "json"])
    .assert()
    .success()
    .stdout(predicate::str::contains(SCRIPT_ID));

  root.assert();
  let stored = std::fs::read_to_string(env.connection_file()).unwrap();
  assert!(stored.contains(&spo_url));
  assert!(!stored.contains(crate::common::TOKEN));
}

#[test]
fn sitescript_set_rejects_invalid_content() {
  let env = TestEnv::new();

  env
    .m365_spo_cmd()
    .args(["spo", "sitescript", "set", "--id", SCRIPT_ID, "--content", "{invalid"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Specified content value is not a valid JSON string."));
}

#[test]
fn sitescript_set_surfaces_odata_error() {
  let mut env = TestEnv::new();
  mock_digest(&mut env);
  env
    .server
    .mock("POST", UPDATE_PATH)
    .with_status(500)
    .with_body(r#"{"odata.error":{"code":"-1, Microsoft.SharePoint.Client.InvalidClientQueryException","message":{"lang":"en-US","value":"An error has occurred"}}}"#)
    .create();

  env
    .m365_spo_cmd()
    .args(["spo", "sitescript", "set", "--id", SCRIPT_ID, "--title", "Contoso"])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("An error has occurred"));
}

#[test]
fn hubsite_disconnect_rejects_non_sharepoint_url() {
  let env = TestEnv::new();

  env
    .m365_cmd()
    .args(["spo", "hubsite", "disconnect", "--url", "https://contoso.com/sites/sales"])
    .assert()
    .failure()
    .stderr(predicate::str::contains(
      "https://contoso.com/sites/sales is not a valid SharePoint Online site URL",
    ));
}

#[test]
fn hubsite_disconnect_without_confirm_refuses_to_prompt() {
  let env = TestEnv::new();

  env
    .m365_cmd()
    .args(["spo", "hubsite", "disconnect", "-u", "https://contoso.sharepoint.com/sites/sales"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Use --confirm to proceed"));
}

#[test]
fn app_uninstall_rejects_invalid_id() {
  let env = TestEnv::new();

  env
    .m365_cmd()
    .args(["spo", "app", "uninstall", "--id", "not-a-guid"])
    .args(["--site-url", "https://contoso.sharepoint.com"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("not-a-guid is not a valid GUID"));
}

#[test]
fn app_uninstall_rejects_unknown_scope() {
  let env = TestEnv::new();

  env
    .m365_cmd()
    .args(["spo", "app", "uninstall", "--id", "b2307a39-e878-458b-bc90-03bc578531d6"])
    .args(["--site-url", "https://contoso.sharepoint.com", "--scope", "web", "--confirm"])
    .assert()
    .failure()
    .stderr(predicate::str::contains(
      "Scope must be either 'tenant' or 'sitecollection' if specified",
    ));
}

#[test]
fn spo_set_stores_url() {
  let env = TestEnv::new();

  env
    .m365_cmd()
    .args(["spo", "set", "--url", "https://contoso.sharepoint.com"])
    .assert()
    .success();

  let stored = std::fs::read_to_string(env.connection_file()).unwrap();
  assert!(stored.contains("https://contoso.sharepoint.com"));
}
