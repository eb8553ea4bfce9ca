use crate::mock::MockServer;
use crate::*;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use vcloud::error::Result;

pub fn tests(server: &MockServer, tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        server,
        test_regenerate_keys_returns_new_pair,
        test_regenerate_keys_without_id
    ));
}

fn regenerate(server: &MockServer, token: &str) -> Result<serde_json::Value> {
    let output = object_storage_cmd(server, token, &["regenerate-keys", "os-5", "-o", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    Ok(serde_json::from_slice(&output)?)
}

async fn test_regenerate_keys_returns_new_pair(server: MockServer) -> Result<()> {
    let token = new_token();

    let first = regenerate(&server, &token)?;
    let second = regenerate(&server, &token)?;

    let first_key = &first["s3_credentials"]["s3_access_key"];
    assert!(first_key.as_str().is_some_and(|k| k.starts_with("AK-")));
    assert_ne!(first_key, "AK-INITIAL");
    assert_ne!(first_key, &second["s3_credentials"]["s3_access_key"]);

    let requests = server.requests_for(&token);
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/v2/object-storage/os-5/regenerate-keys");
    Ok(())
}

async fn test_regenerate_keys_without_id(server: MockServer) -> Result<()> {
    let token = new_token();

    object_storage_cmd(&server, &token, &["regenerate-keys"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("please provide an object storage ID"));

    assert!(server.requests_for(&token).is_empty());
    Ok(())
}
