use crate::mock::MockServer;
use crate::*;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use vcloud::error::Result;

pub fn tests(server: &MockServer, tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        server,
        test_label_sends_only_label,
        test_label_requires_flag,
        test_label_requires_id
    ));
}

async fn test_label_sends_only_label(server: MockServer) -> Result<()> {
    let token = new_token();

    object_storage_cmd(&server, &token, &["label", "os-9", "--label", "x"])
        .assert()
        .success()
        .stdout(predicate::str::diff("object storage label has been set\n"));

    let requests = server.requests_for(&token);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/v2/object-storage/os-9");
    assert_eq!(requests[0].body, Some(json!({"label": "x"})));
    Ok(())
}

async fn test_label_requires_flag(server: MockServer) -> Result<()> {
    let token = new_token();

    object_storage_cmd(&server, &token, &["label", "os-9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--label"));

    assert!(server.requests_for(&token).is_empty());
    Ok(())
}

async fn test_label_requires_id(server: MockServer) -> Result<()> {
    let token = new_token();

    object_storage_cmd(&server, &token, &["label", "-l", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("please provide an object storage ID"));

    assert!(server.requests_for(&token).is_empty());
    Ok(())
}
