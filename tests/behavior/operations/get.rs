use crate::mock::{MISSING_ID, MockServer, object_storage};
use crate::*;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use vcloud::error::Result;

pub fn tests(server: &MockServer, tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        server,
        test_get_json_is_unmodified,
        test_get_text,
        test_get_without_id,
        test_get_encodes_id,
        test_get_not_found
    ));
}

async fn test_get_json_is_unmodified(server: MockServer) -> Result<()> {
    let token = new_token();

    let output = object_storage_cmd(&server, &token, &["get", "os-42", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(value["object_storage"], object_storage("os-42", 2, "logs"));

    let requests = server.requests_for(&token);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/v2/object-storage/os-42");
    Ok(())
}

async fn test_get_text(server: MockServer) -> Result<()> {
    let token = new_token();

    object_storage_cmd(&server, &token, &["get", "os-42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S3 SECRET KEY"))
        .stdout(predicate::str::contains("os-42"))
        .stdout(predicate::str::contains("ewr1.vultrobjects.com"));
    Ok(())
}

async fn test_get_without_id(server: MockServer) -> Result<()> {
    let token = new_token();

    object_storage_cmd(&server, &token, &["get"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("please provide an object storage ID"));

    assert!(server.requests_for(&token).is_empty());
    Ok(())
}

async fn test_get_encodes_id(server: MockServer) -> Result<()> {
    let token = new_token();

    object_storage_cmd(&server, &token, &["get", "../clusters"])
        .assert()
        .success();

    let requests = server.requests_for(&token);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/v2/object-storage/..%2Fclusters");
    Ok(())
}

async fn test_get_not_found(server: MockServer) -> Result<()> {
    let token = new_token();

    object_storage_cmd(&server, &token, &["get", MISSING_ID])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "error getting object storage info : Object storage not found. (HTTP 404)",
        ));
    Ok(())
}
