use crate::mock::MockServer;
use crate::*;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use vcloud::error::Result;

pub fn tests(server: &MockServer, tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        server,
        test_create_uses_default_tier,
        test_create_with_tier,
        test_create_without_label,
        test_create_requires_cluster_id
    ));
}

async fn test_create_uses_default_tier(server: MockServer) -> Result<()> {
    let token = new_token();

    object_storage_cmd(&server, &token, &["create", "--cluster-id", "5", "--label", "mybucket"])
        .assert()
        .success()
        .stdout(predicate::str::contains("os-created"))
        .stdout(predicate::str::contains("mybucket"));

    let requests = server.requests_for(&token);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(
        requests[0].body,
        Some(json!({"cluster_id": 5, "tier_id": 1, "label": "mybucket"}))
    );
    Ok(())
}

async fn test_create_with_tier(server: MockServer) -> Result<()> {
    let token = new_token();

    object_storage_cmd(&server, &token, &["create", "-i", "2", "-l", "media", "-t", "4"])
        .assert()
        .success();

    let requests = server.requests_for(&token);
    assert_eq!(
        requests[0].body,
        Some(json!({"cluster_id": 2, "tier_id": 4, "label": "media"}))
    );
    Ok(())
}

async fn test_create_without_label(server: MockServer) -> Result<()> {
    let token = new_token();

    object_storage_cmd(&server, &token, &["create", "-i", "2"])
        .assert()
        .success();

    let requests = server.requests_for(&token);
    assert_eq!(requests[0].body, Some(json!({"cluster_id": 2, "tier_id": 1})));
    Ok(())
}

async fn test_create_requires_cluster_id(server: MockServer) -> Result<()> {
    let token = new_token();

    object_storage_cmd(&server, &token, &["create", "--label", "mybucket"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--cluster-id"));

    assert!(server.requests_for(&token).is_empty());
    Ok(())
}
