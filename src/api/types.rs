// Wire types for the object storage endpoints
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A provisioned object storage subscription.
///
/// Fields the tool does not know about are kept in `extra`, and fields the
/// server leaves out stay out, so JSON output reproduces the server response
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectStorage {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_secret_key: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A regional grouping in which object storage can be deployed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectStorageCluster {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deploy: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A service and pricing class.
///
/// Prices keep the server's number representation (`18` stays `18`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectStorageTier {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_bandwidth_gb: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_disk_gb: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratelimit_ops_secs: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratelimit_ops_bytes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<ObjectStorageCluster>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Credentials issued by the regenerate-keys endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Keys {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_hostname: Option<String>,
    pub s3_access_key: String,
    pub s3_secret_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Paging parameters forwarded to list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub per_page: Option<u32>,
    pub cursor: Option<String>,
}

impl ListOptions {
    /// Query parameters for the request; an empty cursor is not sent.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.to_string()));
        }
        if let Some(cursor) = self.cursor.as_deref().filter(|c| !c.is_empty()) {
            query.push(("cursor", cursor.to_string()));
        }
        query
    }
}

/// Body for the create and update calls. Unset fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ObjectStorageReq {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ObjectStoragesBase {
    pub object_storages: Vec<ObjectStorage>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ObjectStorageBase {
    pub object_storage: ObjectStorage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct S3KeysBase {
    pub s3_credentials: S3Keys,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClustersBase {
    pub clusters: Vec<ObjectStorageCluster>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TiersBase {
    pub tiers: Vec<ObjectStorageTier>,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
