use snafu::ResultExt;

use crate::api::ObjectStorageApi;
use crate::api::types::{
    ListOptions, Meta, ObjectStorage, ObjectStorageCluster, ObjectStorageReq, ObjectStorageTier,
    S3Keys,
};
use crate::error::{Error, InvalidClusterIdSnafu, Result};
use crate::wrap_err;

pub mod constants;
pub(crate) mod utils;

/// Object storage command group.
///
/// Every operation validates its inputs locally first and only then performs
/// a single call against the API. Remote failures are wrapped with an
/// operation-specific message.
#[derive(Clone, Debug)]
pub struct ObjectStorageClient<A> {
    api: A,
}

/// Require a non-blank object storage ID.
pub fn require_id(id: Option<&str>) -> Result<&str> {
    match id.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(Error::MissingObjectStorageId),
    }
}

/// Parse a positional cluster ID.
pub fn parse_cluster_id(raw: Option<&str>) -> Result<i64> {
    let raw = raw.ok_or(Error::MissingClusterId)?;
    raw.trim().parse::<i64>().context(InvalidClusterIdSnafu)
}

impl<A: ObjectStorageApi> ObjectStorageClient<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn list(
        &self,
        options: &ListOptions,
    ) -> Result<(Vec<ObjectStorage>, Option<Meta>)> {
        log::debug!(
            "list per_page={:?} cursor={:?}",
            options.per_page,
            options.cursor
        );
        wrap_err!(self.api.list(options).await, ListObjectStoragesFailed {})
    }

    pub async fn get(&self, id: Option<&str>) -> Result<ObjectStorage> {
        let id = require_id(id)?;
        log::debug!("get id={id}");
        wrap_err!(self.api.get(id).await, GetObjectStorageFailed {})
    }

    pub async fn create(
        &self,
        cluster_id: i64,
        tier_id: i64,
        label: Option<&str>,
    ) -> Result<ObjectStorage> {
        log::debug!("create cluster_id={cluster_id} tier_id={tier_id} label={label:?}");
        let req = ObjectStorageReq {
            cluster_id: Some(cluster_id),
            tier_id: Some(tier_id),
            label: label.filter(|l| !l.is_empty()).map(str::to_string),
        };
        wrap_err!(self.api.create(&req).await, CreateObjectStorageFailed {})
    }

    pub async fn update_label(&self, id: Option<&str>, label: &str) -> Result<()> {
        let id = require_id(id)?;
        log::debug!("update_label id={id} label={label}");
        let req = ObjectStorageReq {
            label: Some(label.to_string()),
            ..Default::default()
        };
        wrap_err!(self.api.update(id, &req).await, UpdateLabelFailed {})
    }

    pub async fn delete(&self, id: Option<&str>) -> Result<()> {
        let id = require_id(id)?;
        log::debug!("delete id={id}");
        wrap_err!(self.api.delete(id).await, DeleteObjectStorageFailed {})
    }

    pub async fn regenerate_keys(&self, id: Option<&str>) -> Result<S3Keys> {
        let id = require_id(id)?;
        log::debug!("regenerate_keys id={id}");
        wrap_err!(self.api.regenerate_keys(id).await, RegenerateKeysFailed {})
    }

    pub async fn list_clusters(
        &self,
        options: &ListOptions,
    ) -> Result<(Vec<ObjectStorageCluster>, Option<Meta>)> {
        log::debug!(
            "list_clusters per_page={:?} cursor={:?}",
            options.per_page,
            options.cursor
        );
        wrap_err!(self.api.list_clusters(options).await, ListClustersFailed {})
    }

    pub async fn list_cluster_tiers(
        &self,
        cluster_id: Option<&str>,
    ) -> Result<Vec<ObjectStorageTier>> {
        let cluster_id = parse_cluster_id(cluster_id)?;
        log::debug!("list_cluster_tiers cluster_id={cluster_id}");
        wrap_err!(
            self.api.list_cluster_tiers(cluster_id).await,
            ListClusterTiersFailed {}
        )
    }

    pub async fn list_tiers(&self, options: &ListOptions) -> Result<Vec<ObjectStorageTier>> {
        log::debug!(
            "list_tiers per_page={:?} cursor={:?}",
            options.per_page,
            options.cursor
        );
        wrap_err!(self.api.list_tiers(options).await, ListTiersFailed {})
    }
}
