//! Minimal client for the provider's object storage REST endpoints.

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use snafu::ResultExt;

use crate::config::ApiConfig;
use crate::error::{ApiSnafu, Error, InvalidApiKeySnafu, Result};

pub mod types;

use self::types::{
    ClustersBase, ErrorBody, ListOptions, Meta, ObjectStorage, ObjectStorageBase,
    ObjectStorageCluster, ObjectStorageReq, ObjectStorageTier, ObjectStoragesBase, S3Keys,
    S3KeysBase, TiersBase,
};

/// Remote operations available for object storage.
///
/// Each method performs exactly one request. Implementations must not retry.
pub trait ObjectStorageApi {
    async fn list(&self, options: &ListOptions) -> Result<(Vec<ObjectStorage>, Option<Meta>)>;

    async fn get(&self, id: &str) -> Result<ObjectStorage>;

    async fn create(&self, req: &ObjectStorageReq) -> Result<ObjectStorage>;

    async fn update(&self, id: &str, req: &ObjectStorageReq) -> Result<()>;

    async fn delete(&self, id: &str) -> Result<()>;

    async fn regenerate_keys(&self, id: &str) -> Result<S3Keys>;

    async fn list_clusters(
        &self,
        options: &ListOptions,
    ) -> Result<(Vec<ObjectStorageCluster>, Option<Meta>)>;

    async fn list_cluster_tiers(&self, cluster_id: i64) -> Result<Vec<ObjectStorageTier>>;

    async fn list_tiers(&self, options: &ListOptions) -> Result<Vec<ObjectStorageTier>>;
}

/// `reqwest` implementation of [`ObjectStorageApi`].
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.endpoint)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| Error::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
            })?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .context(InvalidApiKeySnafu)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()?;

        log::debug!(
            "api client created endpoint={} timeout={:?}",
            config.endpoint,
            config.timeout
        );

        Ok(Self { http, base_url })
    }

    /// `{endpoint}/v2/{segments...}`, each segment percent-encoded.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(Error::InvalidPathSegment {
                segment: segment.to_string(),
            });
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidEndpoint {
                endpoint: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .push("v2")
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.url(segments)?;
        log::debug!("request method={method} url={url}");
        Ok(self.http.request(method, url))
    }

    /// Send a request and turn non-2xx responses into `Error::Api`.
    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        log::warn!("api request failed status={} message={}", status.as_u16(), message);
        ApiSnafu {
            status: status.as_u16(),
            message,
        }
        .fail()
    }

    async fn json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.send(builder).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if !parsed.error.is_empty() {
            return parsed.error;
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("unexpected response")
        .to_string()
}

impl ObjectStorageApi for ApiClient {
    async fn list(
        &self,
        options: &ListOptions,
    ) -> Result<(Vec<ObjectStorage>, Option<Meta>)> {
        let builder = self
            .request(Method::GET, &["object-storage"])?
            .query(&options.query());
        let base: ObjectStoragesBase = self.json(builder).await?;
        Ok((base.object_storages, base.meta))
    }

    async fn get(&self, id: &str) -> Result<ObjectStorage> {
        let builder = self.request(Method::GET, &["object-storage", id])?;
        let base: ObjectStorageBase = self.json(builder).await?;
        Ok(base.object_storage)
    }

    async fn create(&self, req: &ObjectStorageReq) -> Result<ObjectStorage> {
        let builder = self.request(Method::POST, &["object-storage"])?.json(req);
        let base: ObjectStorageBase = self.json(builder).await?;
        Ok(base.object_storage)
    }

    async fn update(&self, id: &str, req: &ObjectStorageReq) -> Result<()> {
        let builder = self
            .request(Method::PUT, &["object-storage", id])?
            .json(req);
        self.send(builder).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let builder = self.request(Method::DELETE, &["object-storage", id])?;
        self.send(builder).await?;
        Ok(())
    }

    async fn regenerate_keys(&self, id: &str) -> Result<S3Keys> {
        let builder = self.request(Method::POST, &["object-storage", id, "regenerate-keys"])?;
        let base: S3KeysBase = self.json(builder).await?;
        Ok(base.s3_credentials)
    }

    async fn list_clusters(
        &self,
        options: &ListOptions,
    ) -> Result<(Vec<ObjectStorageCluster>, Option<Meta>)> {
        let builder = self
            .request(Method::GET, &["object-storage", "clusters"])?
            .query(&options.query());
        let base: ClustersBase = self.json(builder).await?;
        Ok((base.clusters, base.meta))
    }

    async fn list_cluster_tiers(&self, cluster_id: i64) -> Result<Vec<ObjectStorageTier>> {
        let cluster_id = cluster_id.to_string();
        let builder = self.request(
            Method::GET,
            &["object-storage", "clusters", &cluster_id, "tiers"],
        )?;
        let base: TiersBase = self.json(builder).await?;
        Ok(base.tiers)
    }

    async fn list_tiers(&self, options: &ListOptions) -> Result<Vec<ObjectStorageTier>> {
        let builder = self
            .request(Method::GET, &["object-storage", "tiers"])?
            .query(&options.query());
        let base: TiersBase = self.json(builder).await?;
        Ok(base.tiers)
    }
}
