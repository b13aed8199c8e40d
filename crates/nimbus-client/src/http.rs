//! HTTP client for the cloud provider API

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use nimbus_api::{
    Instance, InstanceSize, KubernetesCluster, KubernetesClusterConfig, Network,
    PaginatedResponse, Quota, Region, Volume,
};

use crate::error::{ClientError, Result};
use crate::traits::CloudApi;

/// Default public API endpoint
pub const DEFAULT_API_URL: &str = "https://api.civo.com";

/// HTTP client for communicating with the provider API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    api_key: String,
    region: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the API key is empty.
    ///
    /// # Example
    /// ```no_run
    /// use nimbus_client::HttpClient;
    ///
    /// let client = HttpClient::new("https://api.civo.com", "my-key")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(base_url: impl AsRef<str>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_client(base_url, api_key, Client::new())
    }

    /// Create a new HTTP client with custom `reqwest::Client`
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the API key is empty.
    pub fn with_client(
        base_url: impl AsRef<str>,
        api_key: impl Into<String>,
        client: Client,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ClientError::MissingApiKey);
        }
        Ok(Self {
            client,
            base_url,
            api_key,
            region: None,
        })
    }

    /// Scope every request to a region
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        let region = region.into();
        self.region = (!region.is_empty()).then_some(region);
        self
    }

    /// Region requests are scoped to, if any
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Build a full URL from a path and extra query pairs
    fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        if query.is_empty() && self.region.is_none() {
            return Ok(url);
        }

        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
            if let Some(region) = &self.region {
                pairs.append_pair("region", region);
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!(%method, %url, "api request");
        self.client.request(method, url).bearer_auth(&self.api_key)
    }

    /// Turn a non-success status into `ClientError::Api` and decode the body
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            tracing::debug!(status, %message, "api error");
            return Err(ClientError::Api { status, message });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Perform a GET request and deserialize the response
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.url(path, query)?;
        let response = self.request(Method::GET, url).send().await?;
        Self::decode(response).await
    }

    /// Perform a PUT request with JSON body
    async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: impl serde::Serialize,
    ) -> Result<T> {
        let url = self.url(path, &[])?;
        let response = self.request(Method::PUT, url).json(&body).send().await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl CloudApi for HttpClient {
    async fn list_instance_sizes(&self) -> Result<Vec<InstanceSize>> {
        self.get("/v2/sizes", &[]).await
    }

    async fn list_regions(&self) -> Result<Vec<Region>> {
        self.get("/v2/regions", &[]).await
    }

    async fn get_quota(&self) -> Result<Quota> {
        self.get("/v2/quota", &[]).await
    }

    async fn list_volumes(&self) -> Result<Vec<Volume>> {
        self.get("/v2/volumes", &[]).await
    }

    async fn list_dangling_volumes(&self) -> Result<Vec<Volume>> {
        self.get("/v2/volumes", &[("dangling", "true")]).await
    }

    async fn list_networks(&self) -> Result<Vec<Network>> {
        self.get("/v2/networks", &[]).await
    }

    async fn list_instances(&self) -> Result<Vec<Instance>> {
        let page: PaginatedResponse<Instance> = self.get("/v2/instances", &[]).await?;
        Ok(page.items)
    }

    async fn list_kubernetes_clusters(&self) -> Result<Vec<KubernetesCluster>> {
        let page: PaginatedResponse<KubernetesCluster> =
            self.get("/v2/kubernetes/clusters", &[]).await?;
        Ok(page.items)
    }

    async fn update_kubernetes_cluster(
        &self,
        id: &str,
        config: &KubernetesClusterConfig,
    ) -> Result<KubernetesCluster> {
        let mut config = config.clone();
        if config.region.is_none() {
            config.region.clone_from(&self.region);
        }
        tracing::info!(cluster = id, pools = config.pools.len(), "updating kubernetes cluster");
        self.put(&format!("/v2/kubernetes/clusters/{id}"), config)
            .await
    }
}
