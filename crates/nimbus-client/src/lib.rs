//! nimbus-client: HTTP client library for the cloud provider API
//!
//! Exposes the [`CloudApi`] trait the CLI commands fetch through, and
//! [`HttpClient`], its reqwest-backed implementation.
//!
//! # Example
//!
//! ```no_run
//! use nimbus_client::{CloudApi, HttpClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new("https://api.civo.com", "my-api-key")?.with_region("LON1");
//!
//! let volumes = client.list_volumes().await?;
//! let networks = client.list_networks().await?;
//! println!("{} volumes across {} networks", volumes.len(), networks.len());
//!
//! let cluster = client.find_kubernetes_cluster("production").await?;
//! println!("cluster {} has {} pools", cluster.name, cluster.pools.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod traits;

pub use error::{ClientError, Result};
pub use http::{DEFAULT_API_URL, HttpClient};
pub use traits::{CloudApi, find_cluster};
