//! pod::ldp
//!
//! HTTP implementation of the `Pod` trait against a Linked Data Platform
//! server.
//!
//! # Design
//!
//! One `reqwest::Client` and one [`PodEndpoint`], both fixed at
//! construction. Each operation is a single attempt: transport failures
//! are fatal and carry the attempted URI; there is no retry or backoff.
//!
//! Wire protocol:
//! - `POST <root>` with a fixed Turtle body, `Link: ...BasicContainer` and
//!   `Slug: <name>/` creates a container (trailing slash signals container
//!   semantics to the server).
//! - `GET <root><container>/<file>` probes existence (200 means exists)
//!   and reads documents.
//! - `PUT` to the resource replaces an existing document; `POST` to the
//!   container with `Slug: <file>` creates a new one. Write responses are
//!   not status-checked: the client trusts the server accepted the write
//!   whenever the transport succeeded.
//!
//! LDP does not guarantee the server honors a `Slug`; a compliant server
//! may pick another name, in which case the resource is not reachable at
//! the name the caller used. This client assumes the slug is honored.

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE, LINK};
use reqwest::{Client, StatusCode};

use super::document;
use super::endpoint::PodEndpoint;
use super::traits::{ContainerOutcome, Pod, PodError};

/// Link header value declaring an LDP basic container.
const BASIC_CONTAINER_LINK: &str = "<http://www.w3.org/ns/ldp#BasicContainer>; rel=\"type\"";

/// Media type of container descriptions.
const TEXT_TURTLE: &str = "text/turtle";

/// Media type of resource documents.
const TEXT_PLAIN: &str = "text/plain";

/// Header naming the resource a POST should create.
const SLUG: &str = "Slug";

/// Pod client speaking HTTP against an LDP server.
///
/// # Example
///
/// ```ignore
/// use podlink::pod::{LdpPod, Pod, PodEndpoint};
///
/// let endpoint = PodEndpoint::new("https://pod.example/alice")?;
/// let pod = LdpPod::new(endpoint);
///
/// pod.create_container("measurements").await?;
/// pod.publish_data("measurements", "log.txt", &["a".into(), "b".into()]).await?;
/// ```
#[derive(Debug, Clone)]
pub struct LdpPod {
    /// HTTP client for making requests
    client: Client,
    /// Pod base location, immutable for the client's lifetime
    endpoint: PodEndpoint,
}

impl LdpPod {
    /// Create a pod client bound to the given endpoint.
    pub fn new(endpoint: PodEndpoint) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// The endpoint this client is bound to.
    pub fn endpoint(&self) -> &PodEndpoint {
        &self.endpoint
    }

    /// Probe whether a resource exists.
    ///
    /// Issues a GET and discards the body. Returns true iff the status is
    /// exactly 200; 404, 403, and server errors all count as "does not
    /// exist" (absent and inaccessible are not distinguished).
    async fn exists(&self, uri: &str) -> Result<bool, PodError> {
        let response = self
            .client
            .get(uri)
            .send()
            .await
            .map_err(|e| network_error(uri, &e))?;
        Ok(response.status() == StatusCode::OK)
    }
}

#[async_trait]
impl Pod for LdpPod {
    fn name(&self) -> &'static str {
        "ldp"
    }

    async fn create_container(&self, name: &str) -> Result<ContainerOutcome, PodError> {
        let uri = self.endpoint.root();

        let response = self
            .client
            .post(uri)
            .header(CONTENT_TYPE, TEXT_TURTLE)
            .header(LINK, HeaderValue::from_static(BASIC_CONTAINER_LINK))
            .header(SLUG, format!("{}/", name))
            .body(container_turtle(name))
            .send()
            .await
            .map_err(|e| network_error(uri, &e))?;

        let status = response.status();
        if status == StatusCode::CREATED {
            Ok(ContainerOutcome::Created)
        } else {
            let body = response.text().await.map_err(|e| network_error(uri, &e))?;
            Ok(ContainerOutcome::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }

    async fn publish_data(
        &self,
        container: &str,
        file: &str,
        values: &[String],
    ) -> Result<(), PodError> {
        let blob = document::encode(values);
        let resource_uri = self.endpoint.resource_url(container, file);

        if self.exists(&resource_uri).await? {
            // Full replace of the existing document.
            self.client
                .put(&resource_uri)
                .header(CONTENT_TYPE, TEXT_PLAIN)
                .body(blob)
                .send()
                .await
                .map_err(|e| network_error(&resource_uri, &e))?;
        } else {
            let container_uri = self.endpoint.container_url(container);
            self.client
                .post(&container_uri)
                .header(SLUG, file)
                .header(CONTENT_TYPE, TEXT_PLAIN)
                .body(blob)
                .send()
                .await
                .map_err(|e| network_error(&container_uri, &e))?;
        }

        Ok(())
    }

    async fn read_data(&self, container: &str, file: &str) -> Result<Vec<String>, PodError> {
        let uri = self.endpoint.resource_url(container, file);

        let response = self
            .client
            .get(&uri)
            .send()
            .await
            .map_err(|e| network_error(&uri, &e))?;
        let body = response.text().await.map_err(|e| network_error(&uri, &e))?;

        Ok(document::decode(&body))
    }
}

/// Build the Turtle description posted when creating a container.
///
/// The container name is interpolated into the `dcterms:title` literal
/// without escaping; a name containing `"` corrupts the emitted Turtle.
/// Known defect boundary of the format, reproduced deliberately.
fn container_turtle(name: &str) -> String {
    format!(
        "@prefix ldp: <http://www.w3.org/ns/ldp#>.\n\
         @prefix dcterms: <http://purl.org/dc/terms/>.\n\
         <> a ldp:Container, ldp:BasicContainer, ldp:Resource;\n\
         dcterms:title \"{}\";\n\
         dcterms:description \"My Container\".",
        name
    )
}

/// Map a transport failure to `PodError::Network`, tagged with the URI.
fn network_error(uri: &str, err: &reqwest::Error) -> PodError {
    PodError::Network {
        uri: uri.to_string(),
        message: err.to_string(),
    }
}
