//! pod::traits
//!
//! Pod trait definition for interacting with LDP containers in a Solid pod.
//!
//! # Design
//!
//! The `Pod` trait is async because pod operations involve network I/O.
//! All methods return `Result` so transport failures surface to the caller.
//!
//! Container creation is the one soft-failure path: a non-201 response is
//! not an error, it is reported as [`ContainerOutcome::Rejected`] and the
//! call returns normally. Resource reads and writes do not branch on the
//! response status at all; only transport failures are fatal.
//!
//! # Example
//!
//! ```ignore
//! use podlink::pod::{Pod, ContainerOutcome};
//!
//! async fn record(pod: &dyn Pod) -> Result<(), PodError> {
//!     pod.create_container("measurements").await?;
//!     pod.publish_data("measurements", "log.txt", &["a".into(), "b".into()]).await?;
//!     pod.update_data("measurements", "log.txt", &["c".into()]).await?;
//!     let values = pod.read_data("measurements", "log.txt").await?;
//!     assert_eq!(values, vec!["a", "b", "c"]);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

/// Errors from pod operations.
///
/// Both variants are unrecoverable at this layer: no operation is retried.
#[derive(Debug, Clone, Error)]
pub enum PodError {
    /// Network or connection error during a request.
    ///
    /// Carries the attempted URI so the caller can tell which round trip
    /// failed (an update performs several).
    #[error("network error for {uri}: {message}")]
    Network {
        /// The URI the failed request was addressed to
        uri: String,
        /// Underlying transport error message
        message: String,
    },

    /// The configured pod endpoint is not a usable HTTP(S) URL.
    #[error("invalid pod endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Result of a container creation attempt.
///
/// The server is the source of truth for container existence; creating a
/// container that already exists is not deduplicated by the client. A
/// rejection is deliberately not an error (see module docs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerOutcome {
    /// The server answered 201 Created.
    Created,
    /// The server answered with any other status; the response body is
    /// retained as the diagnostic.
    Rejected {
        /// HTTP status code of the response
        status: u16,
        /// Response body, surfaced for logging
        body: String,
    },
}

impl ContainerOutcome {
    /// True if the container was created.
    pub fn is_created(&self) -> bool {
        matches!(self, ContainerOutcome::Created)
    }
}

/// The Pod trait for interacting with LDP containers in a Solid pod.
///
/// Implementations are bound to a single pod endpoint fixed at construction.
/// All HTTP detail is internal; callers see containers, resources, and
/// ordered sequences of values.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
/// That does not make the operations safe for concurrent use against the
/// same resource: `publish_data` is a check-then-act and `update_data` a
/// read-modify-write, and neither is atomic with respect to the server.
#[async_trait]
pub trait Pod: Send + Sync {
    /// Get the implementation name (e.g., "ldp", "mock").
    fn name(&self) -> &'static str;

    /// Create an LDP basic container in the pod.
    ///
    /// Posts a fixed Turtle description of the container to the pod root,
    /// with a `Slug` carrying the container name. A 201 response yields
    /// [`ContainerOutcome::Created`]; any other status yields
    /// [`ContainerOutcome::Rejected`] and the call still returns `Ok`.
    ///
    /// # Errors
    ///
    /// `PodError::Network` if the request itself fails.
    async fn create_container(&self, name: &str) -> Result<ContainerOutcome, PodError>;

    /// Write `values` as the full content of `<container>/<file>`.
    ///
    /// The values are encoded one per line (see [`document`]). If the
    /// resource already exists the document is replaced with a PUT;
    /// otherwise it is created with a Slug POST to the container. The
    /// write response status is not checked.
    ///
    /// An empty `values` slice produces an empty document body.
    ///
    /// [`document`]: crate::pod::document
    ///
    /// # Errors
    ///
    /// `PodError::Network` if the existence probe or the write fails at
    /// the transport level.
    async fn publish_data(
        &self,
        container: &str,
        file: &str,
        values: &[String],
    ) -> Result<(), PodError>;

    /// Read `<container>/<file>` and decode it into its values.
    ///
    /// The response status is not checked; whatever body comes back is
    /// decoded line by line.
    ///
    /// # Errors
    ///
    /// `PodError::Network` if the request fails at the transport level.
    async fn read_data(&self, container: &str, file: &str) -> Result<Vec<String>, PodError>;

    /// Append `values` to `<container>/<file>`.
    ///
    /// Reads the current document, then publishes the concatenation of the
    /// old values followed by the new ones. The entire document is
    /// retransmitted; this is last-writer-wins, not a patch, and changes
    /// made by a concurrent writer between the read and the write are lost.
    ///
    /// Updates are additive, not idempotent: applying the same `values`
    /// twice stores them twice.
    async fn update_data(
        &self,
        container: &str,
        file: &str,
        values: &[String],
    ) -> Result<(), PodError> {
        let mut all = self.read_data(container, file).await?;
        all.extend_from_slice(values);
        self.publish_data(container, file, &all).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_outcome_is_created() {
        assert!(ContainerOutcome::Created.is_created());
        assert!(!ContainerOutcome::Rejected {
            status: 409,
            body: "conflict".into()
        }
        .is_created());
    }

    #[test]
    fn pod_error_display() {
        assert_eq!(
            format!(
                "{}",
                PodError::Network {
                    uri: "https://pod.example/data/log.txt".into(),
                    message: "connection refused".into(),
                }
            ),
            "network error for https://pod.example/data/log.txt: connection refused"
        );
        assert_eq!(
            format!("{}", PodError::InvalidEndpoint("ftp://pod.example".into())),
            "invalid pod endpoint: ftp://pod.example"
        );
    }
}
