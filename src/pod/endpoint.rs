//! pod::endpoint
//!
//! The pod endpoint: an immutable base location identifying the pod a
//! client is bound to.
//!
//! The endpoint is supplied once at construction and never mutated. All
//! container and resource URLs are derived from it here, so the rest of
//! the crate never concatenates URL strings itself.

use super::traits::PodError;

/// Immutable base URL of a Solid pod (`<scheme>://<host>/<owner>/`).
///
/// Normalized to always end with a trailing slash so that container and
/// resource URLs can be appended directly.
///
/// # Example
///
/// ```
/// use podlink::pod::PodEndpoint;
///
/// let ep = PodEndpoint::new("https://pod.example/alice").unwrap();
/// assert_eq!(ep.root(), "https://pod.example/alice/");
/// assert_eq!(ep.container_url("measurements"), "https://pod.example/alice/measurements/");
/// assert_eq!(
///     ep.resource_url("measurements", "log.txt"),
///     "https://pod.example/alice/measurements/log.txt"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodEndpoint {
    root: String,
}

impl PodEndpoint {
    /// Create an endpoint from a base URL.
    ///
    /// Accepts `http` and `https` URLs with a non-empty authority and
    /// normalizes them to end with `/`. Container and file names embedded
    /// later are not validated or escaped; a name that is not a plain path
    /// segment produces a malformed URL.
    ///
    /// # Errors
    ///
    /// `PodError::InvalidEndpoint` for other schemes or a missing host.
    pub fn new(url: impl Into<String>) -> Result<Self, PodError> {
        let url = url.into();
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| PodError::InvalidEndpoint(url.clone()))?;
        if rest.is_empty() || rest.starts_with('/') {
            return Err(PodError::InvalidEndpoint(url));
        }

        let root = if url.ends_with('/') {
            url
        } else {
            format!("{}/", url)
        };
        Ok(Self { root })
    }

    /// The pod root URL, with trailing slash.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// URL of a container: `<root><container>/`.
    ///
    /// The trailing slash signals container semantics to the server.
    pub fn container_url(&self, container: &str) -> String {
        format!("{}{}/", self.root, container)
    }

    /// URL of a resource: `<root><container>/<file>`.
    pub fn resource_url(&self, container: &str, file: &str) -> String {
        format!("{}{}/{}", self.root, container, file)
    }
}

impl std::fmt::Display for PodEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.root)
    }
}
