//! pod::mock
//!
//! Mock pod implementation for deterministic testing.
//!
//! # Design
//!
//! The mock pod stores containers and resource documents in memory and
//! implements the same existence-checked write routing as the HTTP
//! implementation. It records every operation and allows configuring
//! failure scenarios so callers can exercise the fatal transport-error
//! paths without a network.
//!
//! # Example
//!
//! ```
//! use podlink::pod::mock::MockPod;
//! use podlink::pod::{ContainerOutcome, Pod};
//!
//! # tokio_test::block_on(async {
//! let pod = MockPod::new();
//!
//! let outcome = pod.create_container("measurements").await.unwrap();
//! assert_eq!(outcome, ContainerOutcome::Created);
//!
//! pod.publish_data("measurements", "log.txt", &["a".into(), "b".into()])
//!     .await
//!     .unwrap();
//! assert_eq!(
//!     pod.read_data("measurements", "log.txt").await.unwrap(),
//!     vec!["a", "b"]
//! );
//! # });
//! ```

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use super::document;
use super::traits::{ContainerOutcome, Pod, PodError};

/// Mock pod for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone)]
pub struct MockPod {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockPodInner>>,
}

/// Internal mutable state.
#[derive(Debug)]
struct MockPodInner {
    /// Created container names.
    containers: HashSet<String>,
    /// Stored documents, in wire form, by `(container, file)`.
    resources: HashMap<(String, String), String>,
    /// Operation to fail (for testing error paths).
    fail_on: Option<FailOn>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail create_container with the given error.
    CreateContainer(PodError),
    /// Fail publish_data with the given error.
    PublishData(PodError),
    /// Fail read_data with the given error.
    ReadData(PodError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone)]
pub enum MockOperation {
    CreateContainer {
        name: String,
    },
    PublishData {
        container: String,
        file: String,
        values: Vec<String>,
        /// True if the write replaced an existing document (the PUT path),
        /// false if it created a new one (the Slug-POST path).
        replaced: bool,
    },
    ReadData {
        container: String,
        file: String,
    },
}

impl MockPod {
    /// Create a new empty mock pod.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockPodInner {
                containers: HashSet::new(),
                resources: HashMap::new(),
                fail_on: None,
                operations: Vec::new(),
            })),
        }
    }

    /// Create a mock pod with a pre-existing resource.
    ///
    /// The values are stored in wire form, as if previously published.
    pub fn with_resource(container: &str, file: &str, values: &[String]) -> Self {
        let pod = Self::new();
        {
            let mut inner = pod.inner.lock().unwrap();
            inner.containers.insert(container.to_string());
            inner.resources.insert(
                (container.to_string(), file.to_string()),
                document::encode(values),
            );
        }
        pod
    }

    /// Configure the mock to fail on a specific operation.
    ///
    /// # Example
    ///
    /// ```
    /// use podlink::pod::mock::{FailOn, MockPod};
    /// use podlink::pod::PodError;
    ///
    /// let pod = MockPod::new().fail_on(FailOn::ReadData(PodError::Network {
    ///     uri: "https://pod.example/alice/m/log.txt".into(),
    ///     message: "connection reset".into(),
    /// }));
    /// ```
    pub fn fail_on(self, fail_on: FailOn) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.fail_on = Some(fail_on);
        }
        self
    }

    /// Clear the failure configuration.
    pub fn clear_fail_on(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_on = None;
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<MockOperation> {
        let inner = self.inner.lock().unwrap();
        inner.operations.clone()
    }

    /// Clear recorded operations.
    pub fn clear_operations(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.clear();
    }

    /// Whether a container has been created (for test verification).
    pub fn has_container(&self, name: &str) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.containers.contains(name)
    }

    /// The stored wire-form document of a resource (for test verification).
    pub fn resource_body(&self, container: &str, file: &str) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        inner
            .resources
            .get(&(container.to_string(), file.to_string()))
            .cloned()
    }

    /// Count of stored resources.
    pub fn resource_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.resources.len()
    }

    /// Record an operation.
    fn record(&self, op: MockOperation) {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(op);
    }

    /// Check if we should fail and return the error if so.
    fn check_fail<T>(&self, expected: &str) -> Option<Result<T, PodError>> {
        let inner = self.inner.lock().unwrap();
        match &inner.fail_on {
            Some(FailOn::CreateContainer(e)) if expected == "create_container" => {
                Some(Err(e.clone()))
            }
            Some(FailOn::PublishData(e)) if expected == "publish_data" => Some(Err(e.clone())),
            Some(FailOn::ReadData(e)) if expected == "read_data" => Some(Err(e.clone())),
            _ => None,
        }
    }
}

impl Default for MockPod {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Pod for MockPod {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn create_container(&self, name: &str) -> Result<ContainerOutcome, PodError> {
        self.record(MockOperation::CreateContainer {
            name: name.to_string(),
        });

        if let Some(result) = self.check_fail("create_container") {
            return result;
        }

        let mut inner = self.inner.lock().unwrap();
        if inner.containers.contains(name) {
            // The simulated server rejects duplicates; the client reports
            // that as a non-error outcome, like the HTTP implementation.
            return Ok(ContainerOutcome::Rejected {
                status: 409,
                body: format!("Container {} already exists", name),
            });
        }

        inner.containers.insert(name.to_string());
        Ok(ContainerOutcome::Created)
    }

    async fn publish_data(
        &self,
        container: &str,
        file: &str,
        values: &[String],
    ) -> Result<(), PodError> {
        let key = (container.to_string(), file.to_string());
        let replaced = {
            let inner = self.inner.lock().unwrap();
            inner.resources.contains_key(&key)
        };

        self.record(MockOperation::PublishData {
            container: container.to_string(),
            file: file.to_string(),
            values: values.to_vec(),
            replaced,
        });

        if let Some(result) = self.check_fail("publish_data") {
            return result;
        }

        let mut inner = self.inner.lock().unwrap();
        inner.resources.insert(key, document::encode(values));
        Ok(())
    }

    async fn read_data(&self, container: &str, file: &str) -> Result<Vec<String>, PodError> {
        self.record(MockOperation::ReadData {
            container: container.to_string(),
            file: file.to_string(),
        });

        if let Some(result) = self.check_fail("read_data") {
            return result;
        }

        let inner = self.inner.lock().unwrap();
        let body = inner
            .resources
            .get(&(container.to_string(), file.to_string()))
            .cloned()
            .unwrap_or_default();
        Ok(document::decode(&body))
    }
}
