//! pod
//!
//! The pod client core: containers, resources, and documents in a Solid
//! pod, behind the [`Pod`] trait.
//!
//! # Architecture
//!
//! Responsibilities are layered inside this module:
//!
//! - `endpoint`: the immutable pod base location and all URL building
//! - [`document`]: the newline-delimited document codec
//! - `traits`: the `Pod` trait, error type, and container outcome;
//!   `update_data` is composed here from `read_data` + `publish_data`
//! - [`ldp`]: the HTTP implementation (existence probe, PUT-vs-POST write
//!   routing, fixed Turtle container description)
//! - [`mock`]: deterministic in-memory implementation for testing
//!
//! # Example
//!
//! ```ignore
//! use podlink::pod::{LdpPod, Pod, PodEndpoint};
//!
//! let pod = LdpPod::new(PodEndpoint::new("https://pod.example/alice")?);
//!
//! pod.create_container("measurements").await?;
//! pod.publish_data("measurements", "log.txt", &["a".into(), "b".into()]).await?;
//! pod.update_data("measurements", "log.txt", &["c".into()]).await?;
//!
//! // Old data strictly precedes new data.
//! assert_eq!(pod.read_data("measurements", "log.txt").await?, vec!["a", "b", "c"]);
//! ```

pub mod document;
mod endpoint;
pub mod ldp;
pub mod mock;
mod traits;

pub use endpoint::PodEndpoint;
pub use ldp::LdpPod;
pub use traits::{ContainerOutcome, Pod, PodError};
