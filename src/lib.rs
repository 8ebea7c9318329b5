//! Podlink - A client for Solid pods speaking the Linked Data Platform protocol
//!
//! Podlink manages resources in a remote pod: it creates LDP containers and
//! creates, reads, and updates plain-text resources inside them. Writes are
//! existence-checked (create vs. replace), and updates follow a
//! read-merge-write protocol that appends new values after existing content.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to `pod`)
//! - [`pod`] - The pod client core: trait seam, HTTP implementation, mock
//! - [`ui`] - User-facing output utilities
//!
//! # Consistency model
//!
//! The client is deliberately thin: the existence probe and the subsequent
//! write are not atomic, and `update_data` is a read-then-overwrite, not a
//! patch. Concurrent writers to the same resource require coordination
//! outside this crate (or server-side conditional requests).

pub mod cli;
pub mod pod;
pub mod ui;
