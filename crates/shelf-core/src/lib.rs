//! Cross-cutting plumbing shared by Shelf services.
//!
//! Tracing bootstrap, health probes, the request-id layer and timestamp
//! serializers. Nothing in here knows about catalog entities.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
