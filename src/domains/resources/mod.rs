//! Resources domain module.
//!
//! Resources are read-only views of the station data that MCP clients can
//! fetch directly, without calling a tool.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file in `definitions/` (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` and `DynamicResourceProvider` traits
//! 3. Export in `definitions/mod.rs`
//! 4. Add a `ResourceKind` variant and its arm in `service.rs`
//! 5. Register in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::{DynamicResourceProvider, ResourceContext, ResourceDefinition};
pub use error::ResourceError;
pub use registry::get_all_resources;
pub use service::{ResourceEntry, ResourceKind, ResourceService};
