//! Rust SDK for the IBM Cloud Resource Controller API.
//!
//! This crate provides two modules:
//!
//! - [`api`]: Low-level typed API client generated via progenitor
//! - [`sdk`]: High-level client with local validation, pagination and teardown helpers
//!
//! # Quick Start
//!
//! ```no_run
//! use resource_controller::sdk::{CreateResourceKeyOptions, ResourceController};
//!
//! # async fn example() -> resource_controller::sdk::Result<()> {
//! let rc = ResourceController::from_env()?;
//!
//! let key = rc
//!     .create_resource_key(CreateResourceKeyOptions::new(
//!         "my-key",
//!         "8d7af921-b136-4078-9666-081bd8470d94",
//!     ))
//!     .await?;
//! println!("key {:?} is {:?}", key.guid, key.state);
//!
//! rc.delete_resource_key(key.guid.as_deref().unwrap_or_default()).await?;
//! # Ok(())
//! # }
//! ```

/// Low-level typed API client generated via progenitor.
///
/// This module exposes the raw Resource Controller REST API as Rust types and
/// async builders. Use it for fine-grained control over individual requests.
pub use rc_api as api;

/// High-level SDK for Resource Controller operations.
///
/// This module provides:
/// - [`sdk::ResourceController`]: One method per REST operation
/// - [`sdk::SdkConfig`]: Endpoint, credentials and timeouts
/// - [`sdk::Teardown`]: Dependency-ordered cleanup of created resources
/// - [`sdk::types`]: Re-exported API types
pub use rc_sdk as sdk;
