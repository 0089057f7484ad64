//! High-level SDK for the IBM Cloud Resource Controller.
//!
//! This crate wraps the low-level [`rc_api`] client with one method per REST
//! operation on [`ResourceController`]. Each method checks its required
//! identifiers locally, sends exactly one request, and hands back the
//! service's status, headers and decoded body unchanged. Lifecycle rules
//! (locking, dependency checks, reclamation) are enforced by the service
//! and surface as [`Error::Api`].
//!
//! # Quick Start
//!
//! ```no_run
//! use rc_sdk::{
//!     CreateResourceInstanceOptions, ListResourceInstancesOptions, ResourceController,
//!     SdkConfig,
//! };
//!
//! # async fn example() -> rc_sdk::Result<()> {
//! let rc = ResourceController::new(
//!     SdkConfig::new().with_bearer_token(std::env::var("IAM_TOKEN").unwrap_or_default()),
//! )?;
//!
//! let created = rc
//!     .with_transaction_id("provision-docs-example")
//!     .create_resource_instance(CreateResourceInstanceOptions::new(
//!         "my-instance",
//!         "global",
//!         "13aa3ee48c3b44ddb64c05c79f7ab8ef",
//!         "a10e4820-3685-11e9-b210-d663bd873d93",
//!     ))
//!     .await?;
//! println!("{} {:?}", created.status(), created.id);
//!
//! let guid = created.guid.clone().unwrap_or_default();
//! let page = rc
//!     .list_resource_instances(ListResourceInstancesOptions::new().with_guid(guid))
//!     .await?;
//! println!("rows: {:?}", page.rows_count);
//! # Ok(())
//! # }
//! ```
//!
//! # Locking
//!
//! ```no_run
//! # async fn example(rc: rc_sdk::ResourceController, id: &str) -> rc_sdk::Result<()> {
//! use rc_sdk::UpdateResourceInstanceOptions;
//!
//! rc.lock_resource_instance(id).await?;
//! let err = rc
//!     .update_resource_instance(id, UpdateResourceInstanceOptions::new().with_name("renamed"))
//!     .await
//!     .unwrap_err();
//! assert!(err.is_bad_request());
//! rc.unlock_resource_instance(id).await?;
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod client;

pub mod aliases;
pub mod bindings;
pub mod config;
pub mod connection;
pub mod error;
pub mod instances;
pub mod keys;
pub mod pager;
pub mod reclamations;
pub mod state;
pub mod teardown;

pub use aliases::{CreateResourceAliasOptions, ListResourceAliasesOptions};
pub use bindings::{CreateResourceBindingOptions, ListResourceBindingsOptions};
pub use client::{ResourceController, Response};
pub use config::SdkConfig;
pub use error::{Error, Result};
pub use instances::{
    CreateResourceInstanceOptions, DeleteResourceInstanceOptions, ListResourceInstancesOptions,
    UpdateResourceInstanceOptions,
};
pub use keys::{CreateResourceKeyOptions, ListResourceKeysOptions};
pub use pager::{PageOptions, next_start};
pub use reclamations::{ListReclamationsOptions, ReclamationAction, ReclamationActionOptions};
pub use teardown::{Outcome, ResourceKind, Teardown, TeardownReport};

/// Re-export API types for convenience.
pub use rc_api::types;

/// Re-export the low-level API client for advanced use cases.
pub use rc_api::Client;

/// Re-export of the HTTP status type used by [`Error::status`].
pub use reqwest::StatusCode;
