//! Low-level typed client for the IBM Cloud Resource Controller API.
//!
//! Generated at build time by progenitor from `spec/resource-controller.json`.
//! Every REST operation is a builder on [`Client`]:
//!
//! ```no_run
//! # async fn example() -> Result<(), rc_api::Error<rc_api::types::ErrorResponse>> {
//! let client = rc_api::Client::new("https://resource-controller.cloud.ibm.com");
//! let instance = client
//!     .get_resource_instance()
//!     .id("8d7af921-b136-4078-9666-081bd8470d94")
//!     .send()
//!     .await?;
//! println!("{} -> {:?}", instance.status(), instance.state);
//! # Ok(())
//! # }
//! ```
//!
//! Required parameters that were never set fail with
//! [`Error::InvalidRequest`] before any request is sent. Documented error
//! statuses decode into [`types::ErrorResponse`] and surface as
//! [`Error::ErrorResponse`].
//!
//! Every request also carries an `api-version` header holding the document's
//! `info.version` (`2.0`). The service ignores it; the API version it serves
//! is selected by the `/v1` or `/v2` path prefix.

#![allow(clippy::all)]
#![allow(missing_docs)]

include!(concat!(env!("OUT_DIR"), "/codegen.rs"));

/// Base URL of the public Resource Controller endpoint.
pub const DEFAULT_SERVICE_URL: &str = "https://resource-controller.cloud.ibm.com";
