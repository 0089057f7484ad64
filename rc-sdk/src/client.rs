//! The [`ResourceController`] handle shared by every operation module.

use rc_api::Client;
use tracing::debug;

use crate::config::SdkConfig;
use crate::connection::connect;
use crate::error::{Error, Result};

/// Status, headers and decoded body of a successful call.
pub type Response<T> = rc_api::ResponseValue<T>;

/// Applies the handle's `Transaction-Id` (if any) to a generated request
/// builder, sends it, and converts the error.
macro_rules! send {
    ($self:ident, $request:expr) => {{
        let mut request = $request;
        if let Some(transaction_id) = $self.transaction_id() {
            request = request.transaction_id(transaction_id.to_owned());
        }
        request.send().await.map_err($crate::error::Error::from)
    }};
}

/// Copies every `Some` field of an options struct onto the same-named
/// builder setter.
macro_rules! set_optional {
    ($request:ident, $options:ident, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $options.$field {
                $request = $request.$field(value);
            }
        )+
    };
}

/// Client for the IBM Cloud Resource Controller.
///
/// Each method maps one-to-one onto a REST operation: required identifiers
/// are checked locally, the request is sent, and the response is returned
/// unchanged. Nothing is cached and nothing is retried.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ResourceController {
    client: Client,
    transaction_id: Option<String>,
}

impl ResourceController {
    /// Create a client from the given configuration.
    pub fn new(config: SdkConfig) -> Result<Self> {
        debug!(service_url = %config.service_url, "creating resource controller client");
        Ok(Self::from_client(connect(&config)?))
    }

    /// Create a client configured from environment variables.
    ///
    /// See [`SdkConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(SdkConfig::from_env()?)
    }

    /// Wrap an existing low-level client.
    pub fn from_client(client: Client) -> Self {
        Self {
            client,
            transaction_id: None,
        }
    }

    /// A handle that sends `Transaction-Id: <id>` with every request.
    ///
    /// The original handle is left untouched.
    pub fn with_transaction_id(&self, transaction_id: impl Into<String>) -> Self {
        Self {
            client: self.client.clone(),
            transaction_id: Some(transaction_id.into()),
        }
    }

    /// The `Transaction-Id` sent by this handle.
    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    /// Get a reference to the underlying API client for advanced operations.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Consume the handle and return the underlying API client.
    pub fn into_client(self) -> Client {
        self.client
    }
}

/// Fails with [`Error::MissingParameter`] when `value` is empty or blank.
pub(crate) fn require<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        Err(Error::MissingParameter(name))
    } else {
        Ok(value)
    }
}
