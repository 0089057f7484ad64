//! Resource key operations.

use rc_api::types::{ResourceKey, ResourceKeysList};
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

use crate::client::{ResourceController, Response, require};
use crate::error::Result;

/// Parameters for [`ResourceController::create_resource_key`].
#[derive(Debug, Clone, Default)]
pub struct CreateResourceKeyOptions {
    pub name: String,
    /// CRN or GUID of the instance or alias the key belongs to.
    pub source: String,
    pub parameters: Option<Map<String, Value>>,
    pub role: Option<String>,
}

impl CreateResourceKeyOptions {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            ..Default::default()
        }
    }

    pub fn with_parameters(mut self, parameters: Map<String, Value>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Filters for [`ResourceController::list_resource_keys`].
#[derive(Debug, Clone, Default)]
pub struct ListResourceKeysOptions {
    pub guid: Option<String>,
    pub name: Option<String>,
    pub resource_group_id: Option<String>,
    pub resource_id: Option<String>,
    pub limit: Option<i64>,
    pub start: Option<String>,
    pub updated_from: Option<String>,
    pub updated_to: Option<String>,
}

impl ListResourceKeysOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guid(mut self, guid: impl Into<String>) -> Self {
        self.guid = Some(guid.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_resource_group_id(mut self, id: impl Into<String>) -> Self {
        self.resource_group_id = Some(id.into());
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }
}

impl ResourceController {
    // =========================================================================
    // Resource Keys
    // =========================================================================

    /// Create a credential set for an instance or alias.
    #[instrument(skip(self, options), fields(name = %options.name, source = %options.source))]
    pub async fn create_resource_key(
        &self,
        options: CreateResourceKeyOptions,
    ) -> Result<Response<ResourceKey>> {
        require("name", &options.name)?;
        require("source", &options.source)?;
        info!("Creating resource key");

        let CreateResourceKeyOptions {
            name,
            source,
            parameters,
            role,
        } = options;

        send!(
            self,
            self.client().create_resource_key().body_map(move |b| {
                let b = b.name(name).source(source).role(role);
                match parameters {
                    Some(parameters) => b.parameters(parameters),
                    None => b,
                }
            })
        )
    }

    /// Get a resource key by CRN or GUID.
    #[instrument(skip(self))]
    pub async fn get_resource_key(&self, id: &str) -> Result<Response<ResourceKey>> {
        let id = require("id", id)?;
        debug!("Getting resource key");

        send!(self, self.client().get_resource_key().id(id))
    }

    /// Rename a resource key.
    #[instrument(skip(self))]
    pub async fn update_resource_key(&self, id: &str, name: &str) -> Result<Response<ResourceKey>> {
        let id = require("id", id)?;
        let name = require("name", name)?.to_owned();
        info!("Updating resource key");

        send!(
            self,
            self.client()
                .update_resource_key()
                .id(id)
                .body_map(move |b| b.name(name))
        )
    }

    /// Delete a resource key.
    #[instrument(skip(self))]
    pub async fn delete_resource_key(&self, id: &str) -> Result<Response<()>> {
        let id = require("id", id)?;
        info!("Deleting resource key");

        send!(self, self.client().delete_resource_key().id(id))
    }

    /// List resource keys.
    #[instrument(skip(self, options))]
    pub async fn list_resource_keys(
        &self,
        options: ListResourceKeysOptions,
    ) -> Result<Response<ResourceKeysList>> {
        debug!("Listing resource keys");

        let mut request = self.client().list_resource_keys();
        set_optional!(
            request,
            options,
            guid,
            name,
            resource_group_id,
            resource_id,
            limit,
            start,
            updated_from,
            updated_to,
        );
        send!(self, request)
    }
}
