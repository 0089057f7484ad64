//! Resource binding operations.

use rc_api::types::{ResourceBinding, ResourceBindingsList};
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

use crate::client::{ResourceController, Response, require};
use crate::error::Result;

/// Parameters for [`ResourceController::create_resource_binding`].
#[derive(Debug, Clone, Default)]
pub struct CreateResourceBindingOptions {
    /// CRN or GUID of the alias being bound.
    pub source: String,
    /// CRN of the application receiving the credentials.
    pub target: String,
    pub name: Option<String>,
    pub parameters: Option<Map<String, Value>>,
    /// IAM role for the generated credentials, e.g. `Writer`.
    pub role: Option<String>,
}

impl CreateResourceBindingOptions {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
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

/// Filters for [`ResourceController::list_resource_bindings`].
#[derive(Debug, Clone, Default)]
pub struct ListResourceBindingsOptions {
    pub guid: Option<String>,
    pub name: Option<String>,
    pub resource_group_id: Option<String>,
    pub resource_id: Option<String>,
    pub region_binding_id: Option<String>,
    pub limit: Option<i64>,
    pub start: Option<String>,
    pub updated_from: Option<String>,
    pub updated_to: Option<String>,
}

impl ListResourceBindingsOptions {
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
    // Resource Bindings
    // =========================================================================

    /// Bind an alias to an application.
    #[instrument(skip(self, options), fields(source = %options.source))]
    pub async fn create_resource_binding(
        &self,
        options: CreateResourceBindingOptions,
    ) -> Result<Response<ResourceBinding>> {
        require("source", &options.source)?;
        require("target", &options.target)?;
        info!("Creating resource binding");

        let CreateResourceBindingOptions {
            source,
            target,
            name,
            parameters,
            role,
        } = options;

        send!(
            self,
            self.client().create_resource_binding().body_map(move |b| {
                let b = b.source(source).target(target).name(name).role(role);
                match parameters {
                    Some(parameters) => b.parameters(parameters),
                    None => b,
                }
            })
        )
    }

    /// Get a resource binding by CRN or GUID.
    #[instrument(skip(self))]
    pub async fn get_resource_binding(&self, id: &str) -> Result<Response<ResourceBinding>> {
        let id = require("id", id)?;
        debug!("Getting resource binding");

        send!(self, self.client().get_resource_binding().id(id))
    }

    /// Rename a resource binding.
    #[instrument(skip(self))]
    pub async fn update_resource_binding(
        &self,
        id: &str,
        name: &str,
    ) -> Result<Response<ResourceBinding>> {
        let id = require("id", id)?;
        let name = require("name", name)?.to_owned();
        info!("Updating resource binding");

        send!(
            self,
            self.client()
                .update_resource_binding()
                .id(id)
                .body_map(move |b| b.name(name))
        )
    }

    /// Delete a resource binding.
    #[instrument(skip(self))]
    pub async fn delete_resource_binding(&self, id: &str) -> Result<Response<()>> {
        let id = require("id", id)?;
        info!("Deleting resource binding");

        send!(self, self.client().delete_resource_binding().id(id))
    }

    /// List resource bindings.
    #[instrument(skip(self, options))]
    pub async fn list_resource_bindings(
        &self,
        options: ListResourceBindingsOptions,
    ) -> Result<Response<ResourceBindingsList>> {
        debug!("Listing resource bindings");

        let mut request = self.client().list_resource_bindings();
        set_optional!(
            request,
            options,
            guid,
            name,
            resource_group_id,
            resource_id,
            region_binding_id,
            limit,
            start,
            updated_from,
            updated_to,
        );
        send!(self, request)
    }
}
