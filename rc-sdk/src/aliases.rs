//! Resource alias operations.

use rc_api::types::{ResourceAlias, ResourceAliasesList, ResourceBindingsList};
use tracing::{debug, info, instrument};

use crate::client::{ResourceController, Response, require};
use crate::error::Result;
use crate::pager::PageOptions;

/// Parameters for [`ResourceController::create_resource_alias`].
#[derive(Debug, Clone, Default)]
pub struct CreateResourceAliasOptions {
    pub name: String,
    /// CRN or GUID of the instance being aliased.
    pub source: String,
    /// CRN of the target scope, e.g. a Cloud Foundry space.
    pub target: String,
}

impl CreateResourceAliasOptions {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Filters for [`ResourceController::list_resource_aliases`].
#[derive(Debug, Clone, Default)]
pub struct ListResourceAliasesOptions {
    pub guid: Option<String>,
    pub name: Option<String>,
    pub resource_instance_id: Option<String>,
    pub region_instance_id: Option<String>,
    pub resource_id: Option<String>,
    pub resource_group_id: Option<String>,
    pub limit: Option<i64>,
    pub start: Option<String>,
    pub updated_from: Option<String>,
    pub updated_to: Option<String>,
}

impl ListResourceAliasesOptions {
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

    pub fn with_resource_instance_id(mut self, id: impl Into<String>) -> Self {
        self.resource_instance_id = Some(id.into());
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
    // Resource Aliases
    // =========================================================================

    /// Alias a resource instance into a target scope.
    #[instrument(skip(self, options), fields(name = %options.name, source = %options.source))]
    pub async fn create_resource_alias(
        &self,
        options: CreateResourceAliasOptions,
    ) -> Result<Response<ResourceAlias>> {
        require("name", &options.name)?;
        require("source", &options.source)?;
        require("target", &options.target)?;
        info!("Creating resource alias");

        let CreateResourceAliasOptions {
            name,
            source,
            target,
        } = options;

        send!(
            self,
            self.client()
                .create_resource_alias()
                .body_map(move |b| b.name(name).source(source).target(target))
        )
    }

    /// Get a resource alias by CRN or GUID.
    #[instrument(skip(self))]
    pub async fn get_resource_alias(&self, id: &str) -> Result<Response<ResourceAlias>> {
        let id = require("id", id)?;
        debug!("Getting resource alias");

        send!(self, self.client().get_resource_alias().id(id))
    }

    /// Rename a resource alias.
    #[instrument(skip(self))]
    pub async fn update_resource_alias(
        &self,
        id: &str,
        name: &str,
    ) -> Result<Response<ResourceAlias>> {
        let id = require("id", id)?;
        let name = require("name", name)?.to_owned();
        info!("Updating resource alias");

        send!(
            self,
            self.client()
                .update_resource_alias()
                .id(id)
                .body_map(move |b| b.name(name))
        )
    }

    /// Delete a resource alias. The service answers 400 while bindings still
    /// reference it.
    #[instrument(skip(self))]
    pub async fn delete_resource_alias(&self, id: &str) -> Result<Response<()>> {
        let id = require("id", id)?;
        info!("Deleting resource alias");

        send!(self, self.client().delete_resource_alias().id(id))
    }

    /// List resource aliases.
    #[instrument(skip(self, options))]
    pub async fn list_resource_aliases(
        &self,
        options: ListResourceAliasesOptions,
    ) -> Result<Response<ResourceAliasesList>> {
        debug!("Listing resource aliases");

        let mut request = self.client().list_resource_aliases();
        set_optional!(
            request,
            options,
            guid,
            name,
            resource_instance_id,
            region_instance_id,
            resource_id,
            resource_group_id,
            limit,
            start,
            updated_from,
            updated_to,
        );
        send!(self, request)
    }

    /// List the bindings of a resource alias.
    #[instrument(skip(self, page))]
    pub async fn list_resource_bindings_for_alias(
        &self,
        id: &str,
        page: PageOptions,
    ) -> Result<Response<ResourceBindingsList>> {
        let id = require("id", id)?;
        debug!("Listing bindings for resource alias");

        let mut request = self.client().list_resource_bindings_for_alias().id(id);
        set_optional!(request, page, limit, start);
        send!(self, request)
    }
}
