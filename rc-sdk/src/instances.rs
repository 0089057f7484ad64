//! Resource instance operations: provisioning, lookup, update, deletion,
//! locking, and the alias/key sub-collections.

use rc_api::types::{ResourceAliasesList, ResourceInstance, ResourceInstancesList, ResourceKeysList};
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

use crate::client::{ResourceController, Response, require};
use crate::error::Result;
use crate::pager::PageOptions;

/// Parameters for [`ResourceController::create_resource_instance`].
#[derive(Debug, Clone, Default)]
pub struct CreateResourceInstanceOptions {
    /// Display name.
    pub name: String,
    /// Deployment location, e.g. `global` or `us-south`.
    pub target: String,
    /// Resource group the instance is created in.
    pub resource_group: String,
    /// Plan to provision.
    pub resource_plan_id: String,
    /// Tags attached at creation.
    pub tags: Vec<String>,
    /// Allow the service to clean the instance up when it is removed.
    pub allow_cleanup: Option<bool>,
    /// Service-specific provisioning parameters.
    pub parameters: Option<Map<String, Value>>,
}

impl CreateResourceInstanceOptions {
    /// Create new options with required fields.
    pub fn new(
        name: impl Into<String>,
        target: impl Into<String>,
        resource_group: impl Into<String>,
        resource_plan_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            resource_group: resource_group.into(),
            resource_plan_id: resource_plan_id.into(),
            ..Default::default()
        }
    }

    /// Add a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the cleanup flag.
    pub fn with_allow_cleanup(mut self, allow_cleanup: bool) -> Self {
        self.allow_cleanup = Some(allow_cleanup);
        self
    }

    /// Set the provisioning parameters.
    pub fn with_parameters(mut self, parameters: Map<String, Value>) -> Self {
        self.parameters = Some(parameters);
        self
    }
}

/// Parameters for [`ResourceController::update_resource_instance`].
///
/// Only fields that are set are sent.
#[derive(Debug, Clone, Default)]
pub struct UpdateResourceInstanceOptions {
    pub name: Option<String>,
    pub parameters: Option<Map<String, Value>>,
    pub resource_plan_id: Option<String>,
    pub allow_cleanup: Option<bool>,
}

impl UpdateResourceInstanceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_parameters(mut self, parameters: Map<String, Value>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub fn with_resource_plan_id(mut self, plan_id: impl Into<String>) -> Self {
        self.resource_plan_id = Some(plan_id.into());
        self
    }

    pub fn with_allow_cleanup(mut self, allow_cleanup: bool) -> Self {
        self.allow_cleanup = Some(allow_cleanup);
        self
    }
}

/// Parameters for [`ResourceController::delete_resource_instance`].
#[derive(Debug, Clone, Default)]
pub struct DeleteResourceInstanceOptions {
    /// Also delete the instance's aliases, bindings and keys.
    pub recursive: Option<bool>,
}

impl DeleteResourceInstanceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = Some(recursive);
        self
    }
}

/// Filters for [`ResourceController::list_resource_instances`].
#[derive(Debug, Clone, Default)]
pub struct ListResourceInstancesOptions {
    pub guid: Option<String>,
    pub name: Option<String>,
    pub resource_group_id: Option<String>,
    pub resource_id: Option<String>,
    pub resource_plan_id: Option<String>,
    /// Instance type, e.g. `service_instance`.
    pub instance_type: Option<String>,
    pub sub_type: Option<String>,
    /// Reported state, e.g. `active` or `removed`.
    pub state: Option<String>,
    pub limit: Option<i64>,
    /// Page token taken from a previous `next_url`.
    pub start: Option<String>,
    /// `YYYY-MM-DD`, inclusive.
    pub updated_from: Option<String>,
    /// `YYYY-MM-DD`, inclusive.
    pub updated_to: Option<String>,
}

impl ListResourceInstancesOptions {
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

    pub fn with_resource_id(mut self, id: impl Into<String>) -> Self {
        self.resource_id = Some(id.into());
        self
    }

    pub fn with_resource_plan_id(mut self, id: impl Into<String>) -> Self {
        self.resource_plan_id = Some(id.into());
        self
    }

    pub fn with_instance_type(mut self, instance_type: impl Into<String>) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }

    pub fn with_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.sub_type = Some(sub_type.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
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

    pub fn with_updated_range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.updated_from = Some(from.into());
        self.updated_to = Some(to.into());
        self
    }
}

impl ResourceController {
    // =========================================================================
    // Resource Instances
    // =========================================================================

    /// Provision a new resource instance.
    ///
    /// The service answers 201 when the instance is ready and 202 while
    /// provisioning continues asynchronously.
    #[instrument(
        skip(self, options),
        fields(name = %options.name, plan = %options.resource_plan_id)
    )]
    pub async fn create_resource_instance(
        &self,
        options: CreateResourceInstanceOptions,
    ) -> Result<Response<ResourceInstance>> {
        require("name", &options.name)?;
        require("target", &options.target)?;
        require("resource_group", &options.resource_group)?;
        require("resource_plan_id", &options.resource_plan_id)?;
        info!("Creating resource instance");

        let CreateResourceInstanceOptions {
            name,
            target,
            resource_group,
            resource_plan_id,
            tags,
            allow_cleanup,
            parameters,
        } = options;

        send!(
            self,
            self.client().create_resource_instance().body_map(move |b| {
                let b = b
                    .name(name)
                    .target(target)
                    .resource_group(resource_group)
                    .resource_plan_id(resource_plan_id)
                    .tags(tags)
                    .allow_cleanup(allow_cleanup);
                match parameters {
                    Some(parameters) => b.parameters(parameters),
                    None => b,
                }
            })
        )
    }

    /// Get a resource instance by CRN or GUID.
    #[instrument(skip(self))]
    pub async fn get_resource_instance(&self, id: &str) -> Result<Response<ResourceInstance>> {
        let id = require("id", id)?;
        debug!("Getting resource instance");

        send!(self, self.client().get_resource_instance().id(id))
    }

    /// Update a resource instance. Only the fields set in `options` change.
    #[instrument(skip(self, options))]
    pub async fn update_resource_instance(
        &self,
        id: &str,
        options: UpdateResourceInstanceOptions,
    ) -> Result<Response<ResourceInstance>> {
        let id = require("id", id)?;
        info!("Updating resource instance");

        let UpdateResourceInstanceOptions {
            name,
            parameters,
            resource_plan_id,
            allow_cleanup,
        } = options;

        send!(
            self,
            self.client()
                .update_resource_instance()
                .id(id)
                .body_map(move |b| {
                    let b = b
                        .name(name)
                        .resource_plan_id(resource_plan_id)
                        .allow_cleanup(allow_cleanup);
                    match parameters {
                        Some(parameters) => b.parameters(parameters),
                        None => b,
                    }
                })
        )
    }

    /// Delete a resource instance.
    ///
    /// Instances on reclamation-enabled plans move to `pending_reclamation`
    /// instead of `removed`. The service answers 400 while the instance is
    /// locked or still has aliases/keys (unless `recursive` is set), and 410
    /// when it is already gone.
    #[instrument(skip(self, options))]
    pub async fn delete_resource_instance(
        &self,
        id: &str,
        options: DeleteResourceInstanceOptions,
    ) -> Result<Response<()>> {
        let id = require("id", id)?;
        info!("Deleting resource instance");

        let mut request = self.client().delete_resource_instance().id(id);
        set_optional!(request, options, recursive);
        send!(self, request)
    }

    /// List resource instances.
    #[instrument(skip(self, options))]
    pub async fn list_resource_instances(
        &self,
        options: ListResourceInstancesOptions,
    ) -> Result<Response<ResourceInstancesList>> {
        debug!("Listing resource instances");

        let mut request = self.client().list_resource_instances();
        if let Some(instance_type) = options.instance_type {
            request = request.type_(instance_type);
        }
        set_optional!(
            request,
            options,
            guid,
            name,
            resource_group_id,
            resource_id,
            resource_plan_id,
            sub_type,
            state,
            limit,
            start,
            updated_from,
            updated_to,
        );
        send!(self, request)
    }

    /// List the aliases of a resource instance.
    #[instrument(skip(self, page))]
    pub async fn list_resource_aliases_for_instance(
        &self,
        id: &str,
        page: PageOptions,
    ) -> Result<Response<ResourceAliasesList>> {
        let id = require("id", id)?;
        debug!("Listing aliases for resource instance");

        let mut request = self.client().list_resource_aliases_for_instance().id(id);
        set_optional!(request, page, limit, start);
        send!(self, request)
    }

    /// List the keys of a resource instance.
    #[instrument(skip(self, page))]
    pub async fn list_resource_keys_for_instance(
        &self,
        id: &str,
        page: PageOptions,
    ) -> Result<Response<ResourceKeysList>> {
        let id = require("id", id)?;
        debug!("Listing keys for resource instance");

        let mut request = self.client().list_resource_keys_for_instance().id(id);
        set_optional!(request, page, limit, start);
        send!(self, request)
    }

    /// Lock a resource instance. While locked, update and delete fail with 400.
    #[instrument(skip(self))]
    pub async fn lock_resource_instance(&self, id: &str) -> Result<Response<ResourceInstance>> {
        let id = require("id", id)?;
        info!("Locking resource instance");

        send!(self, self.client().lock_resource_instance().id(id))
    }

    /// Unlock a resource instance.
    #[instrument(skip(self))]
    pub async fn unlock_resource_instance(&self, id: &str) -> Result<Response<ResourceInstance>> {
        let id = require("id", id)?;
        info!("Unlocking resource instance");

        send!(self, self.client().unlock_resource_instance().id(id))
    }
}
