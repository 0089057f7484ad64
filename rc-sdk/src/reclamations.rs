//! Reclamation operations.
//!
//! Deleting an instance on a reclamation-enabled plan schedules a
//! reclamation instead of removing it outright. A scheduled reclamation can
//! be restored (the instance returns to `active`) or reclaimed (the
//! instance is removed for good).

use std::fmt;
use std::str::FromStr;

use rc_api::types::{Reclamation, ReclamationsList};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::client::{ResourceController, Response, require};
use crate::error::{Error, Result};

/// Action to run on a scheduled reclamation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReclamationAction {
    /// Bring the instance back to `active`.
    Restore,
    /// Remove the instance immediately.
    Reclaim,
}

impl ReclamationAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Restore => "restore",
            Self::Reclaim => "reclaim",
        }
    }
}

impl fmt::Display for ReclamationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReclamationAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "restore" => Ok(Self::Restore),
            "reclaim" => Ok(Self::Reclaim),
            "" => Err(Error::MissingParameter("action_name")),
            other => Err(Error::InvalidParameter("action_name", other.to_string())),
        }
    }
}

/// Filters for [`ResourceController::list_reclamations`].
#[derive(Debug, Clone, Default)]
pub struct ListReclamationsOptions {
    pub account_id: Option<String>,
    pub resource_instance_id: Option<String>,
    pub resource_group_id: Option<String>,
}

impl ListReclamationsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account_id(mut self, id: impl Into<String>) -> Self {
        self.account_id = Some(id.into());
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
}

/// Optional audit fields sent with a reclamation action.
#[derive(Debug, Clone, Default)]
pub struct ReclamationActionOptions {
    pub request_by: Option<String>,
    pub comment: Option<String>,
}

impl ReclamationActionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request_by(mut self, request_by: impl Into<String>) -> Self {
        self.request_by = Some(request_by.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl ResourceController {
    // =========================================================================
    // Reclamations
    // =========================================================================

    /// List reclamations.
    #[instrument(skip(self, options))]
    pub async fn list_reclamations(
        &self,
        options: ListReclamationsOptions,
    ) -> Result<Response<ReclamationsList>> {
        debug!("Listing reclamations");

        let mut request = self.client().list_reclamations();
        set_optional!(
            request,
            options,
            account_id,
            resource_instance_id,
            resource_group_id,
        );
        send!(self, request)
    }

    /// Restore or reclaim a scheduled reclamation.
    #[instrument(skip(self, options))]
    pub async fn run_reclamation_action(
        &self,
        id: &str,
        action: ReclamationAction,
        options: ReclamationActionOptions,
    ) -> Result<Response<Reclamation>> {
        let id = require("id", id)?;
        info!("Running reclamation action");

        let ReclamationActionOptions {
            request_by,
            comment,
        } = options;

        send!(
            self,
            self.client()
                .run_reclamation_action()
                .id(id)
                .action_name(action.as_str())
                .body_map(move |b| b.request_by(request_by).comment(comment))
        )
    }
}
