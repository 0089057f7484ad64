//! Best-effort removal of resources created by a test run or script.
//!
//! Resources are removed in dependency order (keys, bindings, aliases,
//! instances, then reclamation-enabled instances) so the service never
//! rejects a delete because a dependent still exists. A 410 means the
//! resource was already deleted and counts as done. One failure never stops
//! the rest of the teardown.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::client::{ResourceController, Response};
use crate::error::Result;
use crate::instances::DeleteResourceInstanceOptions;
use crate::reclamations::{ListReclamationsOptions, ReclamationAction, ReclamationActionOptions};
use crate::state;

/// Time the service needs after a delete before the reclamation shows up.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(20);

/// Kind of tracked resource, in removal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Key,
    Binding,
    Alias,
    Instance,
    ReclamationInstance,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Key => "key",
            Self::Binding => "binding",
            Self::Alias => "alias",
            Self::Instance => "instance",
            Self::ReclamationInstance => "reclamation instance",
        })
    }
}

/// What happened to one tracked resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Deleted (or reclaimed) by the teardown.
    Removed,
    /// Already deleted before the teardown ran.
    AlreadyGone,
    /// Could not be removed.
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeardownEntry {
    pub kind: ResourceKind,
    pub id: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Result of [`Teardown::run`], one entry per tracked resource in the order
/// they were processed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TeardownReport {
    pub entries: Vec<TeardownEntry>,
}

impl TeardownReport {
    /// `true` when nothing failed.
    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn failures(&self) -> impl Iterator<Item = &TeardownEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, Outcome::Failed { .. }))
    }

    pub fn outcome_of(&self, kind: ResourceKind, id: &str) -> Option<&Outcome> {
        self.entries
            .iter()
            .find(|e| e.kind == kind && e.id == id)
            .map(|e| &e.outcome)
    }
}

/// Tracks created resources and removes them on [`run`](Self::run).
///
/// Track resources by GUID: reclamations reference their instance by GUID.
pub struct Teardown {
    rc: ResourceController,
    account_id: Option<String>,
    transaction_prefix: Option<String>,
    settle_delay: Duration,
    keys: Vec<String>,
    bindings: Vec<String>,
    aliases: Vec<String>,
    instances: Vec<String>,
    reclamation_instances: Vec<String>,
}

impl Teardown {
    pub fn new(rc: ResourceController) -> Self {
        Self {
            rc,
            account_id: None,
            transaction_prefix: None,
            settle_delay: DEFAULT_SETTLE_DELAY,
            keys: Vec::new(),
            bindings: Vec::new(),
            aliases: Vec::new(),
            instances: Vec::new(),
            reclamation_instances: Vec::new(),
        }
    }

    /// Restrict reclamation lookups to one account.
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Tag every cleanup request with a `Transaction-Id` of
    /// `<prefix>-<uuid>`, fresh per request.
    pub fn with_transaction_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.transaction_prefix = Some(prefix.into());
        self
    }

    /// Wait between scheduling a reclamation and looking it up.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn track_key(&mut self, id: impl Into<String>) {
        self.keys.push(id.into());
    }

    pub fn track_binding(&mut self, id: impl Into<String>) {
        self.bindings.push(id.into());
    }

    pub fn track_alias(&mut self, id: impl Into<String>) {
        self.aliases.push(id.into());
    }

    pub fn track_instance(&mut self, id: impl Into<String>) {
        self.instances.push(id.into());
    }

    /// Track an instance on a reclamation-enabled plan. Deleting it only
    /// schedules a reclamation, so teardown reclaims it explicitly.
    pub fn track_reclamation_instance(&mut self, id: impl Into<String>) {
        self.reclamation_instances.push(id.into());
    }

    /// Number of tracked resources.
    pub fn len(&self) -> usize {
        self.keys.len()
            + self.bindings.len()
            + self.aliases.len()
            + self.instances.len()
            + self.reclamation_instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove everything tracked. Most recently tracked first within a kind.
    #[instrument(skip(self), fields(tracked = self.len()))]
    pub async fn run(self) -> TeardownReport {
        let mut report = TeardownReport::default();

        for id in self.keys.iter().rev() {
            let outcome = settle(
                ResourceKind::Key,
                id,
                self.rc().delete_resource_key(id).await,
            );
            report.push(ResourceKind::Key, id, outcome);
        }

        for id in self.bindings.iter().rev() {
            let outcome = settle(
                ResourceKind::Binding,
                id,
                self.rc().delete_resource_binding(id).await,
            );
            report.push(ResourceKind::Binding, id, outcome);
        }

        for id in self.aliases.iter().rev() {
            let outcome = settle(
                ResourceKind::Alias,
                id,
                self.rc().delete_resource_alias(id).await,
            );
            report.push(ResourceKind::Alias, id, outcome);
        }

        for id in self.instances.iter().rev() {
            let outcome = self.remove_instance(id).await;
            report.push(ResourceKind::Instance, id, outcome);
        }

        for id in self.reclamation_instances.iter().rev() {
            let outcome = self.remove_reclamation_instance(id).await;
            report.push(ResourceKind::ReclamationInstance, id, outcome);
        }

        info!(
            entries = report.entries.len(),
            failures = report.failures().count(),
            "Teardown finished"
        );
        report
    }

    /// Handle for the next request.
    fn rc(&self) -> ResourceController {
        match &self.transaction_prefix {
            Some(prefix) => self
                .rc
                .with_transaction_id(format!("{prefix}-{}", Uuid::new_v4())),
            None => self.rc.clone(),
        }
    }

    async fn remove_instance(&self, id: &str) -> Outcome {
        match self.rc().get_resource_instance(id).await {
            Ok(instance) => {
                let active = instance.state.as_deref() == Some(state::ACTIVE);
                if active && instance.locked == Some(true) {
                    if let Err(err) = self.rc().unlock_resource_instance(id).await {
                        warn!(%id, error = %err, "Failed to unlock instance for cleanup");
                    }
                }
            }
            Err(err) => warn!(%id, error = %err, "Failed to fetch instance for cleanup"),
        }

        let deleted = self
            .rc()
            .delete_resource_instance(id, DeleteResourceInstanceOptions::default())
            .await;
        settle(ResourceKind::Instance, id, deleted)
    }

    async fn remove_reclamation_instance(&self, id: &str) -> Outcome {
        let reported = match self.rc().get_resource_instance(id).await {
            Ok(instance) => instance.into_inner().state,
            Err(err) => {
                warn!(%id, error = %err, "Failed to fetch instance for cleanup");
                None
            }
        };

        match reported.as_deref() {
            Some(state::REMOVED) => {
                info!(%id, "Instance was already reclaimed");
                Outcome::AlreadyGone
            }
            Some(state::PENDING_RECLAMATION) => self.reclaim(id).await,
            _ => {
                let deleted = self
                    .rc()
                    .delete_resource_instance(id, DeleteResourceInstanceOptions::default())
                    .await;
                if let Err(err) = deleted {
                    warn!(%id, error = %err, "Failed to schedule instance for reclamation");
                    return Outcome::Failed {
                        reason: err.to_string(),
                    };
                }
                tokio::time::sleep(self.settle_delay).await;
                self.reclaim(id).await
            }
        }
    }

    async fn reclaim(&self, instance_id: &str) -> Outcome {
        let mut filter = ListReclamationsOptions::new().with_resource_instance_id(instance_id);
        filter.account_id = self.account_id.clone();

        let reclamations = match self.rc().list_reclamations(filter).await {
            Ok(list) => list.into_inner().resources,
            Err(err) => {
                warn!(%instance_id, error = %err, "Failed to list reclamations");
                return Outcome::Failed {
                    reason: err.to_string(),
                };
            }
        };

        let reclamation_id = match reclamations.as_slice() {
            [only] => only.id.clone(),
            others => {
                let reason = format!("expected one reclamation, found {}", others.len());
                warn!(%instance_id, %reason, "Cannot reclaim instance");
                return Outcome::Failed { reason };
            }
        };
        let Some(reclamation_id) = reclamation_id else {
            return Outcome::Failed {
                reason: "reclamation has no id".to_string(),
            };
        };

        match self
            .rc()
            .run_reclamation_action(
                &reclamation_id,
                ReclamationAction::Reclaim,
                ReclamationActionOptions::default(),
            )
            .await
        {
            Ok(_) => {
                info!(%instance_id, %reclamation_id, "Reclaimed instance");
                Outcome::Removed
            }
            Err(err) => {
                warn!(%instance_id, %reclamation_id, error = %err, "Failed to reclaim instance");
                Outcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }
}

impl TeardownReport {
    fn push(&mut self, kind: ResourceKind, id: &str, outcome: Outcome) {
        self.entries.push(TeardownEntry {
            kind,
            id: id.to_string(),
            outcome,
        });
    }
}

fn settle(kind: ResourceKind, id: &str, deleted: Result<Response<()>>) -> Outcome {
    match deleted {
        Ok(_) => {
            info!(%kind, %id, "Removed");
            Outcome::Removed
        }
        Err(err) if err.is_gone() => {
            info!(%kind, %id, "Already deleted");
            Outcome::AlreadyGone
        }
        Err(err) => {
            warn!(%kind, %id, error = %err, "Cleanup failed");
            Outcome::Failed {
                reason: err.to_string(),
            }
        }
    }
}
