//! State strings reported by the service.
//!
//! The service owns every transition; these only name the values the SDK
//! and its callers compare against.

/// Instance, alias, binding and key states.
pub const ACTIVE: &str = "active";
pub const INACTIVE: &str = "inactive";
pub const PROVISIONING: &str = "provisioning";
pub const REMOVED: &str = "removed";
pub const PENDING_RECLAMATION: &str = "pending_reclamation";

/// Reclamation states.
pub mod reclamation {
    pub const SCHEDULED: &str = "SCHEDULED";
    pub const RESTORING: &str = "RESTORING";
    pub const RECLAIMING: &str = "RECLAIMING";
}

/// `last_operation.state` values.
pub mod operation {
    pub const IN_PROGRESS: &str = "in progress";
    pub const SUCCEEDED: &str = "succeeded";
    pub const FAILED: &str = "failed";
}
