//! Pagination over list endpoints.
//!
//! List envelopes carry a relative `next_url` such as
//! `/v2/resource_instances?limit=100&start=g1AAAA...`; the `start` query
//! parameter is the token for the following page.

use std::collections::HashSet;

use rc_api::types::{ResourceAlias, ResourceBinding, ResourceInstance, ResourceKey};
use tracing::{debug, instrument, warn};

use crate::aliases::ListResourceAliasesOptions;
use crate::bindings::ListResourceBindingsOptions;
use crate::client::ResourceController;
use crate::error::Result;
use crate::instances::ListResourceInstancesOptions;
use crate::keys::ListResourceKeysOptions;

/// Page size and token for sub-collection lists.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    pub limit: Option<i64>,
    pub start: Option<String>,
}

impl PageOptions {
    pub fn new() -> Self {
        Self::default()
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

/// Extract the `start` token from a `next_url`.
///
/// Returns `None` when there is no next page.
pub fn next_start(next_url: Option<&str>) -> Option<String> {
    let next_url = next_url?.trim();
    if next_url.is_empty() {
        return None;
    }
    // `next_url` is relative; any base works for reading the query.
    let base = reqwest::Url::parse(rc_api::DEFAULT_SERVICE_URL).ok()?;
    let url = base.join(next_url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "start")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Decides whether to fetch another page. Stops on a missing token or one
/// already visited in this listing.
fn advance(
    current: &mut Option<String>,
    seen: &mut HashSet<String>,
    next_url: Option<&str>,
) -> bool {
    match next_start(next_url) {
        Some(token) if !seen.insert(token.clone()) => {
            warn!(%token, "next_url returned an already visited page token; stopping");
            false
        }
        Some(token) => {
            *current = Some(token);
            true
        }
        None => false,
    }
}

impl ResourceController {
    // =========================================================================
    // Pagination
    // =========================================================================

    /// List every resource instance matching `options`, following `next_url`.
    #[instrument(skip(self, options))]
    pub async fn list_all_resource_instances(
        &self,
        mut options: ListResourceInstancesOptions,
    ) -> Result<Vec<ResourceInstance>> {
        let mut rows = Vec::new();
        let mut seen: HashSet<String> = options.start.iter().cloned().collect();
        loop {
            let page = self.list_resource_instances(options.clone()).await?.into_inner();
            rows.extend(page.resources);
            if !advance(&mut options.start, &mut seen, page.next_url.as_deref()) {
                break;
            }
        }
        debug!(count = rows.len(), "Listed all resource instances");
        Ok(rows)
    }

    /// List every resource alias matching `options`, following `next_url`.
    #[instrument(skip(self, options))]
    pub async fn list_all_resource_aliases(
        &self,
        mut options: ListResourceAliasesOptions,
    ) -> Result<Vec<ResourceAlias>> {
        let mut rows = Vec::new();
        let mut seen: HashSet<String> = options.start.iter().cloned().collect();
        loop {
            let page = self.list_resource_aliases(options.clone()).await?.into_inner();
            rows.extend(page.resources);
            if !advance(&mut options.start, &mut seen, page.next_url.as_deref()) {
                break;
            }
        }
        debug!(count = rows.len(), "Listed all resource aliases");
        Ok(rows)
    }

    /// List every resource binding matching `options`, following `next_url`.
    #[instrument(skip(self, options))]
    pub async fn list_all_resource_bindings(
        &self,
        mut options: ListResourceBindingsOptions,
    ) -> Result<Vec<ResourceBinding>> {
        let mut rows = Vec::new();
        let mut seen: HashSet<String> = options.start.iter().cloned().collect();
        loop {
            let page = self.list_resource_bindings(options.clone()).await?.into_inner();
            rows.extend(page.resources);
            if !advance(&mut options.start, &mut seen, page.next_url.as_deref()) {
                break;
            }
        }
        debug!(count = rows.len(), "Listed all resource bindings");
        Ok(rows)
    }

    /// List every resource key matching `options`, following `next_url`.
    #[instrument(skip(self, options))]
    pub async fn list_all_resource_keys(
        &self,
        mut options: ListResourceKeysOptions,
    ) -> Result<Vec<ResourceKey>> {
        let mut rows = Vec::new();
        let mut seen: HashSet<String> = options.start.iter().cloned().collect();
        loop {
            let page = self.list_resource_keys(options.clone()).await?.into_inner();
            rows.extend(page.resources);
            if !advance(&mut options.start, &mut seen, page.next_url.as_deref()) {
                break;
            }
        }
        debug!(count = rows.len(), "Listed all resource keys");
        Ok(rows)
    }
}
