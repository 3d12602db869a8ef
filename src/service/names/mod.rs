//! Session-scoped ID to name resolution.
//!
//! [`NameResolver`] collects entity IDs from any number of call sites, filters out the ones it
//! already knows, sends the remainder to a [`NameLookup`] in a single batch and merges the
//! answer into a cache that lives as long as the resolver. Reads through
//! [`NameResolver::get_name`] never block on the network and always produce something
//! displayable.
//!
//! # Usage
//!
//! ```ignore
//! let resolver = NameResolver::new(portal_client).with_locale(user_locale);
//!
//! resolver
//!     .resolve(
//!         &NameRequest::new()
//!             .ids(NameCategory::Type, [587])
//!             .ids(NameCategory::SolarSystem, [30002187])
//!             .esi([95465499]),
//!     )
//!     .await;
//!
//! assert_eq!(resolver.get_name(Some(587), None), "Rifter");
//! ```

#[cfg(test)]
mod tests;

pub mod locale;
pub mod lookup;
pub mod policy;

use std::collections::{hash_map::Entry, BTreeMap, HashMap, HashSet};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, RwLock, RwLockReadGuard, RwLockWriteGuard,
};

use dioxus_logger::tracing;

use crate::{
    error::Error,
    model::names::{EntityId, LookupRequest, NameRequest, NamesResponse, ParsedNames},
    service::names::{
        locale::{effective_language, FixedLocale, LocaleSource},
        lookup::NameLookup,
        policy::{LogAndContinue, LookupFailurePolicy},
    },
};

/// Rendered by [`NameResolver::get_name`] when there is neither an ID nor a fallback.
pub const MISSING_ID_PLACEHOLDER: &str = "-";

#[derive(Default)]
struct ResolverState {
    names: RwLock<HashMap<EntityId, String>>,
    in_flight: AtomicUsize,
}

/// Deduplicating, incrementally populated cache of entity names backed by a batch lookup.
///
/// Cloning is cheap and every clone shares the same cache, so one resolver created at
/// session start can be handed to every view that needs names. Dropping the last clone
/// discards the cache.
///
/// Overlapping [`resolve`](Self::resolve) calls are not coalesced: each computes its own
/// delta against the cache at call time, so two concurrent calls may both request an ID
/// neither has seen yet. Merging is idempotent, so this only costs a redundant request.
pub struct NameResolver<L> {
    lookup: Arc<L>,
    locale: Arc<dyn LocaleSource>,
    failure_policy: Arc<dyn LookupFailurePolicy>,
    state: Arc<ResolverState>,
}

impl<L> Clone for NameResolver<L> {
    fn clone(&self) -> Self {
        Self {
            lookup: self.lookup.clone(),
            locale: self.locale.clone(),
            failure_policy: self.failure_policy.clone(),
            state: self.state.clone(),
        }
    }
}

impl<L> NameResolver<L> {
    /// Creates a resolver with an empty cache, the default language and the
    /// [`LogAndContinue`] failure policy.
    pub fn new(lookup: L) -> Self {
        Self {
            lookup: Arc::new(lookup),
            locale: Arc::new(FixedLocale::default()),
            failure_policy: Arc::new(LogAndContinue),
            state: Arc::new(ResolverState::default()),
        }
    }

    /// Reads the request language from `locale` at the start of every lookup.
    pub fn with_locale(mut self, locale: impl LocaleSource + 'static) -> Self {
        self.locale = Arc::new(locale);
        self
    }

    pub fn with_failure_policy(mut self, policy: impl LookupFailurePolicy + 'static) -> Self {
        self.failure_policy = Arc::new(policy);
        self
    }

    /// Display name for `id`.
    ///
    /// # Returns
    /// - The cached name when `id` has been resolved
    /// - `fallback` when `id` is absent or unresolved and a fallback was given
    /// - `"-"` when `id` is absent and no fallback was given
    /// - `id` rendered as a number when it is unresolved and no fallback was given
    pub fn get_name(&self, id: Option<EntityId>, fallback: Option<&str>) -> String {
        let Some(id) = id else {
            return fallback.unwrap_or(MISSING_ID_PLACEHOLDER).to_string();
        };

        if let Some(name) = self.read_names().get(&id) {
            return name.clone();
        }

        fallback
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string())
    }

    /// Cached name for `id`, without any fallback.
    pub fn name(&self, id: EntityId) -> Option<String> {
        self.read_names().get(&id).cloned()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.read_names().contains_key(&id)
    }

    /// Number of resolved names.
    pub fn len(&self) -> usize {
        self.read_names().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_names().is_empty()
    }

    /// `true` while at least one lookup issued by this resolver (or a clone) is in flight.
    pub fn is_pending(&self) -> bool {
        self.state.in_flight.load(Ordering::SeqCst) > 0
    }

    /// `true` when resolving `request` would issue a lookup, `false` when it would
    /// short-circuit because every valid ID is already cached.
    pub fn needs_lookup(&self, request: &NameRequest) -> bool {
        self.build_lookup_request(request).is_some()
    }

    /// Builds the outbound request for the IDs in `request` that still need a name.
    ///
    /// Each ID is kept at most once across the whole request. Cached IDs are dropped, as
    /// are non-positive universe IDs and categories left empty after filtering.
    ///
    /// # Returns
    /// - `Some(LookupRequest)` - At least one ID still needs resolving
    /// - `None` - Everything requested is already cached, no call is needed
    fn build_lookup_request(&self, request: &NameRequest) -> Option<LookupRequest> {
        let mut seen: HashSet<EntityId> = HashSet::new();
        let mut ids = BTreeMap::new();

        let esi: Vec<EntityId> = {
            let names = self.read_names();

            for (category, category_ids) in &request.ids {
                let unresolved: Vec<EntityId> = category_ids
                    .iter()
                    .copied()
                    .filter(|id| !names.contains_key(id) && seen.insert(*id))
                    .collect();

                if !unresolved.is_empty() {
                    ids.insert(*category, unresolved);
                }
            }

            request
                .esi
                .iter()
                .copied()
                .filter(|&id| id > 0 && !names.contains_key(&id) && seen.insert(id))
                .collect()
        };

        if ids.is_empty() && esi.is_empty() {
            return None;
        }

        Some(LookupRequest {
            language: effective_language(self.locale.as_ref()),
            ids,
            esi,
        })
    }

    /// Merges a lookup response without replacing names already in the cache.
    ///
    /// # Returns
    /// The number of names newly added to the cache
    fn merge(&self, response: NamesResponse) -> usize {
        let ParsedNames { names, rejected } = response.parse();

        if !rejected.is_empty() {
            tracing::warn!(
                keys = ?rejected,
                "Skipping entries with non-numeric IDs in name lookup response"
            );
        }

        let mut cache = self.write_names();
        let mut added = 0;

        for (id, name) in names {
            if let Entry::Vacant(entry) = cache.entry(id) {
                entry.insert(name);
                added += 1;
            }
        }

        added
    }

    fn read_names(&self) -> RwLockReadGuard<'_, HashMap<EntityId, String>> {
        self.state
            .names
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_names(&self) -> RwLockWriteGuard<'_, HashMap<EntityId, String>> {
        self.state
            .names
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<L: NameLookup> NameResolver<L> {
    /// Resolves every ID in `request` that is not cached yet.
    ///
    /// Fully cached requests return immediately without a network call. Otherwise a single
    /// batch lookup is issued and its answer merged into the cache. A failed lookup is handed
    /// to the failure policy and never reaches the caller; the cache is left as it was.
    pub async fn resolve(&self, request: &NameRequest) {
        self.resolve_observed(request, || {}, || {}).await;
    }

    /// Same as [`resolve`](Self::resolve), reporting when a batch lookup starts and ends.
    ///
    /// `on_start` runs right before the lookup is issued and `on_finish` once it has been
    /// merged or handed to the failure policy. Neither runs when the request is already
    /// fully cached.
    ///
    /// # Returns
    /// - `true` - A lookup was issued
    /// - `false` - The request short-circuited
    pub async fn resolve_observed(
        &self,
        request: &NameRequest,
        on_start: impl FnOnce(),
        on_finish: impl FnOnce(),
    ) -> bool {
        let Some(lookup_request) = self.build_lookup_request(request) else {
            return false;
        };

        on_start();

        if let Err(e) = self.fetch_and_merge(&lookup_request).await {
            self.failure_policy.on_lookup_failure(&lookup_request, &e);
        }

        on_finish();

        true
    }

    /// Like [`resolve`](Self::resolve) but returns lookup failures to the caller.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of names newly added to the cache, `0` when nothing was requested
    /// - `Err(Error)` - The batch lookup failed, the cache is unchanged
    pub async fn try_resolve(&self, request: &NameRequest) -> Result<usize, Error> {
        match self.build_lookup_request(request) {
            Some(lookup_request) => self.fetch_and_merge(&lookup_request).await,
            None => Ok(0),
        }
    }

    async fn fetch_and_merge(&self, lookup_request: &LookupRequest) -> Result<usize, Error> {
        let _pending = PendingGuard::enter(&self.state.in_flight);

        tracing::debug!(
            id_count = lookup_request.id_count(),
            language = %lookup_request.language,
            "Resolving entity names"
        );

        let response = self.lookup.lookup_names(lookup_request).await?;
        let added = self.merge(response);

        tracing::debug!(added, "Merged resolved entity names");

        Ok(added)
    }
}

/// Marks a lookup as in flight until dropped, on success, error or cancellation alike.
struct PendingGuard<'a>(&'a AtomicUsize);

impl<'a> PendingGuard<'a> {
    fn enter(in_flight: &'a AtomicUsize) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        Self(in_flight)
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
