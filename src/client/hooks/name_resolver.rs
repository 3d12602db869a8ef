use dioxus::prelude::*;

use crate::{
    api::PortalClient,
    model::names::{EntityId, NameRequest},
    service::names::NameResolver,
};

pub type PortalNameResolver = NameResolver<PortalClient>;

/// Resolver shared through the component tree.
///
/// `revision` is bumped after every completed batch so views reading names re-render, and
/// `pending` counts the batches started from hooks so loading indicators show while they run.
#[derive(Clone)]
pub struct NameContext {
    pub resolver: PortalNameResolver,
    revision: Signal<u64>,
    pending: Signal<usize>,
}

impl NameContext {
    /// Same as [`NameResolver::get_name`], subscribing the calling component to cache updates.
    pub fn get_name(&self, id: Option<EntityId>, fallback: Option<&str>) -> String {
        let _ = *self.revision.read();
        self.resolver.get_name(id, fallback)
    }

    /// Whether a batch is in flight, subscribing the calling component to its completion.
    pub fn is_pending(&self) -> bool {
        *self.pending.read() > 0 || self.resolver.is_pending()
    }
}

/// Provides the session's resolver to every descendant component.
///
/// Call once near the application root; `init` runs on the first render only.
pub fn use_name_resolver_provider(init: impl FnOnce() -> PortalNameResolver) -> NameContext {
    let revision = use_signal(|| 0u64);
    let pending = use_signal(|| 0usize);

    use_context_provider(move || NameContext {
        resolver: init(),
        revision,
        pending,
    })
}

pub fn use_name_context() -> NameContext {
    use_context::<NameContext>()
}

pub fn use_name_resolver() -> PortalNameResolver {
    use_name_context().resolver
}

/// Resolves the IDs built by `request` and re-runs whenever signals read inside it change.
///
/// The returned resource completes once the batch has been merged (or has failed and been
/// logged). Components reading through [`NameContext::is_pending`] re-render when the batch
/// starts, and those reading [`NameContext::get_name`] when it lands. Fully cached requests
/// touch neither signal.
pub fn use_resolved_names(mut request: impl FnMut() -> NameRequest + 'static) -> Resource<()> {
    let context = use_name_context();

    use_resource(move || {
        let NameContext {
            resolver,
            mut revision,
            mut pending,
        } = context.clone();
        let request = request();

        async move {
            resolver
                .resolve_observed(
                    &request,
                    move || *pending.write() += 1,
                    move || {
                        *pending.write() -= 1;
                        *revision.write() += 1;
                    },
                )
                .await;
        }
    })
}
