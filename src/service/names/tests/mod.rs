
use std::sync::{atomic::AtomicBool, Arc, Mutex};

use async_trait::async_trait;

use super::*;
use crate::{
    error::api::ApiError, model::names::NameCategory, service::names::locale::SharedLocale,
};

/// Answers every lookup from a fixed set of names and records the requests it receives.
#[derive(Clone, Default)]
struct RecordingLookup {
    known: Arc<HashMap<EntityId, String>>,
    requests: Arc<Mutex<Vec<LookupRequest>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingLookup {
    fn with_names(names: &[(EntityId, &str)]) -> Self {
        Self {
            known: Arc::new(
                names
                    .iter()
                    .map(|(id, name)| (*id, name.to_string()))
                    .collect(),
            ),
            requests: Arc::default(),
            failing: Arc::default(),
        }
    }

    /// Makes every following lookup fail after being recorded.
    fn start_failing(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn requests(&self) -> Vec<LookupRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl NameLookup for RecordingLookup {
    async fn lookup_names(&self, request: &LookupRequest) -> Result<NamesResponse, Error> {
        self.requests.lock().unwrap().push(request.clone());

        if self.failing.load(Ordering::SeqCst) {
            return Err(rejected());
        }

        let requested = request
            .ids
            .values()
            .flatten()
            .chain(request.esi.iter())
            .copied();

        Ok(NamesResponse(
            requested
                .filter_map(|id| self.known.get(&id).map(|name| (id.to_string(), name.clone())))
                .collect(),
        ))
    }
}

/// Fails every lookup with a rejected-request error.
#[derive(Clone, Default)]
struct FailingLookup {
    calls: Arc<Mutex<usize>>,
}

#[async_trait]
impl NameLookup for FailingLookup {
    async fn lookup_names(&self, _request: &LookupRequest) -> Result<NamesResponse, Error> {
        *self.calls.lock().unwrap() += 1;

        Err(rejected())
    }
}

fn rejected() -> Error {
    ApiError::Rejected {
        path: "/api/v1/sde/names".to_string(),
        code: 500,
        msg: "database unavailable".to_string(),
    }
    .into()
}

/// Records every failure handed to it instead of logging.
#[derive(Clone, Default)]
struct RecordingPolicy {
    failures: Arc<Mutex<Vec<(usize, String)>>>,
}

impl RecordingPolicy {
    fn failures(&self) -> Vec<(usize, String)> {
        self.failures.lock().unwrap().clone()
    }
}

impl LookupFailurePolicy for RecordingPolicy {
    fn on_lookup_failure(&self, request: &LookupRequest, error: &Error) {
        self.failures
            .lock()
            .unwrap()
            .push((request.id_count(), error.to_string()));
    }
}

fn type_ids(ids: &[EntityId]) -> NameRequest {
    NameRequest::new().ids(NameCategory::Type, ids.iter().copied())
}
