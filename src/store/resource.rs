//! Generic store for a flat REST collection.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use tutordesk_cache::CountCache;
use tutordesk_core::AppError;
use tutordesk_models::Resource;

use crate::api::ApiClient;
use crate::state::AppState;
use crate::store::state::ListState;

/// Shared handle over the local state of one resource.
///
/// Every operation talks to the server first and touches local state only
/// once the server has answered. The lock is taken after the `.await`, so a
/// response is always applied to the latest state rather than to the state
/// seen when the request started.
pub struct ResourceStore<R: Resource> {
    client: ApiClient,
    counts: Option<CountCache>,
    state: Arc<RwLock<ListState<R>>>,
}

impl<R: Resource> Clone for ResourceStore<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            counts: self.counts.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<R: Resource> std::fmt::Debug for ResourceStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("ResourceStore")
            .field("resource", &R::PATH)
            .field("items", &state.items.len())
            .field("error", &state.error)
            .finish()
    }
}

impl<R: Resource> ResourceStore<R> {
    pub fn new(client: ApiClient, counts: Option<CountCache>) -> Self {
        Self {
            client,
            counts,
            state: Arc::new(RwLock::new(ListState::default())),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.client.clone(), Some(state.counts.clone()))
    }

    /// Starts from `items` as if they had just been loaded.
    pub fn with_items(self, items: Vec<R>) -> Self {
        *self.state.write() = ListState::with_items(items);
        self
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn snapshot(&self) -> ListState<R> {
        self.state.read().clone()
    }

    pub fn items(&self) -> Arc<Vec<R>> {
        Arc::clone(&self.state.read().items)
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn find(&self, id: R::Id) -> Option<R> {
        self.state.read().items.iter().find(|r| r.id() == id).cloned()
    }

    /// Fetches the collection and replaces local state with it.
    #[instrument(skip(self, filters), fields(resource = R::PATH))]
    pub async fn load<F>(&self, filters: &F) -> Result<Arc<Vec<R>>, AppError>
    where
        F: Serialize + ?Sized,
    {
        self.state.write().loading = true;

        match self.client.list::<R, F>(R::PATH, filters).await {
            Ok(page) => {
                debug!(count = page.items.len(), total = ?page.total, "Loaded records");
                let items = Arc::new(page.items);
                let mut state = self.state.write();
                state.items = Arc::clone(&items);
                state.loading = false;
                state.loaded = true;
                state.error = None;
                Ok(items)
            }
            Err(err) => {
                self.state.write().loading = false;
                Err(self.fail(err, "load"))
            }
        }
    }

    /// Fetches one record and refreshes its local copy if present.
    #[instrument(skip(self), fields(resource = R::PATH))]
    pub async fn get(&self, id: R::Id) -> Result<R, AppError> {
        let record: R = self
            .client
            .get(&Self::record_path(id))
            .await
            .map_err(|err| self.fail(err, "get"))?;

        self.apply(|items| {
            let idx = items.iter().position(|r| r.id() == id)?;
            let mut next = items.to_vec();
            next[idx] = record.clone();
            Some(next)
        });
        Ok(record)
    }

    /// POSTs `dto` and appends the server's record.
    #[instrument(skip(self, dto), fields(resource = R::PATH))]
    pub async fn create<D>(&self, dto: &D) -> Result<R, AppError>
    where
        D: Serialize + ?Sized,
    {
        let record: R = self
            .client
            .post(R::PATH, dto)
            .await
            .map_err(|err| self.fail(err, "create"))?;

        debug!(id = %record.id(), "Created {}", R::LABEL);
        self.apply(|items| {
            let mut next = items.to_vec();
            next.push(record.clone());
            Some(next)
        });
        self.invalidate_counts();
        Ok(record)
    }

    /// PUTs `patch` and replaces the local record with the server's.
    #[instrument(skip(self, patch), fields(resource = R::PATH))]
    pub async fn update<D>(&self, id: R::Id, patch: &D) -> Result<R, AppError>
    where
        D: Serialize + ?Sized,
    {
        let record: R = self
            .client
            .put(&Self::record_path(id), patch)
            .await
            .map_err(|err| self.fail(err, "update"))?;

        self.apply(|items| {
            Some(
                items
                    .iter()
                    .map(|r| if r.id() == id { record.clone() } else { r.clone() })
                    .collect(),
            )
        });
        self.invalidate_counts();
        Ok(record)
    }

    #[instrument(skip(self), fields(resource = R::PATH))]
    pub async fn remove(&self, id: R::Id) -> Result<(), AppError> {
        self.client
            .delete(&Self::record_path(id))
            .await
            .map_err(|err| self.fail(err, "remove"))?;

        self.apply(|items| Some(items.iter().filter(|r| r.id() != id).cloned().collect()));
        self.invalidate_counts();
        Ok(())
    }

    fn record_path(id: R::Id) -> String {
        format!("{}/{}", R::PATH, id)
    }

    /// Swaps in the list returned by `f` and clears the error.
    ///
    /// When `f` returns `None` the items keep their allocation; the error is
    /// still cleared since the request itself succeeded.
    pub(crate) fn apply(&self, f: impl FnOnce(&[R]) -> Option<Vec<R>>) {
        let mut state = self.state.write();
        if let Some(next) = f(&state.items) {
            state.items = Arc::new(next);
        }
        state.error = None;
    }

    /// Records `err` for the view and hands it back to the caller.
    pub(crate) fn fail(&self, err: AppError, operation: &'static str) -> AppError {
        warn!(
            resource = R::PATH,
            operation,
            status = ?err.status,
            error = %err,
            "Store operation failed"
        );
        self.state.write().error = Some(err.user_message());
        err
    }

    pub(crate) fn invalidate_counts(&self) {
        if let Some(counts) = &self.counts {
            counts.invalidate_quietly(R::PATH);
        }
    }

    pub(crate) fn invalidate_counts_of(&self, resource: &str) {
        if let Some(counts) = &self.counts {
            counts.invalidate_quietly(resource);
        }
    }
}
