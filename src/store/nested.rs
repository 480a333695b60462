//! Store for a parent collection whose records embed a child list.
//!
//! Children have their own REST collection but no local list of their own:
//! after every child mutation the matching parent's embedded array is patched
//! in place (linear scan by id, order preserved, no dedup).

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{instrument, warn};
use tutordesk_core::AppError;
use tutordesk_models::{ParentResource, Resource};

use crate::api::ApiClient;
use crate::state::AppState;
use crate::store::resource::ResourceStore;
use crate::store::state::ListState;

pub struct NestedStore<P: ParentResource> {
    parents: ResourceStore<P>,
}

impl<P: ParentResource> Clone for NestedStore<P> {
    fn clone(&self) -> Self {
        Self {
            parents: self.parents.clone(),
        }
    }
}

impl<P: ParentResource> std::fmt::Debug for NestedStore<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NestedStore")
            .field("parents", &self.parents)
            .field("child", &<P::Child as Resource>::PATH)
            .finish()
    }
}

type ChildId<P> = <<P as ParentResource>::Child as Resource>::Id;

impl<P: ParentResource> NestedStore<P> {
    pub fn new(parents: ResourceStore<P>) -> Self {
        Self { parents }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(ResourceStore::from_state(state))
    }

    pub fn with_items(self, items: Vec<P>) -> Self {
        Self {
            parents: self.parents.with_items(items),
        }
    }

    /// The underlying parent store, for parent-level CRUD.
    pub fn parents(&self) -> &ResourceStore<P> {
        &self.parents
    }

    pub fn client(&self) -> &ApiClient {
        self.parents.client()
    }

    pub fn snapshot(&self) -> ListState<P> {
        self.parents.snapshot()
    }

    pub fn items(&self) -> Arc<Vec<P>> {
        self.parents.items()
    }

    pub fn error(&self) -> Option<String> {
        self.parents.error()
    }

    pub fn find(&self, id: P::Id) -> Option<P> {
        self.parents.find(id)
    }

    pub async fn load<F>(&self, filters: &F) -> Result<Arc<Vec<P>>, AppError>
    where
        F: Serialize + ?Sized,
    {
        self.parents.load(filters).await
    }

    pub async fn create<D>(&self, dto: &D) -> Result<P, AppError>
    where
        D: Serialize + ?Sized,
    {
        self.parents.create(dto).await
    }

    pub async fn update<D>(&self, id: P::Id, patch: &D) -> Result<P, AppError>
    where
        D: Serialize + ?Sized,
    {
        self.parents.update(id, patch).await
    }

    pub async fn remove(&self, id: P::Id) -> Result<(), AppError> {
        self.parents.remove(id).await
    }

    /// POSTs a child carrying `PARENT_KEY = parent_id` and appends the
    /// server's record to that parent.
    #[instrument(skip(self, data), fields(parent = %parent_id))]
    pub async fn add_child<D>(&self, parent_id: P::Id, data: &D) -> Result<P::Child, AppError>
    where
        D: Serialize + ?Sized,
    {
        let payload =
            with_parent_key::<P, D>(parent_id, data).map_err(|e| self.fail(e, "add_child"))?;

        let child: P::Child = self
            .client()
            .post(<P::Child as Resource>::PATH, &payload)
            .await
            .map_err(|e| self.fail(e, "add_child"))?;

        self.patch_children(parent_id, |children| children.push(child.clone()));
        self.parents.invalidate_counts_of(<P::Child as Resource>::PATH);
        Ok(child)
    }

    /// PUTs `patch` to the child and swaps the server's record into place.
    #[instrument(skip(self, patch), fields(parent = %parent_id, child = %child_id))]
    pub async fn update_child<D>(
        &self,
        parent_id: P::Id,
        child_id: ChildId<P>,
        patch: &D,
    ) -> Result<P::Child, AppError>
    where
        D: Serialize + ?Sized,
    {
        let child: P::Child = self
            .client()
            .put(&child_path::<P>(child_id), patch)
            .await
            .map_err(|e| self.fail(e, "update_child"))?;

        self.replace_child(parent_id, child.clone());
        self.parents.invalidate_counts_of(<P::Child as Resource>::PATH);
        Ok(child)
    }

    #[instrument(skip(self), fields(parent = %parent_id, child = %child_id))]
    pub async fn remove_child(
        &self,
        parent_id: P::Id,
        child_id: ChildId<P>,
    ) -> Result<(), AppError> {
        self.client()
            .delete(&child_path::<P>(child_id))
            .await
            .map_err(|e| self.fail(e, "remove_child"))?;

        self.patch_children(parent_id, |children| children.retain(|c| c.id() != child_id));
        self.parents.invalidate_counts_of(<P::Child as Resource>::PATH);
        Ok(())
    }

    /// Replaces the child with the same id under `parent_id` by `child`.
    ///
    /// Used when a child comes back from an endpoint other than its own PUT,
    /// such as a file upload.
    pub fn replace_child(&self, parent_id: P::Id, child: P::Child) {
        let child_id = child.id();
        self.patch_children(parent_id, |children| {
            for slot in children.iter_mut().filter(|c| c.id() == child_id) {
                *slot = child.clone();
            }
        });
    }

    fn patch_children(&self, parent_id: P::Id, f: impl FnOnce(&mut Vec<P::Child>)) {
        self.parents.apply(|parents| {
            let Some(idx) = parents.iter().position(|p| p.id() == parent_id) else {
                warn!(
                    parent = %parent_id,
                    resource = P::PATH,
                    "Parent not in local state, leaving it untouched"
                );
                return None;
            };

            let mut next = parents.to_vec();
            f(next[idx].children_mut());
            Some(next)
        });
    }

    fn fail(&self, err: AppError, operation: &'static str) -> AppError {
        self.parents.fail(err, operation)
    }
}

fn child_path<P: ParentResource>(child_id: ChildId<P>) -> String {
    format!("{}/{}", <P::Child as Resource>::PATH, child_id)
}

/// Serializes `data` and sets `PARENT_KEY` on it, overriding any value the
/// caller put there.
fn with_parent_key<P, D>(parent_id: P::Id, data: &D) -> Result<Value, AppError>
where
    P: ParentResource,
    D: Serialize + ?Sized,
{
    let mut payload = serde_json::to_value(data).map_err(AppError::internal)?;
    let Value::Object(map) = &mut payload else {
        return Err(AppError::internal(anyhow::anyhow!(
            "{} payload must serialize to an object",
            <P::Child as Resource>::LABEL
        )));
    };

    let id = serde_json::to_value(parent_id).map_err(AppError::internal)?;
    map.insert(P::PARENT_KEY.to_string(), id);
    Ok(payload)
}
