//! Generic entity list manager
//!
//! The one pattern every admin screen instantiates: fetch a collection,
//! filter it client-side, mutate single entities, reconcile local state
//! afterward. Screens differ only in their [`ResourceConfig`] and entity
//! type.

use crate::client::{ApiClient, ListQuery};
use crate::diff::diff_allowed;
use crate::filter::{FilterState, filter};
use crate::session::{Notifier, NotifyKind, TracingNotifier};
use market_core::Listable;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Per-entity-type configuration for the list manager
#[derive(Debug, Clone)]
pub struct ResourceConfig {
    /// Endpoint path segment under `/admin/`
    pub path: String,
    /// Human-readable title for the screen
    pub title: String,
}

impl ResourceConfig {
    /// Build a resource configuration
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
        }
    }
}

/// Composes the fetcher, filter engine and mutation dispatcher for one
/// entity type.
///
/// The canonical collection is replaced wholesale on fetch; mutations
/// patch it by identifier or trigger a re-fetch. Failures never clobber
/// prior state: a failed fetch keeps the old collection, a failed save
/// keeps edit mode open.
pub struct ListManager<T> {
    client: ApiClient,
    resource: ResourceConfig,
    notifier: Arc<dyn Notifier>,
    query: ListQuery,
    collection: Vec<T>,
    filter: FilterState,
    loading: bool,
    error: Option<String>,
    dialog_open: bool,
    editing: bool,
}

impl<T> std::fmt::Debug for ListManager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListManager")
            .field("resource", &self.resource.path)
            .field("len", &self.collection.len())
            .field("loading", &self.loading)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> ListManager<T>
where
    T: Listable + Clone + Serialize + DeserializeOwned,
{
    /// Create a manager for one resource
    #[must_use]
    pub fn new(client: ApiClient, resource: ResourceConfig) -> Self {
        Self {
            client,
            resource,
            notifier: Arc::new(TracingNotifier),
            query: ListQuery::default(),
            collection: Vec::new(),
            filter: FilterState::new(),
            loading: false,
            error: None,
            dialog_open: false,
            editing: false,
        }
    }

    /// Replace the default notifier
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Set the pagination parameters used by [`refresh`](Self::refresh)
    pub fn set_query(&mut self, query: ListQuery) {
        self.query = query;
    }

    /// The canonical collection as last fetched
    #[must_use]
    pub fn collection(&self) -> &[T] {
        &self.collection
    }

    /// The filtered view collection, derived on every call
    #[must_use]
    pub fn view(&self) -> Vec<T> {
        filter(&self.collection, &self.filter)
    }

    /// Whether a request is in flight
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// The last operation's error message, if it failed
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the create dialog is open
    #[must_use]
    pub const fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Whether an entity is being edited
    #[must_use]
    pub const fn editing(&self) -> bool {
        self.editing
    }

    /// Open the create dialog
    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    /// Close the create dialog
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    /// Enter edit mode for the current selection
    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    /// Set the search needle
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.set_search(search);
    }

    /// Select a categorical facet value
    pub fn select_facet(&mut self, facet: impl Into<String>, value: impl Into<String>) {
        self.filter.select(facet, value);
    }

    /// Clear a facet back to "all"
    pub fn clear_facet(&mut self, facet: &str) {
        self.filter.clear(facet);
    }

    /// Re-fetch the collection from the backend.
    ///
    /// On success the collection is replaced wholesale and any prior error
    /// is cleared. On failure the collection is left untouched and the
    /// error message is recorded; the loading flag always ends false.
    pub async fn refresh(&mut self) {
        self.loading = true;
        let result = self.client.list::<T>(&self.resource.path, &self.query).await;
        self.loading = false;

        match result {
            Ok(items) => {
                self.collection = items;
                self.error = None;
            }
            Err(e) => {
                let message = e.user_message();
                tracing::error!(resource = %self.resource.path, "fetch failed: {e}");
                self.error = Some(message);
            }
        }
    }

    /// Create an entity; on success append it to the collection and close
    /// the creation dialog.
    pub async fn create(&mut self, payload: &impl Serialize) {
        match self.client.create::<T>(&self.resource.path, payload).await {
            Ok(entity) => {
                self.collection.push(entity);
                self.dialog_open = false;
                self.error = None;
                self.notifier
                    .notify(NotifyKind::Success, &format!("{} created", self.resource.title));
            }
            Err(e) => {
                let message = e.user_message();
                self.notifier.notify(NotifyKind::Error, &message);
                self.error = Some(message);
            }
        }
    }

    /// Save an edited entity by PUTting only the allow-listed fields that
    /// changed.
    ///
    /// An empty diff is a no-op success: edit mode closes and no request
    /// is issued. Returns whether a request was sent. A failed save keeps
    /// edit mode open so the operator can retry.
    pub async fn update(&mut self, original: &T, edited: &T, allowed: &[&str]) -> bool {
        let changes = match diff_allowed(original, edited, allowed) {
            Ok(changes) => changes,
            Err(e) => {
                self.error = Some(e.user_message());
                return false;
            }
        };

        if changes.is_empty() {
            self.editing = false;
            return false;
        }

        match self
            .client
            .update::<T>(&self.resource.path, original.id(), &changes)
            .await
        {
            Ok(_) => {
                self.editing = false;
                self.error = None;
                self.notifier
                    .notify(NotifyKind::Success, &format!("{} updated", self.resource.title));
                self.refresh().await;
            }
            Err(e) => {
                let message = e.user_message();
                self.notifier.notify(NotifyKind::Error, &message);
                self.error = Some(message);
            }
        }

        true
    }

    /// Delete an entity by identifier; on success remove exactly the
    /// matching element from the collection.
    pub async fn delete(&mut self, id: &str) {
        match self.client.delete(&self.resource.path, id).await {
            Ok(()) => {
                self.collection.retain(|entity| entity.id() != id);
                self.error = None;
                self.notifier
                    .notify(NotifyKind::Success, &format!("{} deleted", self.resource.title));
            }
            Err(e) => {
                let message = e.user_message();
                self.notifier.notify(NotifyKind::Error, &message);
                self.error = Some(message);
            }
        }
    }
}
