//! Registry of admin resources served by the dashboard
//!
//! Each variant binds an endpoint path to its entity type so the generic
//! list handler can decode, filter and re-serialize with the right shape.
//! Adding a screen means adding a variant here — nothing else.

use market_client::{ApiClient, FilterState, ListQuery, filter};
use market_core::types::{
    Banner, Booking, ContentPage, Label, Notification, Order, Product, Transaction, Vendor,
};
use market_core::{Listable, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Entity collections manageable through the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminResource {
    /// Vendor accounts
    Vendors,
    /// Products across all vendors
    Products,
    /// Customer orders
    Orders,
    /// Service bookings
    Bookings,
    /// Promotional banners
    Banners,
    /// Categorization labels
    Labels,
    /// Static content pages
    Pages,
    /// Payment transactions
    Transactions,
    /// Pushed notifications
    Notifications,
}

impl AdminResource {
    /// Every known resource
    pub const ALL: [Self; 9] = [
        Self::Vendors,
        Self::Products,
        Self::Orders,
        Self::Bookings,
        Self::Banners,
        Self::Labels,
        Self::Pages,
        Self::Transactions,
        Self::Notifications,
    ];

    /// Resolve a URL path segment to a resource
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    /// The endpoint path segment under `/admin/`
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Vendors => "vendors",
            Self::Products => "products",
            Self::Orders => "orders",
            Self::Bookings => "bookings",
            Self::Banners => "banners",
            Self::Labels => "labels",
            Self::Pages => "pages",
            Self::Transactions => "transactions",
            Self::Notifications => "notifications",
        }
    }

    /// Fetch this resource's collection from the backend and apply the
    /// filter state with the entity type's own search fields and facets.
    ///
    /// # Errors
    ///
    /// Propagates fetch and envelope errors from the API client.
    pub async fn fetch_filtered(
        self,
        client: &ApiClient,
        query: &ListQuery,
        state: &FilterState,
    ) -> Result<Value> {
        match self {
            Self::Vendors => filtered::<Vendor>(client, self.path(), query, state).await,
            Self::Products => filtered::<Product>(client, self.path(), query, state).await,
            Self::Orders => filtered::<Order>(client, self.path(), query, state).await,
            Self::Bookings => filtered::<Booking>(client, self.path(), query, state).await,
            Self::Banners => filtered::<Banner>(client, self.path(), query, state).await,
            Self::Labels => filtered::<Label>(client, self.path(), query, state).await,
            Self::Pages => filtered::<ContentPage>(client, self.path(), query, state).await,
            Self::Transactions => filtered::<Transaction>(client, self.path(), query, state).await,
            Self::Notifications => {
                filtered::<Notification>(client, self.path(), query, state).await
            }
        }
    }
}

async fn filtered<T>(
    client: &ApiClient,
    path: &str,
    query: &ListQuery,
    state: &FilterState,
) -> Result<Value>
where
    T: Listable + Clone + Serialize + DeserializeOwned,
{
    let collection: Vec<T> = client.list(path, query).await?;
    let view = filter(&collection, state);
    Ok(serde_json::to_value(view)?)
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_path_roundtrips() {
        for resource in AdminResource::ALL {
            assert_eq!(AdminResource::from_path(resource.path()), Some(resource));
        }
    }

    #[test]
    fn test_unknown_path_is_rejected() {
        assert_eq!(AdminResource::from_path("drivers"), None);
        assert_eq!(AdminResource::from_path(""), None);
    }
}
