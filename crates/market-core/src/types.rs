//! Core data types for the marketplace admin dashboard
//!
//! Every entity mirrors the backend's representation: an opaque string
//! identifier, creation/update timestamps, and one or more status-like
//! discriminators. The [`Listable`] trait is what makes the generic list
//! manager work over all of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Opaque entity identifier as issued by the backend
pub type EntityId = String;

/// Order status enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Placed, not yet confirmed by the vendor
    Pending,
    /// Confirmed by the vendor
    Confirmed,
    /// Being prepared
    Processing,
    /// Handed to the courier
    Shipped,
    /// Fulfilled and paid
    Completed,
    /// Delivered to the customer
    Delivered,
    /// Cancelled by either side
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Confirmed => write!(f, "CONFIRMED"),
            Self::Processing => write!(f, "PROCESSING"),
            Self::Shipped => write!(f, "SHIPPED"),
            Self::Completed => write!(f, "COMPLETED"),
            Self::Delivered => write!(f, "DELIVERED"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// Vendor account status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VendorStatus {
    /// Registered, awaiting approval
    Pending,
    /// Active on the platform
    Approved,
    /// Temporarily disabled by an administrator
    Suspended,
    /// Application rejected
    Rejected,
}

impl Default for VendorStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Approved => write!(f, "APPROVED"),
            Self::Suspended => write!(f, "SUSPENDED"),
            Self::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// Payment method used for an order or transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    /// Cash on delivery
    Cash,
    /// Card payment
    Card,
    /// Platform wallet balance
    Wallet,
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cash => write!(f, "CASH"),
            Self::Card => write!(f, "CARD"),
            Self::Wallet => write!(f, "WALLET"),
        }
    }
}

/// Transaction settlement status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// Initiated, awaiting settlement
    Pending,
    /// Settled successfully
    Success,
    /// Settlement failed
    Failed,
    /// Refunded to the customer
    Refunded,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Success => write!(f, "SUCCESS"),
            Self::Failed => write!(f, "FAILED"),
            Self::Refunded => write!(f, "REFUNDED"),
        }
    }
}

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Requested, awaiting confirmation
    Pending,
    /// Confirmed for the scheduled slot
    Confirmed,
    /// Carried out
    Completed,
    /// Cancelled
    Cancelled,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Confirmed => write!(f, "CONFIRMED"),
            Self::Completed => write!(f, "COMPLETED"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// A vendor registered on the platform
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Vendor {
    /// Unique identifier
    pub id: EntityId,

    /// Display name of the shop
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Contact email
    #[validate(email)]
    pub email: String,

    /// Contact phone number
    pub phone: Option<String>,

    /// Account status
    pub status: VendorStatus,

    /// When the vendor registered
    pub created_at: DateTime<Utc>,

    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// A product offered by a vendor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Product {
    /// Unique identifier
    pub id: EntityId,

    /// Owning vendor
    pub vendor_id: EntityId,

    /// Product name
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Free-form description
    pub description: Option<String>,

    /// Unit price in the platform currency
    #[validate(range(min = 0.0))]
    pub price: f64,

    /// Whether the product is visible to customers
    pub available: bool,

    /// When the product was created
    pub created_at: DateTime<Utc>,

    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// A customer order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier
    pub id: EntityId,

    /// Customer display name
    pub customer_name: String,

    /// Vendor fulfilling the order
    pub vendor_id: EntityId,

    /// Current status as last fetched; transitions happen server-side
    pub status: OrderStatus,

    /// Payment method
    pub payment: PaymentType,

    /// Order total in the platform currency
    pub total: f64,

    /// When the order was placed
    pub created_at: DateTime<Utc>,

    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl Default for Order {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            customer_name: String::new(),
            vendor_id: String::new(),
            status: OrderStatus::default(),
            payment: PaymentType::Cash,
            total: 0.0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A service booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier
    pub id: EntityId,

    /// Customer display name
    pub customer_name: String,

    /// Booked service description
    pub service: String,

    /// Current status
    pub status: BookingStatus,

    /// Scheduled slot
    pub scheduled_at: DateTime<Utc>,

    /// When the booking was requested
    pub created_at: DateTime<Utc>,

    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// A promotional banner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    /// Unique identifier
    pub id: EntityId,
    /// Banner headline
    pub title: String,
    /// Image location served by the backend
    pub image_url: String,
    /// Whether the banner is currently shown
    pub active: bool,
    /// When the banner was created
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// A categorization label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Unique identifier
    pub id: EntityId,
    /// Label text
    pub name: String,
    /// Display color (hex or named)
    pub color: String,
    /// When the label was created
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// A static content page (terms, about, FAQ)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPage {
    /// Unique identifier
    pub id: EntityId,
    /// URL slug
    pub slug: String,
    /// Page title
    pub title: String,
    /// Page body (HTML or markdown, backend-owned)
    pub body: String,
    /// Whether the page is publicly visible
    pub published: bool,
    /// When the page was created
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// A payment transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: EntityId,
    /// Order this transaction settles
    pub order_id: EntityId,
    /// Amount in the platform currency
    pub amount: f64,
    /// Settlement status
    pub status: TransactionStatus,
    /// Payment method
    pub payment: PaymentType,
    /// When the transaction was initiated
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// A notification pushed to platform users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier
    pub id: EntityId,
    /// Notification title
    pub title: String,
    /// Notification body
    pub body: String,
    /// Target audience (e.g. "vendors", "customers", "all")
    pub audience: String,
    /// When the notification was sent
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// Behavior every listable entity exposes to the generic list manager.
///
/// `search_text` returns the fixed set of fields the search box matches
/// against; `facet` exposes the discrete discriminators a categorical
/// filter can select on.
pub trait Listable {
    /// Stable identifier, unique within a fetched collection
    fn id(&self) -> &str;

    /// Text fields the search predicate is OR'd over
    fn search_text(&self) -> Vec<&str>;

    /// Discrete discriminator value for a named facet, if the entity has one
    fn facet(&self, name: &str) -> Option<String> {
        let _ = name;
        None
    }
}

impl Listable for Vendor {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }
}

impl Listable for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(description) = &self.description {
            fields.push(description.as_str());
        }
        fields
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            "available" => Some(self.available.to_string()),
            _ => None,
        }
    }
}

impl Listable for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.customer_name, &self.id]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.to_string()),
            "payment" => Some(self.payment.to_string()),
            _ => None,
        }
    }
}

impl Listable for Booking {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.customer_name, &self.service]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }
}

impl Listable for Banner {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.title]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            "active" => Some(self.active.to_string()),
            _ => None,
        }
    }
}

impl Listable for Label {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name]
    }
}

impl Listable for ContentPage {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.slug, &self.title]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            "published" => Some(self.published.to_string()),
            _ => None,
        }
    }
}

impl Listable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.id, &self.order_id]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.to_string()),
            "payment" => Some(self.payment.to_string()),
            _ => None,
        }
    }
}

impl Listable for Notification {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.body]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            "audience" => Some(self.audience.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(OrderStatus::Pending, "\"PENDING\"")]
    #[case(OrderStatus::Confirmed, "\"CONFIRMED\"")]
    #[case(OrderStatus::Processing, "\"PROCESSING\"")]
    #[case(OrderStatus::Shipped, "\"SHIPPED\"")]
    #[case(OrderStatus::Completed, "\"COMPLETED\"")]
    #[case(OrderStatus::Delivered, "\"DELIVERED\"")]
    #[case(OrderStatus::Cancelled, "\"CANCELLED\"")]
    fn test_order_status_wire_format(#[case] status: OrderStatus, #[case] wire: &str) {
        assert_eq!(serde_json::to_string(&status).unwrap(), wire);
        let back: OrderStatus = serde_json::from_str(wire).unwrap();
        assert_eq!(back, status);
    }

    #[test]
    fn test_status_display_matches_wire_format() {
        assert_eq!(OrderStatus::Completed.to_string(), "COMPLETED");
        assert_eq!(VendorStatus::Approved.to_string(), "APPROVED");
        assert_eq!(PaymentType::Wallet.to_string(), "WALLET");
        assert_eq!(TransactionStatus::Refunded.to_string(), "REFUNDED");
        assert_eq!(BookingStatus::Cancelled.to_string(), "CANCELLED");
    }

    #[test]
    fn test_order_deserializes_from_backend_shape() {
        let json = r#"{
            "id": "ord-1",
            "customer_name": "Alice",
            "vendor_id": "ven-9",
            "status": "PENDING",
            "payment": "CARD",
            "total": 42.5,
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:05:00Z"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, "ord-1");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment, PaymentType::Card);
        assert!((order.total - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_order_search_text_and_facets() {
        let order = Order {
            id: "ord-7".to_string(),
            customer_name: "Bob".to_string(),
            status: OrderStatus::Shipped,
            payment: PaymentType::Cash,
            ..Order::default()
        };

        assert_eq!(order.search_text(), vec!["Bob", "ord-7"]);
        assert_eq!(order.facet("status"), Some("SHIPPED".to_string()));
        assert_eq!(order.facet("payment"), Some("CASH".to_string()));
        assert_eq!(order.facet("color"), None);
    }

    #[test]
    fn test_product_search_text_includes_description_when_present() {
        let now = Utc::now();
        let mut product = Product {
            id: "p-1".to_string(),
            vendor_id: "v-1".to_string(),
            name: "Margherita".to_string(),
            description: Some("Tomato and basil".to_string()),
            price: 9.5,
            available: true,
            created_at: now,
            updated_at: now,
        };

        assert_eq!(product.search_text(), vec!["Margherita", "Tomato and basil"]);

        product.description = None;
        assert_eq!(product.search_text(), vec!["Margherita"]);
    }

    #[test]
    fn test_vendor_validation() {
        let now = Utc::now();
        let vendor = Vendor {
            id: "v-1".to_string(),
            name: "Luigi's".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
            status: VendorStatus::Approved,
            created_at: now,
            updated_at: now,
        };

        assert!(validator::Validate::validate(&vendor).is_err());
    }

    #[test]
    fn test_label_has_no_facets() {
        let now = Utc::now();
        let label = Label {
            id: "l-1".to_string(),
            name: "spicy".to_string(),
            color: "#ff0000".to_string(),
            created_at: now,
            updated_at: now,
        };

        assert_eq!(label.facet("status"), None);
        assert_eq!(label.search_text(), vec!["spicy"]);
    }
}
