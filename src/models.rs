//! Domain models for orders and products.
//!
//! These mirror the store's REST payloads. Orders arrive as JSON from the
//! orders endpoint; the product types feed the settings screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    #[serde(rename = "on-hold")]
    OnHold,
    Completed,
    Cancelled,
    Refunded,
    Failed,
}

impl OrderStatus {
    /// Wire value used in REST query parameters.
    pub fn as_query(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::OnHold => "on-hold",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
            OrderStatus::Failed => "failed",
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    /// Parse the wire form, e.g. `"processing"` or `"on-hold"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "on-hold" => Ok(OrderStatus::OnHold),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            "refunded" => Ok(OrderStatus::Refunded),
            "failed" => Ok(OrderStatus::Failed),
            other => Err(format!("unknown order status: {}", other)),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Pending => "Pending payment",
            OrderStatus::Processing => "Processing",
            OrderStatus::OnHold => "On hold",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Refunded => "Refunded",
            OrderStatus::Failed => "Failed",
        };
        write!(f, "{}", label)
    }
}

/// A single order as returned by the orders endpoint.
///
/// Monetary amounts are kept as strings; the store serializes totals
/// as decimal strings and we never do arithmetic on them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order ID
    pub id: i64,
    /// Human-facing order number (usually the ID, but plugins can override)
    #[serde(default)]
    pub number: String,
    /// Current order status
    pub status: OrderStatus,
    /// Note left by the customer at checkout
    #[serde(default)]
    pub customer_note: Option<String>,
    /// Grand total as a decimal string
    #[serde(default)]
    pub total: String,
    /// ISO 4217 currency code
    #[serde(default)]
    pub currency: String,
    /// When the order was placed
    #[serde(default = "Utc::now")]
    pub date_created: DateTime<Utc>,
}

impl Order {
    /// Create an order with the given identity and status.
    pub fn new(id: i64, number: impl Into<String>, status: OrderStatus) -> Self {
        Self {
            id,
            number: number.into(),
            status,
            customer_note: None,
            total: String::new(),
            currency: String::new(),
            date_created: Utc::now(),
        }
    }

    /// Set the order total and currency.
    pub fn with_total(mut self, total: impl Into<String>, currency: impl Into<String>) -> Self {
        self.total = total.into();
        self.currency = currency.into();
        self
    }

    /// Formatted total for display, e.g. "29.35 USD".
    pub fn total_display(&self) -> String {
        if self.currency.is_empty() {
            self.total.clone()
        } else {
            format!("{} {}", self.total, self.currency)
        }
    }
}

/// Product type as defined by the store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Simple,
    Grouped,
    External,
    Variable,
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ProductType::Simple => "Simple product",
            ProductType::Grouped => "Grouped product",
            ProductType::External => "External product",
            ProductType::Variable => "Variable product",
        };
        write!(f, "{}", label)
    }
}

/// Publication status of a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[serde(rename = "publish")]
    Published,
    Draft,
    Pending,
    Private,
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ProductStatus::Published => "Published",
            ProductStatus::Draft => "Draft",
            ProductStatus::Pending => "Pending review",
            ProductStatus::Private => "Privately published",
        };
        write!(f, "{}", label)
    }
}

/// Who can see the product page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProductVisibility {
    Public,
    PasswordProtected,
    Private,
}

impl std::fmt::Display for ProductVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ProductVisibility::Public => "Public",
            ProductVisibility::PasswordProtected => "Password protected",
            ProductVisibility::Private => "Private",
        };
        write!(f, "{}", label)
    }
}

/// Where the product shows up in the storefront.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CatalogVisibility {
    Visible,
    Catalog,
    Search,
    Hidden,
}

impl std::fmt::Display for CatalogVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CatalogVisibility::Visible => "Shop and search results",
            CatalogVisibility::Catalog => "Shop only",
            CatalogVisibility::Search => "Search results only",
            CatalogVisibility::Hidden => "Hidden",
        };
        write!(f, "{}", label)
    }
}

/// Snapshot of a product's settings as shown on the settings screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSettings {
    /// Publication status
    pub status: ProductStatus,
    /// Product page visibility
    pub visibility: ProductVisibility,
    /// Catalog placement
    pub catalog_visibility: CatalogVisibility,
    /// Virtual products skip shipping
    pub virtual_product: bool,
    /// Downloadable products deliver files after purchase
    pub downloadable: bool,
    /// Whether customers can leave reviews
    pub reviews_allowed: bool,
    /// URL slug
    pub slug: String,
    /// Note sent to the customer after purchase
    pub purchase_note: String,
    /// Custom ordering position in the catalog
    pub menu_order: i32,
}

impl Default for ProductSettings {
    fn default() -> Self {
        Self {
            status: ProductStatus::Published,
            visibility: ProductVisibility::Public,
            catalog_visibility: CatalogVisibility::Visible,
            virtual_product: false,
            downloadable: false,
            reviews_allowed: true,
            slug: String::new(),
            purchase_note: String::new(),
            menu_order: 0,
        }
    }
}

impl ProductSettings {
    /// Set the URL slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Mark the product as virtual.
    pub fn with_virtual(mut self, virtual_product: bool) -> Self {
        self.virtual_product = virtual_product;
        self
    }

    /// Mark the product as downloadable.
    pub fn with_downloadable(mut self, downloadable: bool) -> Self {
        self.downloadable = downloadable;
        self
    }
}
