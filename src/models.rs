// src/models.rs
// Wire types for the Warungin backend. The server owns every business
// rule; these are read-side mirrors of what it sends, in the
// `{ "data": ... }` envelope with `{ "error": ... }` on non-2xx.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Success envelope wrapping every domain payload.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Non-2xx body carrying the server's human-readable rejection.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Manager,
    Cashier,
    /// Roles this client version does not know about. Treated as having
    /// no permissions anywhere a role gates behavior.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub tenant_id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub name: String,
    /// Empty until onboarding completes; see [`BUSINESS_TYPES`].
    #[serde(default)]
    pub business_type: Option<String>,
    pub email: String,
}

/// `GET /api/v1/auth/me` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Me {
    pub user: User,
    pub tenant: Tenant,
}

/// Business categories offered during onboarding, `(value, label)`.
pub const BUSINESS_TYPES: &[(&str, &str)] = &[
    ("barbershop", "Barbershop"),
    ("salon", "Salon"),
    ("autoshop", "Bengkel"),
    ("laundry", "Laundry"),
    ("fnb", "Makanan & Minuman"),
    ("retail", "Toko Retail"),
    ("other", "Lainnya"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Voided,
    Pending,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionItem {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    /// Unit price in rupiah. IDR has no minor unit.
    pub price: i64,
    pub subtotal: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub invoice_number: String,
    pub status: TransactionStatus,
    pub total: i64,
    /// Opaque method string: "cash", "qris", ...
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<TransactionItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMaterial {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub unit_price: i64,
    pub stock_qty: f64,
    #[serde(default)]
    pub min_stock_level: Option<f64>,
    #[serde(default)]
    pub supplier: Option<String>,
}

/// Low/out-of-stock buckets from `GET /api/v1/materials/alerts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaterialAlerts {
    #[serde(default)]
    pub low_stock: Vec<RawMaterial>,
    #[serde(default)]
    pub out_of_stock: Vec<RawMaterial>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InventoryItem {
    pub product_id: String,
    pub product_name: String,
    pub stock_qty: i64,
    /// "ok", "low" or "out".
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InventorySummary {
    pub total_products: u64,
    pub low_stock: u64,
    pub out_of_stock: u64,
    pub total_value: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Outlet {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutletStats {
    pub transaction_count: u64,
    pub total_sales: i64,
    pub staff_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub outlet_id: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SalesSummary {
    pub total_sales: i64,
    pub transaction_count: u64,
    pub items_sold: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Subscription {
    pub plan: String,
    pub status: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub outlet_limit: u32,
    pub staff_limit: u32,
}

/// Void/checkout trail shown to managers and owners.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionAuditLog {
    pub id: String,
    pub transaction_id: String,
    pub action: String,
    pub performed_by: String,
    #[serde(default)]
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityLog {
    pub id: String,
    pub staff_name: String,
    pub action: String,
    pub created_at: DateTime<Utc>,
}
