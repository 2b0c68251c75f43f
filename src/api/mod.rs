// src/api/mod.rs
// Typed endpoint wrappers, one module per backend resource. Read paths
// swallow transport errors into empty/none sentinels (pages degrade to
// empty-state UI); create/submit paths return the server's own error
// message so forms can show field-level feedback.

pub mod audit;
pub mod auth;
pub mod customers;
pub mod inventory;
pub mod materials;
pub mod outlets;
pub mod products;
pub mod reports;
pub mod staff;
pub mod subscription;
pub mod tenant;
pub mod transactions;

pub use customers::CreateCustomerInput;
pub use materials::CreateMaterialInput;
pub use outlets::CreateOutletInput;
pub use products::CreateProductInput;
pub use staff::{CreateStaffInput, UpdateStaffInput};
pub use tenant::UpdateTenantInput;
pub use transactions::{CheckoutInput, CheckoutItem};
