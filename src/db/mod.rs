pub mod accounts;
pub mod owners;
pub mod properties;
pub mod tenants;
