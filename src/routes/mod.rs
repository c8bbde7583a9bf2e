pub mod auth;
pub mod contact;
pub mod owners;
pub mod properties;
pub mod tenants;

use axum::routing::{get, post, put};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Generic accounts
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        // Property owners
        .route("/property-owners/register", post(owners::register))
        .route("/property-owners/login", post(owners::login))
        .route("/property-owners", get(owners::list).post(owners::create))
        .route(
            "/property-owners/{id}",
            get(owners::get).put(owners::update),
        )
        .route("/current-owner", get(owners::current_owner))
        // Contact-request workflow
        .route(
            "/property-owners/{id}/contact-request",
            post(contact::request),
        )
        .route(
            "/property-owners/{id}/approve-contact-request",
            put(contact::approve),
        )
        // Owner-scoped properties
        .route(
            "/property-owners/{id}/properties",
            get(properties::list_by_owner).post(properties::create_for_owner),
        )
        .route(
            "/property-owners/{id}/properties/{property_id}",
            get(properties::get_for_owner)
                .put(properties::update_for_owner)
                .delete(properties::delete_for_owner),
        )
        // Properties
        .route(
            "/properties",
            get(properties::list).post(properties::create),
        )
        .route(
            "/properties/{id}",
            get(properties::get)
                .put(properties::update)
                .delete(properties::delete),
        )
        // Tenants
        .route("/tenants/register", post(tenants::register))
        .route("/tenants/login", post(tenants::login))
        .route("/tenants", get(tenants::list).post(tenants::create))
        .route("/tenants/{id}", get(tenants::get).put(tenants::update))
}
