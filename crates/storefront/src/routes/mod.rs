//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Home page (featured toys, categories)
//!
//! # Catalog
//! GET  /catalog                   - Catalog; query params apply the filters
//! GET  /catalog/category/{name}   - Filter by a single category
//! POST /catalog/clear             - Clear all filters
//!
//! # Toys
//! GET  /toys/{id}                 - Toy detail overlay
//!
//! # Cart
//! GET  /cart                      - Cart page
//! POST /cart/add                  - Add one of a toy
//! POST /cart/update               - Set a line quantity
//! POST /cart/remove               - Remove a line
//! GET  /cart/count                - Cart count badge (fragment)
//! POST /cart/checkout             - Order confirmation overlay
//! ```

pub mod cart;
pub mod catalog;
pub mod home;
pub mod toys;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/category/{name}", get(catalog::category))
        .route("/clear", post(catalog::clear))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
        .route("/checkout", post(cart::checkout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/catalog", catalog_routes())
        .route("/toys/{id}", get(toys::show))
        .nest("/cart", cart_routes())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    use axum::{
        Router,
        body::Body,
        http::{Request, Response, header},
    };
    use tower::ServiceExt;
    use toyland_core::{MemoryStore, ShopSession};

    use crate::catalog::parse_catalog;
    use crate::state::AppState;

    pub const CATALOG: &str = r#"[
        {"id": 1, "name": "Rainbow Blocks", "price": 10, "ageRange": "3-5",
         "category": "Building", "interests": ["Creativity"], "gender": "Unisex",
         "description": "Chunky wooden blocks.", "skills": ["Fine motor"]},
        {"id": 2, "name": "Robot Kit", "price": 25, "ageRange": "13+",
         "category": "STEM", "interests": ["Coding"], "gender": "Unisex",
         "description": "Build and program a rover.", "safetyNotes": "Small parts"},
        {"id": 3, "name": "Plush Bear", "price": 12.5, "ageRange": "0-2",
         "category": "Plush", "interests": ["Comfort"], "gender": "Unisex"}
    ]"#;

    pub fn state() -> AppState {
        let session = ShopSession::new(parse_catalog(CATALOG).unwrap(), MemoryStore::new());
        AppState::new(session, None)
    }

    pub fn app(state: &AppState) -> Router {
        super::routes().with_state(state.clone())
    }

    pub async fn get(state: &AppState, uri: &str) -> Response<Body> {
        app(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_form(state: &AppState, uri: &str, form: &str) -> Response<Body> {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_owned()))
            .unwrap();
        app(state).oneshot(request).await.unwrap()
    }

    pub async fn body_text(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    pub fn location(response: &Response<Body>) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
    }
}
