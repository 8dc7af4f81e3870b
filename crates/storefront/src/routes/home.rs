//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;
use crate::views::{NavView, Page, ToyCard};

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub nav: NavView,
    pub notice: Option<String>,
    /// The first toys of the catalog.
    pub featured: Vec<ToyCard>,
    /// Category shortcut buttons.
    pub categories: Vec<String>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let (nav, featured) = state.with_session(|session| {
        (
            NavView::new(Page::Home, &session.totals()),
            session.featured().map(ToyCard::from).collect::<Vec<_>>(),
        )
    })?;

    Ok(HomeTemplate {
        nav,
        notice: state.catalog_notice().map(str::to_owned),
        featured,
        categories: state.filter_options().categories.clone(),
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use toyland_core::{MemoryStore, ShopSession};

    use super::*;
    use crate::catalog::CATALOG_UNAVAILABLE;
    use crate::routes::test_support::{body_text, get, state};

    #[tokio::test]
    async fn test_home_lists_featured_and_categories() {
        let state = state();
        let response = get(&state, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains("Rainbow Blocks"));
        assert!(body.contains("Plush Bear"));
        assert!(body.contains("/catalog/category/STEM"));
        assert!(!body.contains(CATALOG_UNAVAILABLE));
    }

    #[tokio::test]
    async fn test_home_shows_catalog_notice() {
        let session = ShopSession::new(Vec::new(), MemoryStore::new());
        let state = AppState::new(session, Some(CATALOG_UNAVAILABLE.to_string()));

        let body = body_text(get(&state, "/").await).await;
        assert!(body.contains(CATALOG_UNAVAILABLE));
    }
}
