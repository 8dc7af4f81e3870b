//! Catalog route handlers.
//!
//! The filter lives in the session, not the URL: submitting the filter form
//! replaces it, while a bare `/catalog` shows whatever was last applied.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use toyland_core::{FilterParams, ShopSession};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;
use crate::views::{FilterPanel, NavView, Page, ToyCard};

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/index.html")]
pub struct CatalogTemplate {
    pub nav: NavView,
    pub notice: Option<String>,
    pub filters: FilterPanel,
    pub toys: Vec<ToyCard>,
}

impl CatalogTemplate {
    fn from_session(state: &AppState, session: &ShopSession) -> Self {
        Self {
            nav: NavView::new(Page::Catalog, &session.totals()),
            notice: state.catalog_notice().map(str::to_owned),
            filters: FilterPanel::new(state.filter_options(), session.filter_params()),
            toys: session.filtered().map(ToyCard::from).collect(),
        }
    }
}

/// Display the catalog, applying the filter form if it was submitted.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<impl IntoResponse> {
    state.with_session(|session| {
        if !params.is_absent() {
            let shown = session.apply_filter(params);
            tracing::debug!(shown, "Filter applied");
        }
        CatalogTemplate::from_session(&state, session)
    })
}

/// Filter the catalog down to one category.
#[instrument(skip(state))]
pub async fn category(State(state): State<AppState>, Path(name): Path<String>) -> Result<Redirect> {
    state.with_session(|session| session.filter_by_category(&name))?;
    Ok(Redirect::to("/catalog"))
}

/// Clear every filter.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Result<Redirect> {
    state.with_session(ShopSession::clear_filters)?;
    Ok(Redirect::to("/catalog"))
}
