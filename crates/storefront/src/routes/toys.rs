//! Toy detail route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use toyland_core::ToyId;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::views::{NavView, Page, ToyDetail};

/// Toy detail overlay template.
#[derive(Template, WebTemplate)]
#[template(path = "toys/show.html")]
pub struct ToyShowTemplate {
    pub nav: NavView,
    pub notice: Option<String>,
    pub toy: ToyDetail,
}

/// Display one toy over the catalog.
///
/// An ID that is not in the catalog sends the shopper back to the catalog.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let id: ToyId = id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid toy id: {id}")))?;

    let page = state.with_session(|session| {
        session.toy(id).map(|toy| ToyShowTemplate {
            nav: NavView::new(Page::Catalog, &session.totals()),
            notice: None,
            toy: ToyDetail::from(toy),
        })
    })?;

    Ok(match page {
        Some(page) => page.into_response(),
        None => {
            tracing::debug!(%id, "Toy not in catalog");
            Redirect::to("/catalog").into_response()
        }
    })
}
