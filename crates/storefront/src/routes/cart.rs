//! Cart route handlers.
//!
//! Mutations are plain form posts that redirect back to the cart page, so a
//! refresh never repeats them. Every mutation is persisted before the
//! redirect; a storage failure surfaces as a 500 but the in-memory cart keeps
//! the change.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use toyland_core::{ShopSession, ToyId, parse_quantity_input};
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::state::AppState;
use crate::views::{CartView, NavView, Page};

/// Form naming a single toy.
#[derive(Debug, Deserialize)]
pub struct CartItemForm {
    pub toy_id: ToyId,
}

/// Quantity form. The quantity stays a string so bad input can be rejected
/// without failing the whole request.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityForm {
    pub toy_id: ToyId,
    pub quantity: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub nav: NavView,
    pub notice: Option<String>,
    pub cart: CartView,
    /// Set when the confirmation overlay should be shown.
    pub checkout: Option<CartView>,
}

impl CartShowTemplate {
    fn from_session(session: &ShopSession) -> Self {
        let totals = session.totals();
        Self {
            nav: NavView::new(Page::Cart, &totals),
            notice: None,
            cart: CartView::new(session.cart().entries(), &totals),
            checkout: None,
        }
    }
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub nav: NavView,
}

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<impl IntoResponse> {
    state.with_session(|session| CartShowTemplate::from_session(session))
}

/// Add one of a toy to the cart.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<CartItemForm>) -> Result<Redirect> {
    let id = form.toy_id.to_string();
    let added = state.with_session(|session| session.add_to_cart(form.toy_id))??;

    if added.is_some() {
        add_breadcrumb("cart", "Added toy to cart", Some(&[("toy_id", id.as_str())]));
    } else {
        tracing::debug!(toy_id = %id, "Ignoring add for unknown toy");
    }

    Ok(Redirect::to("/cart"))
}

/// Set a line's quantity from the quantity input.
///
/// Anything other than a whole number of at least one is rejected and the
/// cart is left as it was, so the page re-renders the previous value.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateQuantityForm>,
) -> Result<Redirect> {
    let Some(quantity) = parse_quantity_input(&form.quantity) else {
        tracing::debug!(input = %form.quantity, "Rejected quantity input");
        return Ok(Redirect::to("/cart"));
    };

    state.with_session(|session| session.set_quantity(form.toy_id, i64::from(quantity)))??;

    let id = form.toy_id.to_string();
    let quantity = quantity.to_string();
    add_breadcrumb(
        "cart",
        "Updated quantity",
        Some(&[("toy_id", id.as_str()), ("quantity", quantity.as_str())]),
    );

    Ok(Redirect::to("/cart"))
}

/// Remove a line from the cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<CartItemForm>,
) -> Result<Redirect> {
    state.with_session(|session| session.remove_from_cart(form.toy_id))??;

    let id = form.toy_id.to_string();
    add_breadcrumb("cart", "Removed toy from cart", Some(&[("toy_id", id.as_str())]));

    Ok(Redirect::to("/cart"))
}

/// Get cart count badge.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Result<impl IntoResponse> {
    state.with_session(|session| CartCountTemplate {
        nav: NavView::new(Page::Cart, &session.totals()),
    })
}

/// Show the order confirmation over the cart.
///
/// The cart is not cleared; an empty cart shows a notice instead.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Result<impl IntoResponse> {
    state.with_session(|session| {
        let mut page = CartShowTemplate::from_session(session);
        match session.checkout() {
            Ok(summary) => {
                tracing::info!(
                    items = summary.totals.item_count,
                    total = %summary.totals.total,
                    "Checkout confirmed"
                );
                page.checkout = Some(CartView::from(&summary));
            }
            Err(e) => page.notice = Some(e.to_string()),
        }
        page
    })
}
