//! Display data for templates.
//!
//! Templates never see core types directly; handlers project session state
//! into these plain structs while holding the session lock.

use toyland_core::{CartEntry, CartTotals, CheckoutSummary, FilterOptions, FilterParams, Toy};

/// Top-level views reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Catalog,
    Cart,
}

/// Navigation bar state.
#[derive(Debug, Clone)]
pub struct NavView {
    pub active: Page,
    /// Badge count: sum of quantities in the cart.
    pub cart_count: u64,
}

impl NavView {
    #[must_use]
    pub const fn new(active: Page, totals: &CartTotals) -> Self {
        Self {
            active,
            cart_count: totals.item_count,
        }
    }

    #[must_use]
    pub fn is_active(&self, page: &str) -> bool {
        let name = match self.active {
            Page::Home => "home",
            Page::Catalog => "catalog",
            Page::Cart => "cart",
        };
        name == page
    }
}

/// A toy as shown on a catalog card.
#[derive(Debug, Clone)]
pub struct ToyCard {
    pub id: String,
    pub name: String,
    pub price: String,
    pub age_range: String,
    pub category: String,
    /// Interests joined with ", "; empty if the toy lists none.
    pub tags: String,
    pub image: Option<String>,
    pub aria_label: String,
}

impl From<&Toy> for ToyCard {
    fn from(toy: &Toy) -> Self {
        Self {
            id: toy.id.to_string(),
            name: toy.name.clone(),
            price: toy.price.to_string(),
            age_range: toy.age_range.to_string(),
            category: toy.category.clone(),
            tags: toy.interests.join(", "),
            image: toy.image.clone(),
            aria_label: format!(
                "{}, {}, age {}, category {}",
                toy.name, toy.price, toy.age_range, toy.category
            ),
        }
    }
}

/// A toy as shown in the detail overlay.
#[derive(Debug, Clone)]
pub struct ToyDetail {
    pub id: String,
    pub name: String,
    pub price: String,
    pub age_range: String,
    pub description: String,
    pub skills: Vec<String>,
    pub safety_notes: Option<String>,
    pub image: Option<String>,
}

impl From<&Toy> for ToyDetail {
    fn from(toy: &Toy) -> Self {
        Self {
            id: toy.id.to_string(),
            name: toy.name.clone(),
            price: toy.price.to_string(),
            age_range: toy.age_range.to_string(),
            description: toy.description.clone(),
            skills: toy.skills.clone(),
            safety_notes: toy.safety_notes().map(str::to_owned),
            image: toy.image.clone(),
        }
    }
}

/// One line of the cart.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub line_total: String,
    pub quantity: u32,
    pub image: Option<String>,
}

impl From<&CartEntry> for CartLineView {
    fn from(entry: &CartEntry) -> Self {
        Self {
            id: entry.toy.id.to_string(),
            name: entry.toy.name.clone(),
            price: entry.toy.price.to_string(),
            line_total: entry.line_total().to_string(),
            quantity: entry.quantity,
            image: entry.toy.image.clone(),
        }
    }
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    /// Total to two decimals, without currency symbol.
    pub total: String,
    pub item_count: u64,
}

impl CartView {
    /// Build from cart entries and their totals.
    pub fn new<'a>(entries: impl Iterator<Item = &'a CartEntry>, totals: &CartTotals) -> Self {
        Self {
            lines: entries.map(CartLineView::from).collect(),
            total: totals.total.fixed(),
            item_count: totals.item_count,
        }
    }
}

impl From<&CheckoutSummary> for CartView {
    fn from(summary: &CheckoutSummary) -> Self {
        Self::new(summary.lines.iter(), &summary.totals)
    }
}

/// An `<option>` in one of the filter selects.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

fn select_options(values: &[String], current: Option<&String>) -> Vec<SelectOption> {
    values
        .iter()
        .map(|value| SelectOption {
            value: value.clone(),
            selected: current == Some(value),
        })
        .collect()
}

/// The filter panel with the current control values filled in.
#[derive(Debug, Clone)]
pub struct FilterPanel {
    pub name: String,
    pub max_price: String,
    pub ages: Vec<SelectOption>,
    pub interests: Vec<SelectOption>,
    pub categories: Vec<SelectOption>,
    pub genders: Vec<SelectOption>,
}

impl FilterPanel {
    #[must_use]
    pub fn new(options: &FilterOptions, params: &FilterParams) -> Self {
        Self {
            name: params.name.clone().unwrap_or_default(),
            max_price: params.max_price.clone().unwrap_or_default(),
            ages: select_options(&options.ages, params.age.as_ref()),
            interests: select_options(&options.interests, params.interest.as_ref()),
            categories: select_options(&options.categories, params.category.as_ref()),
            genders: select_options(&options.genders, params.gender.as_ref()),
        }
    }
}
