use crate::catalog::{FilterState, Product};
use crate::filter::visible_products;
use crate::order::{distinct_categories, resolve_order};
use crate::route::{parse_hash, Route};

/// External events driving the session. Handlers run to completion one at a
/// time, so a selection-driven hash rewrite and its hashchange re-entry are
/// two back-to-back steps, never interleaved.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Catalog fetch completed. Replaces the product list wholesale and
    /// recomputes the category order. Never fires on a failed fetch; the
    /// state simply stays in its empty default.
    CatalogLoaded(Vec<Product>),
    /// The location hash changed, by click, direct entry, or back/forward.
    HashChanged(String),
    /// A search keystroke.
    SearchInput(String),
}

/// The whole client-side session: the loaded catalog, its resolved category
/// order, the current filter, and the current view. Single-writer; the only
/// way to change it is [`MenuState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    pub products: Vec<Product>,
    /// Resolved category order, sentinel first. `["Tümü"]` until the
    /// catalog loads.
    pub categories: Vec<String>,
    pub filter: FilterState,
    pub route: Route,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            categories: resolve_order(&[]),
            filter: FilterState::default(),
            route: Route::default(),
        }
    }
}

impl MenuState {
    /// Run one event to completion.
    ///
    /// `HashChanged` is the only writer of `filter.active_category`, and
    /// every entry into a `CategoryProducts` route re-derives it from the
    /// URL. A value left behind by a grid, home, or contact route therefore
    /// never leaks into a product view, which is what makes the sentinel
    /// selection (a plain rewrite to `#/menu`) safe.
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::CatalogLoaded(items) => {
                self.categories = resolve_order(&distinct_categories(&items));
                self.products = items;
            }
            AppEvent::HashChanged(hash) => {
                let route = parse_hash(&hash, &self.categories);
                if let Route::CategoryProducts(category) = &route {
                    self.filter.active_category = category.clone();
                }
                self.route = route;
            }
            AppEvent::SearchInput(text) => {
                // Kept as typed; the filter engine folds case when matching.
                self.filter.q = text;
            }
        }
    }

    /// Products visible under the current filter, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        visible_products(&self.products, &self.filter)
    }
}
