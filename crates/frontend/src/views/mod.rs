pub mod card;
pub mod category_grid;
pub mod contact;
pub mod home;
pub mod products;

use contracts::Route;
use leptos::prelude::*;

use crate::context::use_menu;
use category_grid::CategoryGridPage;
use contact::ContactPage;
use home::HomePage;
use products::CategoryProductsPage;

/// Renders whichever view the current route asks for. The route lives in
/// the menu store and is only ever changed by the hash router, so browser
/// back/forward swap views here with no extra wiring.
#[component]
pub fn RoutedView() -> impl IntoView {
    let ctx = use_menu();

    view! {
        {move || match ctx.state.with(|s| s.route.clone()) {
            Route::Home => view! { <HomePage /> }.into_any(),
            Route::CategoryGrid => view! { <CategoryGridPage /> }.into_any(),
            Route::CategoryProducts(_) => view! { <CategoryProductsPage /> }.into_any(),
            Route::Contact => view! { <ContactPage /> }.into_any(),
        }}
    }
}
