use contracts::{hash_for_category, slugify, ALL_CATEGORY};
use leptos::prelude::*;

use crate::context::use_menu;

/// The `#/menu` view: one card per category, in resolved order, each
/// linking to its `#/menu/<slug>` product list. The sentinel gets no card.
#[component]
pub fn CategoryGridPage() -> impl IntoView {
    let ctx = use_menu();

    let categories = move || {
        ctx.state.with(|s| {
            s.categories
                .iter()
                .filter(|c| c.as_str() != ALL_CATEGORY)
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="cat-grid" aria-label="Kategoriler">
            {move || {
                categories()
                    .into_iter()
                    .map(|category| {
                        let slug = slugify(&category);
                        view! {
                            <a
                                class="cat-card"
                                style=format!("--bg:url('public/assets/cats/{slug}.jpg')")
                                href=hash_for_category(&category)
                            >
                                <span>{category.to_uppercase()}</span>
                            </a>
                        }
                    })
                    .collect_view()
            }}
        </section>
    }
}
