use leptos::prelude::*;

use crate::context::use_menu;
use crate::views::card::ProductCard;

/// The `#/menu/<slug>` view: search box, category tabs, filtered grid.
///
/// Tab clicks go through [`MenuContext::select_category`], which rewrites
/// the hash; the resulting hashchange drives the actual state transition,
/// so the view stays in lockstep with the URL.
///
/// [`MenuContext::select_category`]: crate::context::MenuContext::select_category
#[component]
pub fn CategoryProductsPage() -> impl IntoView {
    let ctx = use_menu();

    let categories = move || ctx.state.with(|s| s.categories.clone());
    let active = move || ctx.state.with(|s| s.filter.active_category.clone());
    let visible = move || {
        ctx.state.with(|s| {
            s.visible_products()
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };
    let catalog_empty = move || ctx.state.with(|s| s.products.is_empty());

    view! {
        <section>
            <div class="searchbar">
                <input
                    type="text"
                    placeholder="Ürün ara… (örn. simit, pasta, çay)"
                    prop:value=move || ctx.state.with(|s| s.filter.q.clone())
                    on:input=move |ev| ctx.set_search(event_target_value(&ev))
                />
            </div>

            <div class="tabs">
                {move || {
                    let current = active();
                    categories()
                        .into_iter()
                        .map(|category| {
                            let is_active = category == current;
                            let label = category.clone();
                            view! {
                                <button
                                    class=if is_active { "tab active" } else { "tab" }
                                    on:click=move |_| ctx.select_category(&category)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="grid">
                {move || {
                    let items = visible();
                    if items.is_empty() {
                        let message = if catalog_empty() {
                            "Menü yükleniyor ya da henüz ürün yok."
                        } else {
                            "Aramanıza uygun ürün bulunamadı."
                        };
                        view! { <p class="empty-note">{message}</p> }.into_any()
                    } else {
                        items
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}
