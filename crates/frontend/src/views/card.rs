use contracts::{slugify, Product};
use leptos::prelude::*;

use crate::shared::format::format_price;

/// One product tile: image, name, price, optional description.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    // Deterministic placeholder per product, so re-renders don't reshuffle
    // the photos of items that have none.
    let image = product
        .image
        .clone()
        .unwrap_or_else(|| {
            format!(
                "https://picsum.photos/seed/simit-{}/800/600",
                slugify(&product.name)
            )
        });

    view! {
        <article class="card">
            <img src=image alt=product.name.clone() />
            <div class="pad">
                <div class="card-head">
                    <h3>{product.name.clone()}</h3>
                    <div class="price">{format_price(product.price)}</div>
                </div>
                {product.desc.clone().map(|d| view! { <p class="card-desc">{d}</p> })}
            </div>
        </article>
    }
}
