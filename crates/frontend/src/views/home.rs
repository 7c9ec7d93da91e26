use leptos::prelude::*;

use crate::context::use_menu;
use crate::views::card::ProductCard;

const QUICK_TABS: &[&str] = &["Simit", "Pastalar", "İçecekler"];

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_menu();

    // First six catalog items as the "popular" strip.
    let popular = move || {
        ctx.state
            .with(|s| s.products.iter().take(6).cloned().collect::<Vec<_>>())
    };

    view! {
        <section class="hero">
            <div class="hero-card">
                <span class="badge">"1975'ten beri"</span>
                <h2>"Geleneksel Lezzet, Modern Sunum"</h2>
                <p>"Fırından yeni çıkmış simitler, günlük pastalar ve sıcak içecekler."</p>
                <div class="hero-actions">
                    <a class="btn" href="#/menu">"QR Menüye Git"</a>
                    <a class="btn small btn-alt" href="#/contact">"İletişim"</a>
                </div>
            </div>
            <div class="hero-card">
                <img src="public/assets/logo.png" alt="Simitçi Fırın" class="hero-logo" />
            </div>
        </section>

        <section>
            <div class="tabs">
                {QUICK_TABS
                    .iter()
                    .enumerate()
                    .map(|(i, label)| {
                        view! {
                            <a
                                class=if i == 0 { "tab active" } else { "tab" }
                                href="#/menu"
                            >
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid">
                {move || {
                    popular()
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
