use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="brand" href="#/">
                <img src="public/assets/logo.png" alt="Simitçi Fırın" class="brand-logo" />
                <span class="brand-name">"Simitçi Fırın"</span>
            </a>
            <nav class="site-nav">
                <a href="#/">"Anasayfa"</a>
                <a href="#/menu">"Menü"</a>
                <a href="#/contact">"İletişim"</a>
            </nav>
        </header>
    }
}
