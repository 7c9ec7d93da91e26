pub mod footer;
pub mod header;

use leptos::prelude::*;

pub use footer::Footer;
pub use header::Header;

/// Application shell: sticky header, routed content, footer.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                    |
/// +------------------------------------------+
/// |              Content (center)             |
/// +------------------------------------------+
/// |                 Footer                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <Header />

            <main class="app-main container">
                {center()}
            </main>

            <Footer />
        </div>
    }
}
