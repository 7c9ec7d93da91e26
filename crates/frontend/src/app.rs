use crate::context::MenuContext;
use crate::layout::Shell;
use crate::views::RoutedView;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the menu store to the whole app via context.
    let ctx = MenuContext::new();
    provide_context(ctx);

    // Kick off the catalog fetch and hook the hashchange listener. This
    // runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell center=|| view! { <RoutedView /> }.into_any() />
    }
}
