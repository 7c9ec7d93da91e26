use contracts::{hash_for_category, AppEvent, MenuState};
use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// The single writer for all session state. Every mutation goes through
/// [`MenuContext::dispatch`]; views read the state signal and derive what
/// they render from it.
#[derive(Clone, Copy)]
pub struct MenuContext {
    pub state: RwSignal<MenuState>,
}

impl MenuContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(MenuState::default()),
        }
    }

    pub fn dispatch(&self, event: AppEvent) {
        self.state.update(|state| state.apply(event));
    }

    /// Select a category from the UI by rewriting the location hash. The
    /// rewrite fires a hashchange, which re-enters [`Self::dispatch`], so
    /// the state update is the same whether it came from a click or from
    /// direct navigation.
    pub fn select_category(&self, category: &str) {
        let hash = hash_for_category(category);
        if let Some(w) = window() {
            if w.location().set_hash(&hash).is_ok() {
                return;
            }
        }
        // No window (or the rewrite failed): fall back to a direct event so
        // the state never desyncs from the intent.
        self.dispatch(AppEvent::HashChanged(hash));
    }

    pub fn set_search(&self, text: String) {
        self.dispatch(AppEvent::SearchInput(text));
    }

    /// Boot sequence: fetch the catalog, then route the current hash, then
    /// keep routing on every hashchange (back/forward included).
    ///
    /// The initial `HashChanged` is dispatched only after `CatalogLoaded`,
    /// so the category order is resolved before the first reverse-slug
    /// lookup. A failed fetch is logged and leaves the default empty state;
    /// routing then degrades to the sentinel category.
    pub fn init_router_integration(&self) {
        let this = *self;
        leptos::task::spawn_local(async move {
            match crate::api::fetch_menu().await {
                Ok(items) => this.dispatch(AppEvent::CatalogLoaded(items)),
                Err(e) => log::error!("menu load failed: {e}"),
            }
            this.dispatch(AppEvent::HashChanged(current_hash()));
        });

        let this = *self;
        let on_hashchange = Closure::<dyn FnMut()>::new(move || {
            this.dispatch(AppEvent::HashChanged(current_hash()));
        });
        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback(
                "hashchange",
                on_hashchange.as_ref().unchecked_ref(),
            );
        }
        // The listener lives for the whole session.
        on_hashchange.forget();
    }
}

impl Default for MenuContext {
    fn default() -> Self {
        Self::new()
    }
}

fn current_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Fetch the context provided by [`crate::app::App`].
pub fn use_menu() -> MenuContext {
    use_context::<MenuContext>().expect("MenuContext not found")
}
