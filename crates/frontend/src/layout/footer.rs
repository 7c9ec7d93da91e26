use leptos::prelude::*;

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span>{format!("© {} Simitçi Fırın", current_year())}</span>
        </footer>
    }
}
