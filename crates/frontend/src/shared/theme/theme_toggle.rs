use leptos::prelude::*;

use super::use_theme;

/// Toggle button between light and dark mode.
///
/// Shows the affordance for the mode a click switches *to*, not the active
/// one: "🌙 Dark Mode" while light is active, "☀️ Light Mode" while dark is.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="theme-toggle"
            title="Switch color theme"
            on:click=move |_| ctx.toggle()
        >
            {move || ctx.get().toggle_label()}
        </button>
    }
}
