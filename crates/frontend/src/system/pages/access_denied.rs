use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::theme::use_theme;

/// Shown when a page is reached without the required permissions.
///
/// Pure theme consumer: the container class is derived from the current
/// theme name so the page restyles when the mode flips. No mutation.
#[component]
pub fn AccessDeniedPage() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class=move || format!("access-denied access-denied--{}", theme.get().as_str())>
            <div class="access-denied__icon">{icon("lock")}</div>
            <h1 class="access-denied__title">"Access Denied"</h1>
            <p class="access-denied__message">
                "You do not have permission to view this page. Sign in with an account that has access and try again."
            </p>
        </div>
    }
}
