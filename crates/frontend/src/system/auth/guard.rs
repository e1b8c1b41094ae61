use leptos::prelude::*;

use super::context::use_auth;
use crate::system::pages::access_denied::AccessDeniedPage;

/// Renders children only for authenticated sessions; everyone else gets the
/// access-denied page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <AccessDeniedPage /> }
        >
            {children()}
        </Show>
    }
}
