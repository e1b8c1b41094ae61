use crate::domain::transaction::ui::list::TransactionsListPage;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Top-level navigation: unauthenticated sessions land on the login page,
/// everything else renders the shell with the ledger.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <Shell>
                <TransactionsListPage />
            </Shell>
        </Show>
    }
}
