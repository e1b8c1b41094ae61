//! TopHeader — application top bar.
//!
//! Contains:
//! - Application brand
//! - Theme toggle
//! - User info and sign-out action

use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    let user_label = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.display_name.unwrap_or(u.username))
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("wallet")}
                <span class="top-header__title">"Expense Tracker"</span>
            </div>

            <div class="top-header__actions">
                <ThemeToggle />

                <div class="top-header__user">
                    {icon("user")}
                    <span>{user_label}</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
