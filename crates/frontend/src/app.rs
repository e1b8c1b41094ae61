use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProvider;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

/// Application root: wires the global providers around the routes.
/// `ThemeProvider` sits outermost so every page, including the login and
/// access-denied screens, can read the theme.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <AuthProvider>
                <AppRoutes />
            </AuthProvider>
        </ThemeProvider>
    }
}
