pub mod footer;
pub mod top_header;

use footer::Footer;
use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |              Content                      |
/// +------------------------------------------+
/// |              Footer                       |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <main class="app-main">{children()}</main>
            </div>

            <Footer />
        </div>
    }
}
