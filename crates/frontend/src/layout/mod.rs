pub mod footer;
pub mod header;

use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (brand, navigation, language)    |
/// +------------------------------------------+
/// |               page content               |
/// +------------------------------------------+
/// |  Footer (backend version, demo mode)     |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
            <Footer />
        </div>
    }
}
