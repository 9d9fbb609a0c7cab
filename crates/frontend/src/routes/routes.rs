use crate::domain::a001_fnol::ui::success::SuccessPage;
use crate::domain::a001_fnol::ui::tracking::TrackingPage;
use crate::domain::a001_fnol::ui::wizard::FnolWizard;
use crate::layout::Shell;
use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/report") view=FnolWizard />
                    <Route path=path!("/success/:fnol_id") view=SuccessPage />
                    <Route path=path!("/track/:fnol_id?") view=TrackingPage />
                </Routes>
            </Shell>
        </Router>
    }
}
