//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::pages::{login::LoginPage, patients::PatientsPage, staff::StaffPage};
use crate::state::session::SessionState;
use crate::util::guard::{self, RouteTarget};

/// Root application component.
///
/// Provides the shared session signal, fires the startup session probe,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Ask the backend who the cookie belongs to before routing settles.
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(crate::state::session::check_session(session));

    view! {
        <Title text="Healthcare Portal"/>

        <Router>
            <Routes fallback=|| view! { <FallbackRedirect/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("patients") view=PatientsPage/>
                <Route path=StaticSegment("staff") view=StaffPage/>
                <Route path=StaticSegment("") view=FallbackRedirect/>
            </Routes>
        </Router>
    }
}

/// Catch-all for `/` and unknown paths. Never shows content of its own;
/// the guard forwards to `/patients` or `/login` once the session settles.
#[component]
fn FallbackRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_route_guard(RouteTarget::Fallback, session, navigate);

    view! { <p class="app-loading">"Loading..."</p> }
}
