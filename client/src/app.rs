//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use session::Gate;

use crate::components::guard::RouteGuard;
use crate::components::navigation::Navigation;
use crate::components::toasts::ToastStack;
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, home::HomePage, login::LoginPage, register::RegisterPage,
};
use crate::state::{auth::AuthState, toasts::ToastState, todos::TodoState};
use crate::util::auth::{install_session_hydration, install_session_verifier};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, to-do and toast contexts, starts session restore and
/// token verification, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth: RwSignal<AuthState> = RwSignal::new(AuthState::default());
    let todos = RwSignal::new(TodoState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(todos);
    provide_context(toasts);

    install_session_hydration(auth);
    install_session_verifier(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/todo-portal.css"/>
        <Title text="Todo Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardArea/>
                <Route path=StaticSegment("admin") view=AdminArea/>
            </Routes>
        </Router>
        <ToastStack/>
    }
}

/// User area: signed in and not an admin.
#[component]
fn DashboardArea() -> impl IntoView {
    view! {
        <RouteGuard gates=Gate::dashboard_area()>
            <Navigation/>
            <DashboardPage/>
        </RouteGuard>
    }
}

/// Admin area: signed in as an admin.
#[component]
fn AdminArea() -> impl IntoView {
    view! {
        <RouteGuard gates=Gate::admin_area() pending_label="Checking access...">
            <Navigation admin=true/>
            <AdminPage/>
        </RouteGuard>
    }
}
