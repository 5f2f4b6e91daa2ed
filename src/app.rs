//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation::Navigation;
use crate::pages::{
    admin::AdminPage, chat::ChatPage, dashboard::DashboardPage, login::LoginPage,
    profile::ProfilePage, register::RegisterPage, search::SearchPage, submit::SubmitPage,
};
use crate::state::{chat::ChatState, session::SessionState, ui::UiState};

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
/// Provides the session, UI, and chat contexts and sets up client-side
/// routing. The session starts in its loading state; pages hold their
/// redirects until [`crate::state::session::initialize`] has run.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(session);
    provide_context(ui);
    provide_context(chat);

    // Restore the persisted session and theme once the app is live in the
    // browser. Effects do not run during server rendering.
    Effect::new(move || {
        crate::state::session::initialize(session);
        let dark = crate::util::theme::load_dark_preference();
        crate::util::theme::apply_dark(dark);
        ui.update(|state| state.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/learnhub.css"/>
        <Title text="LearnHub"/>

        <Router>
            <div class="app-shell">
                <Navigation/>
                <main class="app-shell__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=SearchPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route path=StaticSegment("submit") view=SubmitPage/>
                        <Route path=StaticSegment("chat") view=ChatPage/>
                        <Route path=StaticSegment("admin") view=AdminPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
