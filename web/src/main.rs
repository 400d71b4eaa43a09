use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::hooks::{use_locale_provider, use_navigation_provider, use_window_events_provider};
use ui::views::{AppShell, Dashboard};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Dashboard {},
}

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_locale_provider();
    use_navigation_provider();
    use_window_events_provider();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        div { class: "app-root",
            Router::<Route> {}
        }
    }
}

/// Web layout wrapping the shared shell around the routed page.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppShell {
            Outlet::<Route> {}
        }
    }
}
