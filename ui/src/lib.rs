// The client-side Dioxus application logic.

use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

mod app_state;
pub mod compat;
mod components;
pub mod hooks;
pub mod price_poller;
pub mod purchase_form;
mod screens;
mod server_pricing;

use api::price_query::PageContext;
use app_state::AppState;
use components::pico::Container;
use screens::purchase::PurchaseScreen;

/// Initializes logging at the level named by `LOG_LEVEL` (default INFO).
pub fn init_logging() -> Result<(), dioxus_logger::tracing::subscriber::SetGlobalDefaultError> {
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    dioxus_logger::init(level)
}

/// The order pages are offered in.
const ALL_PAGES: [PageContext; 5] = [
    PageContext::Fission,
    PageContext::MintGold,
    PageContext::MintRsv,
    PageContext::TransmuteRsvToGold,
    PageContext::TransmuteGldToRsv,
];

/// The navigation tabs, one per purchase page.
#[component]
fn Tabs(mut active_page: Signal<PageContext>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for page in ALL_PAGES {
                    li {
                        a {
                            href: "#",
                            class: if active_page() == page { "active-tab" } else { "" },
                            "aria-current": if active_page() == page { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                active_page.set(page);
                            },
                            "{page.title()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        text-decoration: none;
        border-bottom: 3px solid var(--pico-primary);
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    .conversion-box p { margin-bottom: 0.25rem; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link {
            rel: "stylesheet",
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let prefs_future = use_server_future(move || async move {
        let user_prefs = api::get_user_prefs().await?;
        dioxus_logger::tracing::info!("prefs: {:#?}", user_prefs);
        Ok::<_, api::ApiError>(user_prefs)
    })?;

    let body = match &*prefs_future.read() {
        Some(Ok(prefs)) => rsx! {
            LoadedApp {
                app_state: AppState::new(prefs.purchase_prefs().clone()),
            }
        },
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when data is ready.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let active_page = use_signal(|| ALL_PAGES[0]);

    rsx! {
        Container {
            header {
                nav {
                    ul {
                        li {
                            strong { "Ergo Token Purchase" }
                        }
                    }
                    ul {
                        li {
                            Tabs {
                                active_page,
                            }
                        }
                    }
                }
            }
            div {
                class: "content",
                PurchaseScreen {
                    page: active_page(),
                }
            }
        }
    }
}
