use crate::access::Page;
use crate::components::sidebar::Sidebar;
use crate::league::{LeagueProvider, PageGate};
use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod access;
pub mod api;
pub mod components;
pub mod config;
pub mod debounce;
pub mod league;
pub mod query;
pub mod storage;
pub mod pages {
    pub mod dashboard;
    pub mod index;
    pub mod not_found;
    pub mod players;
    pub mod seasons;
}

use pages::{
    dashboard::DashboardPage, index::AboutPage, not_found::NotFound, players::PlayersPage,
    seasons::SeasonsPage,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/control-panel/league/:slug")]
    Index { slug: String },
    #[at("/control-panel/league/:slug/dashboard")]
    Dashboard { slug: String },
    #[at("/control-panel/league/:slug/seasons")]
    Seasons { slug: String },
    #[at("/control-panel/league/:slug/players")]
    Players { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

/// Shared layout for control panel routes: membership provider around
/// sidebar plus access-gated content.
fn league_section(slug: String, page: Page, inner: Html) -> Html {
    html! {
        <LeagueProvider slug={slug}>
            <div class="flex min-h-screen bg-gray-50">
                <Sidebar />
                <main class="flex-1">
                    <PageGate page={page}>
                        { inner }
                    </PageGate>
                </main>
            </div>
        </LeagueProvider>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Index { slug } => league_section(slug, Page::Index, html! { <AboutPage /> }),
        Route::Dashboard { slug } => {
            league_section(slug, Page::Dashboard, html! { <DashboardPage /> })
        }
        Route::Seasons { slug } => league_section(slug, Page::Seasons, html! { <SeasonsPage /> }),
        Route::Players { slug } => {
            let inner = html! { <PlayersPage slug={slug.clone()} /> };
            league_section(slug, Page::Players, inner)
        }
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    console_error_panic_hook::set_once();

    info!("Mounting application");
    yew::Renderer::<App>::new().render();

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        run_app().await.expect("Failed to run app");
    });
    Ok(())
}
