use crate::access::Page;
use crate::league::LeagueContext;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

fn route_for(page: Page, slug: &str) -> Option<Route> {
    let slug = slug.to_string();
    match page {
        Page::Index => Some(Route::Index { slug }),
        Page::Dashboard => Some(Route::Dashboard { slug }),
        Page::Seasons => Some(Route::Seasons { slug }),
        Page::Players => Some(Route::Players { slug }),
        _ => None,
    }
}

const NAV_ENTRIES: &[(Page, &str)] = &[
    (Page::Index, "About"),
    (Page::Dashboard, "Dashboard"),
    (Page::Seasons, "Seasons"),
    (Page::Players, "Players"),
];

/// Control panel navigation. Entries the member cannot access are
/// hidden (the page gate still protects direct navigation). The
/// collapsed/expanded flag persists across sessions.
#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let league = use_context::<LeagueContext>().expect("League context not found");

    let Some(slug) = league.slug().map(str::to_string) else {
        return html! {};
    };

    let toggle = {
        let toggle_sidebar = league.toggle_sidebar.clone();
        Callback::from(move |_: MouseEvent| toggle_sidebar.emit(()))
    };

    let width = if league.sidebar_open { "w-56" } else { "w-12" };

    html! {
        <aside class={format!("bg-gray-900 text-gray-100 min-h-screen {} transition-all", width)}>
            <button
                onclick={toggle}
                class="w-full p-3 text-left text-gray-400 hover:text-white"
                aria-label="Toggle sidebar"
            >
                { if league.sidebar_open { "«" } else { "»" } }
            </button>
            if league.sidebar_open {
                <nav>
                    <ul class="space-y-1 px-2">
                        { for NAV_ENTRIES
                            .iter()
                            .filter(|(page, _)| league.has_page_access(*page))
                            .filter_map(|(page, label)| {
                                route_for(*page, &slug).map(|route| html! {
                                    <li>
                                        <Link<Route> to={route} classes="block rounded px-3 py-2 hover:bg-gray-800">
                                            { *label }
                                        </Link<Route>>
                                    </li>
                                })
                            })
                        }
                    </ul>
                </nav>
            }
        </aside>
    }
}
