use crate::api::players::get_players;
use crate::debounce::{use_debounced_input, SEARCH_DEBOUNCE_MS};
use crate::league::LeagueContext;
use crate::query::{QueryParams, QueryValue, PAGE_PARAM, SEARCH_PARAM, SEASON_PARAM};
use crate::Route;
use shared::{LeaguePlayerDto, PaginatedDto};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PlayersPageProps {
    pub slug: String,
}

/// Player list. Every filter lives in the URL: the season dropdown and
/// pagination push a new history entry, the debounced search box
/// replaces the current one so typing doesn't pollute history.
#[function_component(PlayersPage)]
pub fn players_page(props: &PlayersPageProps) -> Html {
    let league = use_context::<LeagueContext>().expect("League context not found");
    let navigator = use_navigator().unwrap();
    let location = use_location();

    let params = QueryParams::parse(
        location
            .as_ref()
            .map(|l| l.query_str())
            .unwrap_or_default(),
    );

    let players = use_state(|| None::<PaginatedDto<LeaguePlayerDto>>);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    // Refetch whenever any filter changes; the full serialization is
    // the cache key.
    {
        let players = players.clone();
        let loading = loading.clone();
        let error = error.clone();
        let params = params.clone();
        let cache_key = params.to_query_string();
        use_effect_with((props.slug.clone(), cache_key), move |(slug, _)| {
            loading.set(true);
            error.set(None);

            let slug = slug.clone();
            spawn_local(async move {
                match get_players(&slug, &params).await {
                    Ok(page) => {
                        players.set(Some(page));
                        error.set(None);
                    }
                    Err(e) => {
                        error.set(Some(e));
                        players.set(None);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    // Debounced search commit: replace-navigation, one per quiet window
    let commit_search = {
        let navigator = navigator.clone();
        let params = params.clone();
        let slug = props.slug.clone();
        Callback::from(move |term: String| {
            let next = params
                .with(SEARCH_PARAM, term.as_str())
                .with(PAGE_PARAM, QueryValue::Absent);
            let route = Route::Players { slug: slug.clone() };
            if let Err(e) = navigator.replace_with_query(&route, &next.to_pairs()) {
                gloo_console::error!(format!("Failed to update search filter: {:?}", e));
            }
        })
    };
    let initial_search = params.get(SEARCH_PARAM).unwrap_or_default().to_string();
    let (draft_search, on_search) =
        use_debounced_input(initial_search, SEARCH_DEBOUNCE_MS, commit_search);

    let on_search_input = {
        let on_search = on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    // Season dropdown: picking a season resets pagination
    let on_season_change = {
        let navigator = navigator.clone();
        let params = params.clone();
        let slug = props.slug.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let next = params
                .with(SEASON_PARAM, select.value().as_str())
                .with(PAGE_PARAM, QueryValue::Absent);
            let route = Route::Players { slug: slug.clone() };
            if let Err(e) = navigator.push_with_query(&route, &next.to_pairs()) {
                gloo_console::error!(format!("Failed to update season filter: {:?}", e));
            }
        })
    };

    let go_to_page = {
        let navigator = navigator.clone();
        let params = params.clone();
        let slug = props.slug.clone();
        Callback::from(move |page_number: u32| {
            let next = params.with(PAGE_PARAM, page_number.to_string());
            let route = Route::Players { slug: slug.clone() };
            if let Err(e) = navigator.push_with_query(&route, &next.to_pairs()) {
                gloo_console::error!(format!("Failed to change page: {:?}", e));
            }
        })
    };

    let selected_season = params.get(SEASON_PARAM).unwrap_or_default().to_string();
    let seasons = league.sorted_seasons();

    html! {
        <div class="max-w-7xl mx-auto py-6 px-4">
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{"Players"}</h1>

            <div class="bg-white shadow rounded-lg p-6 mb-6">
                <div class="flex flex-col sm:flex-row gap-4">
                    <div class="flex-1">
                        <label for="player-search" class="block text-sm font-medium text-gray-700 mb-2">
                            {"Search Players"}
                        </label>
                        <input
                            id="player-search"
                            type="text"
                            placeholder="Search by name or email..."
                            value={(*draft_search).clone()}
                            oninput={on_search_input}
                            class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm"
                        />
                    </div>
                    <div>
                        <label for="season-filter" class="block text-sm font-medium text-gray-700 mb-2">
                            {"Season"}
                        </label>
                        <select
                            id="season-filter"
                            value={selected_season.clone()}
                            onchange={on_season_change}
                            class="px-3 py-2 border border-gray-300 rounded-md shadow-sm"
                        >
                            <option value="" selected={selected_season.is_empty()}>{"All seasons"}</option>
                            { for seasons.iter().map(|season| {
                                let id = season.id.to_string();
                                html! {
                                    <option value={id.clone()} selected={selected_season == id}>
                                        { &season.name }
                                    </option>
                                }
                            }) }
                        </select>
                    </div>
                </div>
            </div>

            <div class="bg-white shadow rounded-lg">
                if *loading {
                    <div class="p-8 text-center">
                        <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
                        <p class="mt-2 text-gray-600">{"Loading players..."}</p>
                    </div>
                } else if let Some(error_msg) = &*error {
                    <div class="p-8 text-center">
                        <h3 class="text-lg font-medium text-gray-900 mb-2">{"Error Loading Players"}</h3>
                        <p class="text-gray-500">{error_msg}</p>
                    </div>
                } else if let Some(page) = &*players {
                    if page.data.is_empty() {
                        <div class="p-8 text-center">
                            <h3 class="text-lg font-medium text-gray-900 mb-2">{"No Players Found"}</h3>
                            <p class="text-gray-500">{"Try adjusting your filters"}</p>
                        </div>
                    } else {
                        <div class="overflow-x-auto">
                            <table class="min-w-full divide-y divide-gray-200">
                                <thead class="bg-gray-50">
                                    <tr>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Name"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Email"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Team"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-gray-200">
                                    { for page.data.iter().map(player_row) }
                                </tbody>
                            </table>
                        </div>
                        <Pagination page={page.clone()} on_navigate={go_to_page} />
                    }
                }
            </div>
        </div>
    }
}

fn player_row(player: &LeaguePlayerDto) -> Html {
    html! {
        <tr>
            <td class="px-6 py-4 text-sm text-gray-900">{ &player.name }</td>
            <td class="px-6 py-4 text-sm text-gray-500">{ &player.email }</td>
            <td class="px-6 py-4 text-sm text-gray-500">
                { player.team_id.map(|id| format!("#{}", id)).unwrap_or_else(|| "Unrostered".to_string()) }
            </td>
        </tr>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct PaginationProps {
    page: PaginatedDto<LeaguePlayerDto>,
    on_navigate: Callback<u32>,
}

#[function_component(Pagination)]
fn pagination(props: &PaginationProps) -> Html {
    let page = &props.page;

    let previous = {
        let on_navigate = props.on_navigate.clone();
        let target = page.page.saturating_sub(1).max(1);
        Callback::from(move |_: MouseEvent| on_navigate.emit(target))
    };
    let next = {
        let on_navigate = props.on_navigate.clone();
        let target = page.page + 1;
        Callback::from(move |_: MouseEvent| on_navigate.emit(target))
    };

    html! {
        <div class="flex items-center justify-between px-6 py-4 border-t border-gray-200">
            <p class="text-sm text-gray-500">
                { format!("Page {} of {} ({} players)", page.page, page.page_count(), page.total) }
            </p>
            <div class="flex gap-2">
                <button
                    onclick={previous}
                    disabled={!page.has_previous_page()}
                    class="px-3 py-1 border border-gray-300 rounded-md text-sm disabled:opacity-50"
                >
                    {"Previous"}
                </button>
                <button
                    onclick={next}
                    disabled={!page.has_next_page()}
                    class="px-3 py-1 border border-gray-300 rounded-md text-sm disabled:opacity-50"
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}
