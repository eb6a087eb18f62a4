use crate::league::LeagueContext;
use yew::prelude::*;

/// Season list, active season pinned to the top.
#[function_component(SeasonsPage)]
pub fn seasons_page() -> Html {
    let league = use_context::<LeagueContext>().expect("League context not found");

    let seasons = league.sorted_seasons();
    let active_id = league.active_season().map(|s| s.id);

    html! {
        <div class="max-w-3xl mx-auto py-6 px-4">
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{"Seasons"}</h1>
            if seasons.is_empty() {
                <p class="text-gray-500">{"This league hasn't run a season yet."}</p>
            } else {
                <ul class="divide-y divide-gray-200 bg-white shadow rounded-lg">
                    { for seasons.iter().map(|season| {
                        let is_active = Some(season.id) == active_id;
                        html! {
                            <li class="flex items-center justify-between px-6 py-4">
                                <span class="text-gray-900">{ &season.name }</span>
                                if is_active {
                                    <span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-green-100 text-green-800">
                                        {"Active"}
                                    </span>
                                }
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}
