use crate::league::LeagueContext;
use yew::prelude::*;

/// Owner/super-admin overview of the league.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let league = use_context::<LeagueContext>().expect("League context not found");

    let season_count = league
        .league()
        .map(|l| l.seasons.all_seasons.len())
        .unwrap_or(0);

    html! {
        <div class="max-w-7xl mx-auto py-6 px-4">
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{"Dashboard"}</h1>
            <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                <div class="bg-white shadow rounded-lg p-6">
                    <p class="text-sm text-gray-500">{"Seasons"}</p>
                    <p class="text-2xl font-semibold text-gray-900">{ season_count }</p>
                </div>
                <div class="bg-white shadow rounded-lg p-6">
                    <p class="text-sm text-gray-500">{"Active season"}</p>
                    <p class="text-2xl font-semibold text-gray-900">
                        { league.active_season().map(|s| s.name.clone()).unwrap_or_else(|| "None".to_string()) }
                    </p>
                </div>
                <div class="bg-white shadow rounded-lg p-6">
                    <p class="text-sm text-gray-500">{"Your role"}</p>
                    <p class="text-2xl font-semibold text-gray-900">
                        { league.league().map(|l| l.role.role_name.clone()).unwrap_or_default() }
                    </p>
                </div>
            </div>
        </div>
    }
}
