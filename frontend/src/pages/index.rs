use crate::league::LeagueContext;
use yew::prelude::*;

/// Landing view of a league's control panel. Open to every member once
/// their membership has loaded.
#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let league = use_context::<LeagueContext>().expect("League context not found");

    let Some(info) = league.league().map(|l| l.league_info.clone()) else {
        return html! {};
    };

    html! {
        <div class="max-w-3xl mx-auto py-6 px-4">
            <div class="flex items-center gap-4 mb-6">
                if let Some(logo) = &info.logo {
                    <img src={logo.clone()} alt="League logo" class="h-16 w-16 rounded-full" />
                }
                <div>
                    <h1 class="text-3xl font-bold text-gray-900">{ &info.name }</h1>
                    if league.is_administrator() {
                        <span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-blue-100 text-blue-800">
                            {"Administrator"}
                        </span>
                    }
                </div>
            </div>
            if let Some(description) = &info.description {
                <p class="text-gray-600">{ description }</p>
            } else {
                <p class="text-gray-400 italic">{"This league has no description yet."}</p>
            }
            if let Some(active) = league.active_season() {
                <p class="mt-4 text-sm text-gray-500">
                    {"Active season: "}{ &active.name }
                </p>
            }
        </div>
    }
}
