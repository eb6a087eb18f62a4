use crate::api::{api_url, utils::authenticated_get};
use crate::query::{QueryParams, PAGE_PARAM, SEARCH_PARAM, SEASON_PARAM};
use log::debug;
use shared::{ErrorResponse, LeaguePlayerDto, PaginatedDto};

/// Filter keys the players endpoint understands; everything else in the
/// address bar stays client-side.
pub const PLAYER_LIST_SCOPE: &[&str] = &[SEASON_PARAM, SEARCH_PARAM, PAGE_PARAM];

/// Fetches one page of a league's players, scoped to the filters the
/// endpoint accepts.
pub async fn get_players(
    slug: &str,
    params: &QueryParams,
) -> Result<PaginatedDto<LeaguePlayerDto>, String> {
    let scoped = params.scoped(PLAYER_LIST_SCOPE).to_query_string();
    let mut url = api_url(&format!("/api/control-panel/league/{}/players", slug));
    if !scoped.is_empty() {
        url = format!("{}?{}", url, scoped);
    }

    debug!("Fetching players: {}", url);

    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send players request: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("HTTP {}", response.status()));
        return Err(error);
    }

    response
        .json::<PaginatedDto<LeaguePlayerDto>>()
        .await
        .map_err(|e| format!("Failed to parse players response: {}", e))
}
