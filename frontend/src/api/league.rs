use crate::api::{api_url, utils::authenticated_get};
use log::debug;
use shared::{ControlPanelDto, ErrorResponse};

/// Fetches the caller's control panel record for a league: league info,
/// seasons and the membership role with its permission flags.
pub async fn get_control_panel(slug: &str) -> Result<ControlPanelDto, String> {
    debug!("Fetching control panel information for league: {}", slug);

    let response = authenticated_get(&api_url(&format!("/api/control-panel/league/{}", slug)))
        .send()
        .await
        .map_err(|e| format!("Failed to send control panel request: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("HTTP {}", response.status()));
        return Err(error);
    }

    let league = response
        .json::<ControlPanelDto>()
        .await
        .map_err(|e| format!("Failed to parse control panel response: {}", e))?;

    debug!(
        "Loaded control panel for '{}' with role '{}'",
        league.league_info.slug, league.role.role_name
    );
    Ok(league)
}
