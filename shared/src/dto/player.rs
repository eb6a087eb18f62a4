use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A player as listed in a league's control panel
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct LeaguePlayerDto {
    pub id: i64,
    #[validate(length(min = 1, max = 100, message = "Player name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Team the player is rostered on in the selected season, if any
    pub team_id: Option<i64>,
    /// Season the row was scoped to by the list filters
    pub season_id: Option<i64>,
    pub created_at: DateTime<FixedOffset>,
}
