use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

lazy_static! {
    static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
}

/// Public information about a league
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct LeagueInfoDto {
    pub id: i64,
    /// URL-safe identifier used in control panel routes
    #[validate(regex(path = "SLUG_REGEX", message = "Invalid league slug"))]
    pub slug: String,
    #[validate(length(min = 1, max = 100, message = "League name is required"))]
    pub name: String,
    pub description: Option<String>,
    /// URL of the uploaded league logo, if any
    pub logo: Option<String>,
}

/// A single season of play
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct SeasonDto {
    pub id: i64,
    #[validate(length(min = 1, max = 100, message = "Season name is required"))]
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Every season a league has run, plus which one is currently active
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SeasonsDto {
    pub active_season_id: Option<i64>,
    #[serde(default)]
    pub all_seasons: Vec<SeasonDto>,
}

/// The caller's membership role within a league.
///
/// `role_name` is a free-form string on the wire; anything other than
/// `owner`, `super-admin` or `admin` is an ordinary member.
/// `permissions` maps capability flags (`manage_teams`, ...) to booleans;
/// an absent key reads as `false`. The map arrives empty until the
/// membership record has loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleDto {
    pub role_name: String,
    #[serde(default)]
    pub permissions: HashMap<String, bool>,
}

/// Everything the control panel needs about one league membership
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlPanelDto {
    pub league_info: LeagueInfoDto,
    pub seasons: SeasonsDto,
    pub role: RoleDto,
}
