pub mod dto {
    pub mod common;
    pub mod league;
    pub mod player;
}

// Re-export commonly used items
pub use dto::{
    common::{ErrorResponse, PaginatedDto},
    league::{ControlPanelDto, LeagueInfoDto, RoleDto, SeasonDto, SeasonsDto},
    player::LeaguePlayerDto,
};
