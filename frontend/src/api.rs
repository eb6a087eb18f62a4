pub mod league;
pub mod players;
pub mod utils;

use crate::config::Config;

/// Absolute URL for an API path. With no configured base the path goes
/// out as-is and resolves against the current origin.
pub fn api_url(path: &str) -> String {
    let base = Config::api_base_url();
    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}{}", base, path)
    }
}
