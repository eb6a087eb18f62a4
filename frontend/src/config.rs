pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // Empty base keeps requests same-origin; /api/ is proxied by
        // Trunk in development and nginx in production.
        "".to_string()
    }
}
