use gloo_net::http::{Method, RequestBuilder};
use gloo_storage::Storage;

/// Builds a request carrying the stored session token, when present.
/// Requests without a stored session go out unauthenticated and the
/// server answers with 401 where it matters.
pub fn authenticated(method: Method, url: &str) -> RequestBuilder {
    let mut req = RequestBuilder::new(url).method(method);

    if let Ok(token) = gloo_storage::LocalStorage::get::<String>("session_token") {
        req = req.header("Authorization", &format!("Bearer {}", token));
    }

    req
}

pub fn authenticated_get(url: &str) -> RequestBuilder {
    authenticated(Method::GET, url)
}

pub fn authenticated_post(url: &str) -> RequestBuilder {
    authenticated(Method::POST, url)
}
