//! Filter state lives in the URL query string; this module is the
//! controller that reads and rewrites it.
//!
//! `QueryParams` is an ordered key/value view of a query string. All
//! operations return new values so a page can build the next URL
//! without touching the one the router currently holds. List pages use
//! `with` for dropdown/pagination changes, `scoped` to project the
//! subset of keys an API endpoint understands, and the full
//! serialization as a fetch cache key.

use std::borrow::Cow;

/// Canonical filter keys used by the control panel list pages.
pub const SEASON_PARAM: &str = "season";
pub const TEAM_PARAM: &str = "team";
pub const SEARCH_PARAM: &str = "search";
pub const PAGE_PARAM: &str = "page";

/// A value being written into the query string. Anything empty removes
/// the key instead of leaving `key=` behind; multi-valued selections
/// collapse into one comma-joined parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Absent,
    One(String),
    Many(Vec<String>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::One(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::One(value)
    }
}

impl From<Option<String>> for QueryValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(v) => QueryValue::One(v),
            None => QueryValue::Absent,
        }
    }
}

impl From<Option<&str>> for QueryValue {
    fn from(value: Option<&str>) -> Self {
        value.map(str::to_string).into()
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::Many(values)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(values: Vec<&str>) -> Self {
        QueryValue::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

impl QueryValue {
    /// The single parameter this value serializes to, or `None` if the
    /// key should be removed.
    fn join(&self) -> Option<String> {
        match self {
            QueryValue::Absent => None,
            QueryValue::One(v) if v.is_empty() => None,
            QueryValue::One(v) => Some(v.clone()),
            QueryValue::Many(vs) if vs.is_empty() => None,
            QueryValue::Many(vs) => Some(vs.join(",")),
        }
    }
}

/// Ordered view of a query string. Parsing and serialization are
/// lossless for the keys and values; key order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

fn decode_component(raw: &str) -> String {
    // '+' is a space in query strings; literal plus arrives as %2B and
    // survives the replacement because percent decoding runs second.
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        // not valid UTF-8 after decoding; keep the raw text
        Err(_) => spaced.clone(),
    }
}

fn encode_component(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

impl QueryParams {
    /// Parses a query string (without the leading `?`). Empty segments
    /// are skipped; a key without `=` maps to the empty value.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((key, value)) => (decode_component(key), decode_component(value)),
                None => (decode_component(segment), String::new()),
            })
            .collect();
        Self { pairs }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// First value recorded for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Comma-joined values split back out, for multi-valued filters.
    pub fn get_all(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(joined) if !joined.is_empty() => {
                joined.split(',').map(str::to_string).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Returns a copy with `key` set to `value`. Empty values remove
    /// the key entirely; an existing key keeps its position; other keys
    /// are untouched. Applying the same write twice is a no-op.
    pub fn with(&self, key: &str, value: impl Into<QueryValue>) -> Self {
        let mut pairs = self.pairs.clone();
        match value.into().join() {
            Some(joined) => {
                if let Some(slot) = pairs.iter_mut().find(|(k, _)| k == key) {
                    slot.1 = joined;
                } else {
                    pairs.push((key.to_string(), joined));
                }
                // a set also collapses duplicate occurrences
                let mut seen = false;
                pairs.retain(|(k, _)| {
                    if k == key {
                        let keep = !seen;
                        seen = true;
                        keep
                    } else {
                        true
                    }
                });
            }
            None => pairs.retain(|(k, _)| k != key),
        }
        Self { pairs }
    }

    /// Projects the params onto `include_only`, in that order, skipping
    /// keys that are not present. An empty scope list means no scoping:
    /// the params come back unchanged.
    pub fn scoped(&self, include_only: &[&str]) -> Self {
        if include_only.is_empty() {
            return self.clone();
        }
        let pairs = include_only
            .iter()
            .filter_map(|key| {
                self.get(key)
                    .map(|value| (key.to_string(), value.to_string()))
            })
            .collect();
        Self { pairs }
    }

    /// Serializes back to a query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Pairs for router navigation helpers that serialize a query.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.pairs.clone()
    }
}

/// Returns `current` with `key` set to `value` (or removed when the
/// value is empty). Does not mutate the input.
pub fn build_query_string(current: &str, key: &str, value: impl Into<QueryValue>) -> String {
    QueryParams::parse(current).with(key, value).to_query_string()
}

/// Returns only the `include_only` subset of `current`; an empty list
/// returns `current`'s full serialization.
pub fn scope_query_string(current: &str, include_only: &[&str]) -> String {
    QueryParams::parse(current)
        .scoped(include_only)
        .to_query_string()
}

/// Full serialization of `current`, e.g. for use as a cache key.
pub fn current_query_string(current: &str) -> String {
    QueryParams::parse(current).to_query_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_value_on_empty_params() {
        assert_eq!(build_query_string("", SEASON_PARAM, "3"), "season=3");
    }

    #[test]
    fn test_set_replaces_in_place() {
        assert_eq!(
            build_query_string("season=3&page=2", SEASON_PARAM, "5"),
            "season=5&page=2"
        );
    }

    #[test]
    fn test_absent_value_removes_key() {
        let none: Option<&str> = None;
        assert_eq!(build_query_string("a=1&b=2", "b", none), "a=1");
    }

    #[test]
    fn test_empty_string_removes_key() {
        assert_eq!(build_query_string("a=1&search=red", SEARCH_PARAM, ""), "a=1");
    }

    #[test]
    fn test_empty_collection_removes_key() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(build_query_string("team=3&page=1", TEAM_PARAM, empty), "page=1");
    }

    #[test]
    fn test_multi_value_joins_with_comma() {
        let built = build_query_string("", TEAM_PARAM, vec!["3", "5"]);
        assert_eq!(built, "team=3%2C5");
        // and it decodes back to the same selection
        let parsed = QueryParams::parse(&built);
        assert_eq!(parsed.get_all(TEAM_PARAM), vec!["3", "5"]);
    }

    #[test]
    fn test_build_is_idempotent() {
        let once = build_query_string("a=1&b=2", "b", "9");
        let twice = build_query_string(&once, "b", "9");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_build_does_not_mutate_input() {
        let params = QueryParams::parse("a=1&b=2");
        let _ = params.with("b", "9");
        assert_eq!(params.to_query_string(), "a=1&b=2");
    }

    #[test]
    fn test_other_key_order_preserved() {
        assert_eq!(
            build_query_string("z=1&m=2&a=3", "m", "9"),
            "z=1&m=9&a=3"
        );
    }

    #[test]
    fn test_scope_empty_list_is_escape_hatch() {
        assert_eq!(scope_query_string("a=1&b=2&c=3", &[]), "a=1&b=2&c=3");
    }

    #[test]
    fn test_scope_projects_subset() {
        assert_eq!(scope_query_string("a=1&b=2&c=3", &["b"]), "b=2");
    }

    #[test]
    fn test_scope_skips_missing_keys() {
        assert_eq!(
            scope_query_string("season=2&page=4", &["season", "search", "page"]),
            "season=2&page=4"
        );
    }

    #[test]
    fn test_scope_does_not_invent_empty_values() {
        assert_eq!(scope_query_string("a=1", &["missing"]), "");
    }

    #[test]
    fn test_current_query_string_returns_everything() {
        assert_eq!(current_query_string("a=1&b=2"), "a=1&b=2");
        assert_eq!(current_query_string(""), "");
    }

    #[test]
    fn test_parse_tolerates_leading_question_mark() {
        let params = QueryParams::parse("?search=red&page=2");
        assert_eq!(params.get(SEARCH_PARAM), Some("red"));
        assert_eq!(params.get(PAGE_PARAM), Some("2"));
    }

    #[test]
    fn test_search_terms_with_spaces_roundtrip() {
        let built = build_query_string("", SEARCH_PARAM, "red team");
        assert_eq!(built, "search=red%20team");
        assert_eq!(QueryParams::parse(&built).get(SEARCH_PARAM), Some("red team"));
        // form-encoded input uses '+'
        assert_eq!(
            QueryParams::parse("search=red+team").get(SEARCH_PARAM),
            Some("red team")
        );
    }

    #[test]
    fn test_literal_plus_survives() {
        assert_eq!(
            QueryParams::parse("search=a%2Bb").get(SEARCH_PARAM),
            Some("a+b")
        );
    }

    #[test]
    fn test_key_without_equals_reads_as_empty() {
        let params = QueryParams::parse("flag&a=1");
        assert_eq!(params.get("flag"), Some(""));
        assert_eq!(params.get("a"), Some("1"));
    }

    #[test]
    fn test_set_collapses_duplicate_keys() {
        assert_eq!(
            build_query_string("team=1&page=2&team=9", TEAM_PARAM, "4"),
            "team=4&page=2"
        );
    }
}
