//! End-to-end exercise of the filter pipeline without a browser:
//! keystrokes run through the debouncer, the committed term is written
//! into the query string, and the scoped projection is what the API
//! client would send.

use frontend::access::{has_page_access, Page, PermissionSet, Role};
use frontend::api::players::PLAYER_LIST_SCOPE;
use frontend::debounce::{Debouncer, SEARCH_DEBOUNCE_MS};
use frontend::query::{QueryParams, QueryValue, PAGE_PARAM, SEARCH_PARAM, SEASON_PARAM};

#[test]
fn test_search_burst_produces_one_navigation() {
    // address bar state when the page mounted
    let mut url_query = QueryParams::parse("season=2&page=3").to_query_string();
    let mut navigations = 0;

    let mut debouncer = Debouncer::new(SEARCH_DEBOUNCE_MS);
    debouncer.input("r", 0);
    debouncer.input("re", 100);
    debouncer.input("red", 200);

    // the window is still open at every keystroke
    assert_eq!(debouncer.poll(200), None);

    // 750ms after the last keystroke the single commit fires
    if let Some(term) = debouncer.poll(950) {
        url_query = QueryParams::parse(&url_query)
            .with(SEARCH_PARAM, term.as_str())
            .with(PAGE_PARAM, QueryValue::Absent)
            .to_query_string();
        navigations += 1;
    }
    assert_eq!(debouncer.poll(10_000), None);

    assert_eq!(navigations, 1);
    // search landed, pagination reset, season untouched
    assert_eq!(url_query, "season=2&search=red");
}

#[test]
fn test_scoped_projection_matches_api_contract() {
    let params = QueryParams::parse("season=2&tab=roster&search=red&page=4");
    let scoped = params.scoped(PLAYER_LIST_SCOPE);
    assert_eq!(scoped.to_query_string(), "season=2&search=red&page=4");

    // the full serialization stays available as a cache key
    assert_eq!(
        params.to_query_string(),
        "season=2&tab=roster&search=red&page=4"
    );
}

#[test]
fn test_clearing_search_removes_the_key() {
    let mut debouncer = Debouncer::new(SEARCH_DEBOUNCE_MS);
    debouncer.input("", 0);
    let term = debouncer.poll(750).expect("clear should commit");

    let url_query = QueryParams::parse("season=2&search=red")
        .with(SEARCH_PARAM, term.as_str())
        .to_query_string();
    assert_eq!(url_query, "season=2");
}

#[test]
fn test_list_page_renders_only_with_access() {
    // a member whose only capability is player management
    let permissions: PermissionSet =
        [("manage_players".to_string(), true)].into_iter().collect();
    let role = Role::from_name("member");

    assert!(has_page_access(role, &permissions, Page::Players));
    assert!(!has_page_access(role, &permissions, Page::Teams));

    // before the membership record loads nothing renders
    assert!(!has_page_access(role, &PermissionSet::new(), Page::Players));
}

#[test]
fn test_multi_valued_team_filter_roundtrip() {
    let url_query = QueryParams::parse("")
        .with("team", vec!["3", "5"])
        .to_query_string();
    assert_eq!(url_query, "team=3%2C5");

    let restored = QueryParams::parse(&url_query);
    assert_eq!(restored.get_all("team"), vec!["3", "5"]);

    // deselecting every team drops the parameter
    let cleared: Vec<String> = Vec::new();
    assert_eq!(
        QueryParams::parse(&url_query)
            .with("team", cleared)
            .to_query_string(),
        ""
    );
}

#[test]
fn test_season_change_resets_pagination() {
    let url_query = QueryParams::parse("season=2&search=red&page=5")
        .with(SEASON_PARAM, "7")
        .with(PAGE_PARAM, QueryValue::Absent)
        .to_query_string();
    assert_eq!(url_query, "season=7&search=red");
}
