//! League control panel context.
//!
//! `LeagueProvider` fetches the caller's membership record for a league
//! slug and exposes it through `LeagueContext`: role checks, page
//! access, season ordering and the sidebar toggle. Access checks go
//! through [`crate::access`] on every call; nothing is cached because
//! the permission set changes when the membership reloads.

use crate::access::{self, Page, Role};
use crate::api::league::get_control_panel;
use crate::storage::use_sidebar;
use log::error;
use shared::{ControlPanelDto, SeasonDto, SeasonsDto};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct LeagueState {
    pub league: Option<ControlPanelDto>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LeagueAction {
    Load,
    LoadSuccess(ControlPanelDto),
    LoadError(String),
}

impl Reducible for LeagueState {
    type Action = LeagueAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LeagueAction::Load => Rc::new(Self {
                league: None,
                loading: true,
                error: None,
            }),
            LeagueAction::LoadSuccess(league) => Rc::new(Self {
                league: Some(league),
                loading: false,
                error: None,
            }),
            LeagueAction::LoadError(error) => Rc::new(Self {
                league: None,
                loading: false,
                error: Some(error),
            }),
        }
    }
}

/// Active season first, remaining seasons in their original order.
pub fn sorted_seasons(seasons: &SeasonsDto) -> Vec<SeasonDto> {
    let mut all = seasons.all_seasons.clone();
    if let Some(active_id) = seasons.active_season_id {
        all.sort_by_key(|season| season.id != active_id);
    }
    all
}

pub fn active_season(seasons: &SeasonsDto) -> Option<&SeasonDto> {
    let active_id = seasons.active_season_id?;
    seasons.all_seasons.iter().find(|s| s.id == active_id)
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeagueContext {
    pub state: LeagueState,
    pub sidebar_open: bool,
    pub toggle_sidebar: Callback<()>,
}

impl LeagueContext {
    pub fn league(&self) -> Option<&ControlPanelDto> {
        self.state.league.as_ref()
    }

    pub fn slug(&self) -> Option<&str> {
        self.league().map(|l| l.league_info.slug.as_str())
    }

    fn role(&self) -> Role {
        self.league()
            .map(|l| Role::from_name(&l.role.role_name))
            .unwrap_or(Role::Member)
    }

    /// True iff the member's role is admin tier or above. False while
    /// the membership record is still loading.
    pub fn is_administrator(&self) -> bool {
        self.league().is_some() && access::is_administrator(self.role())
    }

    /// Evaluated fresh on every call; before the membership loads the
    /// permission set is empty and every page is denied.
    pub fn has_page_access(&self, page: Page) -> bool {
        match self.league() {
            Some(league) => access::has_page_access(self.role(), &league.role.permissions, page),
            None => false,
        }
    }

    pub fn has_seasons(&self) -> bool {
        self.league()
            .map(|l| !l.seasons.all_seasons.is_empty())
            .unwrap_or(false)
    }

    pub fn active_season(&self) -> Option<&SeasonDto> {
        self.league().and_then(|l| active_season(&l.seasons))
    }

    pub fn sorted_seasons(&self) -> Vec<SeasonDto> {
        self.league()
            .map(|l| sorted_seasons(&l.seasons))
            .unwrap_or_default()
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct LeagueProviderProps {
    pub slug: String,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LeagueProvider)]
pub fn league_provider(props: &LeagueProviderProps) -> Html {
    let state = use_reducer_eq(LeagueState::default);
    let (sidebar_open, toggle_sidebar) = use_sidebar();

    {
        let state = state.clone();
        use_effect_with(props.slug.clone(), move |slug| {
            let slug = slug.clone();
            state.dispatch(LeagueAction::Load);
            spawn_local(async move {
                match get_control_panel(&slug).await {
                    Ok(league) => state.dispatch(LeagueAction::LoadSuccess(league)),
                    Err(e) => {
                        error!("Failed to load control panel for '{}': {}", slug, e);
                        state.dispatch(LeagueAction::LoadError(e));
                    }
                }
            });
            || ()
        });
    }

    let context = LeagueContext {
        state: (*state).clone(),
        sidebar_open,
        toggle_sidebar,
    };

    if context.state.loading {
        return html! {
            <div class="flex h-screen w-full items-center justify-center">
                <div class="inline-block animate-spin rounded-full h-10 w-10 border-b-2 border-blue-600"></div>
            </div>
        };
    }

    html! {
        <ContextProvider<LeagueContext> context={context.clone()}>
            if context.state.league.is_some() {
                { props.children.clone() }
            } else if let Some(error_msg) = &context.state.error {
                <div class="p-8 text-center">
                    <h3 class="text-lg font-medium text-gray-900 mb-2">{"Unable to load league"}</h3>
                    <p class="text-gray-500">{error_msg}</p>
                </div>
            }
        </ContextProvider<LeagueContext>>
    }
}

/// Renders its children only when the current member may view `page`.
#[derive(Properties, Clone, PartialEq)]
pub struct PageGateProps {
    pub page: Page,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PageGate)]
pub fn page_gate(props: &PageGateProps) -> Html {
    let league = use_context::<LeagueContext>().expect("League context not found");

    if league.has_page_access(props.page) {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! {
            <div class="p-8 text-center">
                <h3 class="text-lg font-medium text-gray-900 mb-2">{"Access restricted"}</h3>
                <p class="text-gray-500">{"You don't have permission to view this section."}</p>
            </div>
        }
    }
}
