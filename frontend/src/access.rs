//! Role and permission checks for control panel pages.
//!
//! Page access is decided by an ordered rule list evaluated
//! first-match-wins. The order is part of the contract: the empty
//! permission set denies everything (the membership record has not
//! loaded yet), the landing page is open to every member, and the
//! role tiers are consulted before the per-page permission flags.

use std::collections::HashMap;

/// Capability flags attached to a membership, keyed by flag name.
/// An absent key reads as `false`.
pub type PermissionSet = HashMap<String, bool>;

/// Coarse membership tier. Any role string the client does not
/// recognize is an ordinary member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Owner,
    SuperAdmin,
    Admin,
    Member,
}

impl Role {
    pub fn from_name(name: &str) -> Self {
        match name {
            "owner" => Role::Owner,
            "super-admin" => Role::SuperAdmin,
            "admin" => Role::Admin,
            _ => Role::Member,
        }
    }
}

/// Control panel sections. `Other` covers any slug the router does
/// not recognize; it is never granted access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    Dashboard,
    Members,
    Registrations,
    Seasons,
    Teams,
    Players,
    Schedule,
    Notices,
    Other,
}

impl Page {
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "index" => Page::Index,
            "dashboard" => Page::Dashboard,
            "members" => Page::Members,
            "registrations" => Page::Registrations,
            "seasons" => Page::Seasons,
            "teams" => Page::Teams,
            "players" => Page::Players,
            "schedule" => Page::Schedule,
            "notices" => Page::Notices,
            _ => Page::Other,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Index => "index",
            Page::Dashboard => "dashboard",
            Page::Members => "members",
            Page::Registrations => "registrations",
            Page::Seasons => "seasons",
            Page::Teams => "teams",
            Page::Players => "players",
            Page::Schedule => "schedule",
            Page::Notices => "notices",
            Page::Other => "",
        }
    }

    /// Permission flags that grant this page to ordinary members.
    /// Pages with an empty list are never reachable through flags.
    fn granting_flags(&self) -> &'static [&'static str] {
        match self {
            Page::Seasons => &["manage_seasons", "manage_roster"],
            Page::Teams => &["manage_teams"],
            Page::Players => &["manage_players"],
            Page::Schedule => &["manage_schedule"],
            Page::Notices => &["manage_notices"],
            _ => &[],
        }
    }
}

/// One access check: who is asking, with what flags, for which page.
pub struct AccessRequest<'a> {
    pub role: Role,
    pub permissions: &'a PermissionSet,
    pub page: Page,
}

impl AccessRequest<'_> {
    fn flag(&self, name: &str) -> bool {
        self.permissions.get(name).copied().unwrap_or(false)
    }
}

type RuleFn = for<'a, 'b> fn(&'a AccessRequest<'b>) -> Option<bool>;

/// The decision cascade. Rules run top to bottom; the first rule that
/// returns a decision wins.
pub const ACCESS_RULES: &[(&str, RuleFn)] = &[
    ("empty permission set denies everything", |r| {
        r.permissions.is_empty().then_some(false)
    }),
    ("the landing page is open to every member", |r| {
        (r.page == Page::Index).then_some(true)
    }),
    ("owner and super-admin see every page", |r| {
        matches!(r.role, Role::Owner | Role::SuperAdmin).then_some(true)
    }),
    ("dashboard and members need super-admin or above", |r| {
        matches!(r.page, Page::Dashboard | Page::Members).then_some(false)
    }),
    ("admin sees every remaining page", |r| {
        (r.role == Role::Admin).then_some(true)
    }),
    ("registrations need admin or above", |r| {
        (r.page == Page::Registrations).then_some(false)
    }),
    ("permission flags gate the list pages", |r| {
        Some(r.page.granting_flags().iter().any(|flag| r.flag(flag)))
    }),
];

/// True iff the role is admin tier or above.
pub fn is_administrator(role: Role) -> bool {
    matches!(role, Role::Owner | Role::SuperAdmin | Role::Admin)
}

/// Decides whether a member with `role` and `permissions` may view
/// `page`. Total over its inputs; callers re-evaluate on every render
/// because the permission set can change under them.
pub fn has_page_access(role: Role, permissions: &PermissionSet, page: Page) -> bool {
    let request = AccessRequest {
        role,
        permissions,
        page,
    };
    for (_, rule) in ACCESS_RULES {
        if let Some(granted) = rule(&request) {
            return granted;
        }
    }
    false
}
