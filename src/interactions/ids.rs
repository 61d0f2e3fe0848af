//! Centralized custom_id formats for castlist components.
//!
//! Navigation buttons carry the whole view position, since the bot keeps no session:
//! `castlist2_nav_<action>_<tribeIndex>_<tribePage>_<castlistName>`.
//! Messages posted by older builds stay clickable, so this format must not change.
use crate::constants::CUSTOM_ID_MAX_LEN;
use crate::error::{CastlistError, Result};
use std::borrow::Cow;

pub use crate::castlist::navigation::NavAction;

pub const CASTLIST_NAV_PREFIX: &str = "castlist2_nav_";
pub const SHOW_CASTLIST_PREFIX: &str = "show_castlist2_"; // followed by castlist name
pub const DISABLED_PREFIX: &str = "disabled_";

pub const ACTION_NEXT_PAGE: &str = "next_page";
pub const ACTION_LAST_PAGE: &str = "last_page";
pub const ACTION_NEXT_TRIBE: &str = "next_tribe";
pub const ACTION_LAST_TRIBE: &str = "last_tribe";

// Wire names for the actions.
impl NavAction {
    pub fn as_wire(&self) -> Cow<'static, str> {
        match self {
            NavAction::NextPage => Cow::Borrowed(ACTION_NEXT_PAGE),
            NavAction::LastPage => Cow::Borrowed(ACTION_LAST_PAGE),
            NavAction::NextTribe => Cow::Borrowed(ACTION_NEXT_TRIBE),
            NavAction::LastTribe => Cow::Borrowed(ACTION_LAST_TRIBE),
            NavAction::Disabled(suffix) => Cow::Owned(format!("{DISABLED_PREFIX}{suffix}")),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            ACTION_NEXT_PAGE => Some(NavAction::NextPage),
            ACTION_LAST_PAGE => Some(NavAction::LastPage),
            ACTION_NEXT_TRIBE => Some(NavAction::NextTribe),
            ACTION_LAST_TRIBE => Some(NavAction::LastTribe),
            other => {
                let suffix = other.strip_prefix(DISABLED_PREFIX)?;
                if suffix.is_empty() || suffix.split('_').any(is_number_token) {
                    return None;
                }
                Some(NavAction::Disabled(suffix.to_string()))
            }
        }
    }
}

/// A decoded navigation button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButtonId {
    pub action: NavAction,
    pub tribe_index: usize,
    pub tribe_page: usize,
    pub castlist: String,
}

pub fn is_castlist_nav(id: &str) -> bool {
    id.starts_with(CASTLIST_NAV_PREFIX)
}

/// Any component id the castlist handler owns.
pub fn is_castlist_component(id: &str) -> bool {
    is_castlist_nav(id) || id.starts_with(SHOW_CASTLIST_PREFIX)
}

pub fn encode_nav(
    action: &NavAction,
    tribe_index: usize,
    tribe_page: usize,
    castlist: &str,
) -> Result<String> {
    if castlist.is_empty() {
        return Err(CastlistError::invalid("castlist name is empty"));
    }
    if let NavAction::Disabled(suffix) = action
        && NavAction::parse(&action.as_wire()).is_none()
    {
        return Err(CastlistError::invalid(format!(
            "disabled suffix {suffix:?} cannot be decoded"
        )));
    }
    let id = format!(
        "{CASTLIST_NAV_PREFIX}{}_{tribe_index}_{tribe_page}_{castlist}",
        action.as_wire()
    );
    if id.chars().count() > CUSTOM_ID_MAX_LEN {
        return Err(CastlistError::NameTooLong {
            castlist: castlist.to_string(),
            max: CUSTOM_ID_MAX_LEN,
        });
    }
    Ok(id)
}

/// Parses a navigation custom_id from the right. The castlist name is the trailing
/// part, preceded by the page and the tribe index; whatever remains is the action.
/// Names may contain underscores (`post_merge`) and even numeric segments, so split
/// points are tried right to left and the first one where both positions are numbers
/// and the action has no numeric segment wins. No action contains a numeric segment,
/// which makes that split the only valid one.
pub fn decode_nav(id: &str) -> Result<NavButtonId> {
    let rest = id
        .strip_prefix(CASTLIST_NAV_PREFIX)
        .ok_or_else(|| CastlistError::invalid(format!("not a castlist nav id: {id:?}")))?;
    let tokens: Vec<&str> = rest.split('_').collect();
    // action (>= 1 token) + index + page + name (>= 1 token)
    if tokens.len() < 4 {
        return Err(CastlistError::invalid(format!("truncated castlist nav id: {id:?}")));
    }
    for name_start in (3..tokens.len()).rev() {
        let action_tokens = &tokens[..name_start - 2];
        let (index_token, page_token) = (tokens[name_start - 2], tokens[name_start - 1]);
        if !is_number_token(index_token)
            || !is_number_token(page_token)
            || action_tokens.iter().any(|t| is_number_token(t))
        {
            continue;
        }
        let castlist = tokens[name_start..].join("_");
        if castlist.is_empty() {
            continue;
        }
        let (Ok(tribe_index), Ok(tribe_page)) =
            (index_token.parse::<usize>(), page_token.parse::<usize>())
        else {
            return Err(CastlistError::invalid(format!("position out of range in {id:?}")));
        };
        let raw_action = action_tokens.join("_");
        let action = NavAction::parse(&raw_action)
            .ok_or_else(|| CastlistError::invalid(format!("unknown nav action {raw_action:?}")))?;
        return Ok(NavButtonId {
            action,
            tribe_index,
            tribe_page,
            castlist,
        });
    }
    Err(CastlistError::invalid(format!("malformed castlist nav id: {id:?}")))
}

pub fn show_castlist_id(castlist: &str) -> String {
    format!("{SHOW_CASTLIST_PREFIX}{castlist}")
}

/// Castlist name from a `show_castlist2_<name>` id.
pub fn parse_show_castlist_id(id: &str) -> Option<&str> {
    id.strip_prefix(SHOW_CASTLIST_PREFIX).filter(|n| !n.is_empty())
}

fn is_number_token(t: &str) -> bool {
    !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit())
}
