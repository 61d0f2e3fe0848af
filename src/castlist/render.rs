//! Assembles the component tree for one castlist screen.
use super::card::{GuildContext, card_text};
use super::layout::{LayoutLimits, Scenario};
use super::navigation::{NavAction, NavigationState};
use super::paginate::{compare_members, paginate};
use super::tribe::{Member, Tribe};
use crate::error::{CastlistError, Result};
use crate::interactions::ids::encode_nav;
use crate::ui::buttons::Btn;
use crate::ui::style::{
    EMOJI_NEXT, EMOJI_PREV, NO_PLAYERS_PLACEHOLDER, player_count, subtext, tribe_heading,
};
use crate::ui::tree::{Accessory, Button, Component, count_all};
use tracing::warn;

/// One rendered screen plus the position it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastlistView {
    pub components: Vec<Component>,
    pub scenario: Scenario,
    pub tribe_index: usize,
    pub tribe_page: usize,
}

impl CastlistView {
    pub fn component_count(&self) -> usize {
        count_all(&self.components)
    }
}

pub fn render(
    state: &NavigationState,
    tribes: &[Tribe],
    castlist: &str,
    guild: &GuildContext,
    limits: &LayoutLimits,
) -> Result<CastlistView> {
    if tribes.is_empty() {
        return Err(CastlistError::not_found("tribes for castlist", castlist));
    }
    let state = state.resume(state.tribe_index, state.tribe_page);

    let components = if state.scenario.is_paginated() {
        render_tribe_page(&state, tribes, castlist, guild, limits)?
    } else {
        render_all(tribes, state.scenario, guild)
    };

    let view = CastlistView {
        components,
        scenario: state.scenario,
        tribe_index: state.tribe_index,
        tribe_page: state.tribe_page,
    };
    if view.component_count() > limits.component_limit {
        warn!(
            target = "castlist.render",
            castlist = %castlist,
            components = view.component_count(),
            limit = limits.component_limit,
            "render exceeds component limit"
        );
    }
    Ok(view)
}

fn render_all(tribes: &[Tribe], scenario: Scenario, guild: &GuildContext) -> Vec<Component> {
    let mut out = Vec::new();
    for tribe in tribes {
        let mut members: Vec<&Member> = tribe.members.iter().collect();
        members.sort_by(|a, b| compare_members(a, b));
        let header = format!(
            "{}\n{}",
            tribe_heading(tribe.emoji.as_deref(), &tribe.name),
            subtext(&player_count(tribe.member_count()))
        );
        out.push(tribe_block(tribe, header, &members, guild));
        if scenario.uses_separators() {
            out.push(Component::spacer());
        }
    }
    out
}

fn render_tribe_page(
    state: &NavigationState,
    tribes: &[Tribe],
    castlist: &str,
    guild: &GuildContext,
    limits: &LayoutLimits,
) -> Result<Vec<Component>> {
    let tribe = tribes.get(state.tribe_index).ok_or_else(|| {
        CastlistError::invalid(format!(
            "tribe index {} outside {} tribes",
            state.tribe_index,
            tribes.len()
        ))
    })?;
    let total_pages = state.pages_in_current_tribe();

    let mut subtitle = player_count(tribe.member_count());
    if total_pages > 1 {
        subtitle.push_str(&format!(" • Page {}/{}", state.tribe_page + 1, total_pages));
    }
    let header = format!(
        "{}\n{}",
        tribe_heading(tribe.emoji.as_deref(), &tribe.name),
        subtext(&subtitle)
    );

    let block = if tribe.member_count() == 0 {
        tribe_block(tribe, header, &[], guild)
    } else {
        let pagination = paginate(&tribe.members, state.scenario.uses_separators(), limits);
        tribe_block(tribe, header, pagination.page(state.tribe_page), guild)
    };

    let mut out = vec![block];
    if state.scenario.uses_separators() {
        out.push(Component::spacer());
    }
    out.push(Component::ActionRow(navigation_buttons(state, castlist)?));
    Ok(out)
}

/// Container holding the header and either member cards or the empty placeholder.
/// Costs exactly `components_for_tribe(members.len(), false)`.
fn tribe_block(
    tribe: &Tribe,
    header: String,
    members: &[&Member],
    guild: &GuildContext,
) -> Component {
    let mut children = vec![Component::Text(header)];
    if members.is_empty() {
        children.push(Component::Text(NO_PLAYERS_PLACEHOLDER.to_string()));
    } else {
        children.push(Component::divider());
        children.extend(members.iter().map(|m| Component::Section {
            text: card_text(m, tribe, guild),
            accessory: Accessory::Thumbnail(m.avatar_url.clone()),
        }));
    }
    Component::Container {
        accent_color: tribe.color,
        children,
    }
}

/// Back / indicator / forward. Page moves win over tribe moves; boundaries become
/// disabled buttons with distinct ids.
pub fn navigation_buttons(state: &NavigationState, castlist: &str) -> Result<Vec<Button>> {
    let (index, page) = (state.tribe_index, state.tribe_page);
    let id = |action: NavAction| encode_nav(&action, index, page, castlist);
    let multi_page_tribe = state.pages_in_current_tribe() > 1;

    let back = if state.has_prev_page() {
        Btn::secondary(&id(NavAction::LastPage)?, &format!("{EMOJI_PREV} Last Page"))
    } else if state.has_prev_tribe() {
        Btn::secondary(&id(NavAction::LastTribe)?, &format!("{EMOJI_PREV} Last Tribe"))
    } else {
        let label = if multi_page_tribe { "Last Page" } else { "Last Tribe" };
        Btn::inert(
            &id(NavAction::Disabled("last".into()))?,
            &format!("{EMOJI_PREV} {label}"),
        )
    };

    let indicator_label = if state.tribe_count() > 1 {
        format!("Tribe {}/{}", index + 1, state.tribe_count())
    } else {
        format!("Page {}/{}", page + 1, state.pages_in_current_tribe())
    };
    let indicator = Btn::inert(&id(NavAction::Disabled("indicator".into()))?, &indicator_label);

    let forward = if state.has_next_page() {
        Btn::primary(&id(NavAction::NextPage)?, &format!("Next Page {EMOJI_NEXT}"))
    } else if state.has_next_tribe() {
        Btn::primary(&id(NavAction::NextTribe)?, &format!("Next Tribe {EMOJI_NEXT}"))
    } else {
        let label = if multi_page_tribe { "Next Page" } else { "Next Tribe" };
        Btn::inert(
            &id(NavAction::Disabled("next".into()))?,
            &format!("{label} {EMOJI_NEXT}"),
        )
    };

    Ok(vec![back, indicator, forward])
}
