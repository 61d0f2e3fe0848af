//! End-to-end view building against an in-memory guild.
mod common;

use castbot::CastlistError;
use castbot::castlist::{
    LayoutLimits, NavAction, OrderStrategy, Scenario, load_tribes, reorder,
};
use castbot::database::models::{GuildData, TribeRecord};
use castbot::database::store::JsonStore;
use castbot::services::castlist::{Navigation, ViewRequest, build_view};
use castbot::ui::tree::Component;
use chrono::{TimeZone, Utc};
use common::{FakeDirectory, member, members, tribe};
use std::io::Write;

fn record(role_id: &str, castlist: &str) -> TribeRecord {
    TribeRecord {
        role_id: role_id.to_string(),
        emoji: None,
        color: None,
        castlist: castlist.to_string(),
        show_player_emojis: true,
    }
}

fn guild(records: &[TribeRecord]) -> GuildData {
    let mut guild = GuildData::default();
    for r in records {
        guild.tribes.insert(r.role_id.clone(), r.clone());
    }
    guild
}

fn request<'a>(castlist: &'a str, user: &'a str, navigation: Navigation) -> ViewRequest<'a> {
    ViewRequest {
        castlist,
        requesting_user_id: user,
        navigation,
        now: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    }
}

fn header_of(component: &Component) -> &str {
    match component {
        Component::Container { children, .. } => match &children[0] {
            Component::Text(t) => t,
            other => panic!("unexpected header {other:?}"),
        },
        other => panic!("expected container, got {other:?}"),
    }
}

fn survivor_directory() -> FakeDirectory {
    FakeDirectory::default()
        .with_role("r1", "Alpha", 0xFF0000)
        .with_role("r2", "Beta", 0)
        .with_role("r3", "Gamma", 0)
        .with_members(members("a", "r1", 2))
        .with_members(members("b", "r2", 30))
        .with_members(vec![member("me", "Me", &["r3"])])
}

#[tokio::test]
async fn loader_skips_deleted_roles_and_sorts_by_name() {
    let directory = FakeDirectory::default()
        .with_role("r2", "beta", 0x00FF00)
        .with_role("r3", "Alpha", 0);
    let records = vec![record("r1", "default"), record("r2", "default"), record("r3", "default")];
    let tribes = load_tribes(&directory, &records).await;
    let names: Vec<&str> = tribes.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "beta"]);
    assert_eq!(tribes[1].color, Some(0x00FF00));
    assert_eq!(tribes[0].color, None);
}

#[test]
fn requesting_users_tribe_comes_first_on_default_only() {
    let mut mine = tribe("r3", "Gamma", 1);
    mine.members.push(member("me", "Me", &["r3"]));
    let tribes = vec![tribe("r1", "Alpha", 2), tribe("r2", "Beta", 3), mine];

    let ordered = reorder(tribes.clone(), "me", OrderStrategy::UserFirst, "default");
    let names: Vec<&str> = ordered.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Gamma", "Alpha", "Beta"]);

    let curated = reorder(tribes.clone(), "me", OrderStrategy::UserFirst, "post_merge");
    assert_eq!(curated, tribes);

    let untouched = reorder(tribes.clone(), "me", OrderStrategy::AsConfigured, "default");
    assert_eq!(untouched, tribes);

    let stranger = reorder(tribes.clone(), "nobody", OrderStrategy::UserFirst, "default");
    assert_eq!(stranger, tribes);
}

#[test]
fn order_strategy_parses() {
    assert_eq!("user-first".parse::<OrderStrategy>(), Ok(OrderStrategy::UserFirst));
    assert_eq!("as-configured".parse::<OrderStrategy>(), Ok(OrderStrategy::AsConfigured));
    assert!("random".parse::<OrderStrategy>().is_err());
}

#[tokio::test]
async fn fresh_view_starts_on_the_viewers_tribe() {
    let directory = survivor_directory();
    let guild = guild(&[record("r1", "default"), record("r2", "default"), record("r3", "default")]);
    let limits = LayoutLimits::default();
    let view = build_view(&directory, &guild, &request("default", "me", Navigation::Fresh), &limits)
        .await
        .unwrap();
    assert_eq!(view.scenario, Scenario::MultiPage);
    assert_eq!((view.tribe_index, view.tribe_page), (0, 0));
    assert!(header_of(&view.components[0]).starts_with("## Gamma"));
}

#[tokio::test]
async fn resumed_view_applies_the_clicked_action() {
    let directory = survivor_directory();
    let guild = guild(&[record("r1", "default"), record("r2", "default"), record("r3", "default")]);
    let limits = LayoutLimits::default();
    let nav = Navigation::Resume {
        tribe_index: 1,
        tribe_page: 1,
        action: NavAction::NextPage,
    };
    // a stranger sees configured order: Alpha, Beta, Gamma
    let view = build_view(&directory, &guild, &request("default", "nobody", nav), &limits)
        .await
        .unwrap();
    assert_eq!((view.tribe_index, view.tribe_page), (1, 2));
    assert!(header_of(&view.components[0]).contains("Page 3/3"));
}

#[tokio::test]
async fn stale_positions_clamp_instead_of_failing() {
    let directory = survivor_directory();
    let guild = guild(&[record("r1", "default"), record("r2", "default"), record("r3", "default")]);
    let limits = LayoutLimits::default();
    let nav = Navigation::Resume {
        tribe_index: 7,
        tribe_page: 4,
        action: NavAction::Disabled("indicator".into()),
    };
    let view = build_view(&directory, &guild, &request("default", "nobody", nav), &limits)
        .await
        .unwrap();
    assert_eq!((view.tribe_index, view.tribe_page), (2, 0));
}

#[tokio::test]
async fn unknown_castlist_is_not_found() {
    let directory = survivor_directory();
    let guild = guild(&[record("r1", "default")]);
    let limits = LayoutLimits::default();
    let err = build_view(&directory, &guild, &request("jury", "me", Navigation::Fresh), &limits)
        .await
        .unwrap_err();
    assert!(matches!(err, CastlistError::NotFound { .. }));
}

#[tokio::test]
async fn castlist_with_only_deleted_roles_is_not_found() {
    let directory = FakeDirectory::default();
    let guild = guild(&[record("gone", "default")]);
    let limits = LayoutLimits::default();
    let err = build_view(&directory, &guild, &request("default", "me", Navigation::Fresh), &limits)
        .await
        .unwrap_err();
    assert!(matches!(err, CastlistError::NotFound { .. }));
}

#[tokio::test]
async fn cards_show_pronouns_and_local_time() {
    let directory = FakeDirectory::default()
        .with_role("r1", "Alpha", 0)
        .with_role("she", "She/Her", 0)
        .with_role("ist", "IST", 0)
        .with_members(vec![member("u1", "Alice", &["r1", "she", "ist"])]);
    let raw = r##"{
        "42": {
            "players": { "u1": { "age": 30, "emojiCode": "🌴" } },
            "tribes": { "r1": { "castlist": "default", "emoji": "🔥" } },
            "pronounRoleIDs": ["she"],
            "timezones": { "ist": { "offset": 5.5 } }
        }
    }"##;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(raw.as_bytes()).unwrap();
    let store = JsonStore::new(file.path());
    let guild = store.load_guild("42").await.unwrap();

    let limits = LayoutLimits::default();
    let view = build_view(&directory, &guild, &request("default", "u1", Navigation::Fresh), &limits)
        .await
        .unwrap();
    assert_eq!(view.scenario, Scenario::Ideal);
    let Component::Container { children, .. } = &view.components[0] else {
        panic!("expected container");
    };
    assert_eq!(header_of(&view.components[0]), "## 🔥 Alpha\n-# 1 player");
    let Component::Section { text, .. } = &children[2] else {
        panic!("expected member card");
    };
    assert_eq!(text, "🌴 **Alice**\n30 • She/Her • IST\n🕐 5:30 PM");
}

#[tokio::test]
async fn absurd_stored_offset_drops_the_clock_line() {
    let directory = FakeDirectory::default()
        .with_role("r1", "Alpha", 0)
        .with_role("tz", "Nowhere", 0)
        .with_members(vec![member("u1", "Alice", &["r1", "tz"])]);
    let raw = r#"{
        "42": {
            "tribes": { "r1": { "castlist": "default" } },
            "timezones": { "tz": { "offset": 1e15 } }
        }
    }"#;
    let store = JsonStore::new("playerData.json");
    let guild = store.parse_guild(raw.as_bytes(), "42").unwrap();

    let limits = LayoutLimits::default();
    let view = build_view(&directory, &guild, &request("default", "u1", Navigation::Fresh), &limits)
        .await
        .unwrap();
    let Component::Container { children, .. } = &view.components[0] else {
        panic!("expected container");
    };
    let Component::Section { text, .. } = &children[2] else {
        panic!("expected member card");
    };
    assert_eq!(text, "**Alice**");
}
