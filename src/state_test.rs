use super::*;
use crate::conversation::{GREETING, Role};
use crate::fleet::fallback::fallback_fleet;

#[tokio::test]
async fn fleet_store_starts_empty_and_unloaded() {
    let store = FleetStore::new();
    let snap = store.snapshot().await;
    assert!(snap.state.equipment.is_empty());
    assert!(snap.state.requests.is_empty());
    assert_eq!(snap.origin, FleetOrigin::Unloaded);
    assert_eq!(snap.generation, 0);
}

#[tokio::test]
async fn apply_latest_generation_replaces_whole_state() {
    let store = FleetStore::new();
    let generation = store.issue();
    let live = Arc::new(test_helpers::live_fleet());
    assert!(store.apply(generation, Arc::clone(&live), FleetOrigin::Live).await);

    let snap = store.snapshot().await;
    assert!(Arc::ptr_eq(&snap.state, &live));
    assert_eq!(snap.origin, FleetOrigin::Live);
    assert_eq!(snap.generation, generation);
}

#[tokio::test]
async fn apply_stale_generation_is_discarded() {
    let store = FleetStore::new();
    let older = store.issue();
    let newer = store.issue();

    assert!(!store.apply(older, Arc::new(fallback_fleet()), FleetOrigin::Fallback).await);
    assert_eq!(store.snapshot().await.origin, FleetOrigin::Unloaded);

    assert!(store.apply(newer, Arc::new(test_helpers::live_fleet()), FleetOrigin::Live).await);
    assert_eq!(store.snapshot().await.generation, newer);
}

#[tokio::test]
async fn apply_same_generation_twice_only_lands_once() {
    let store = FleetStore::new();
    let generation = store.issue();
    assert!(store.apply(generation, Arc::new(test_helpers::live_fleet()), FleetOrigin::Live).await);
    assert!(!store.apply(generation, Arc::new(fallback_fleet()), FleetOrigin::Fallback).await);
    assert_eq!(store.snapshot().await.origin, FleetOrigin::Live);
}

#[test]
fn issue_is_monotonic() {
    let store = FleetStore::new();
    let a = store.issue();
    let b = store.issue();
    let c = store.issue();
    assert!(a < b && b < c);
}

#[test]
fn conversation_store_clones_share_one_log() {
    let store = ConversationStore::new();
    let other = store.clone();
    let ticket = store.open_exchange("hello");
    other.close_exchange(ticket, ConversationTurn::assistant("hi"));

    let turns = store.turns();
    assert_eq!(turns.len(), 3);
    assert_eq!(turns[0].text, GREETING);
    assert_eq!(turns[1].role, Role::User);
    assert_eq!(turns[2].text, "hi");
}

#[test]
fn ui_state_defaults_to_assets_with_panel_closed() {
    let ui = UiState::default();
    assert_eq!(ui.view, View::Assets);
    assert!(!ui.copilot_open);
}
