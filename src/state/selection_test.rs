use super::*;
use crate::net::forms::{FurnitureRef, RoomRef};
use crate::state::requests::Generation;

fn generated(id: &str) -> RoomSource {
    RoomSource::Generated {
        design_id: id.to_owned(),
    }
}

fn uploaded(id: &str) -> RoomSource {
    RoomSource::Uploaded {
        room_id: id.to_owned(),
    }
}

fn library(id: &str) -> FurnitureSource {
    FurnitureSource::Library { id: id.to_owned() }
}

fn local_furniture(name: &str) -> FurnitureSource {
    FurnitureSource::LocalFile {
        name: name.to_owned(),
        mime: "image/png".to_owned(),
        size: 1024,
        preview_url: format!("blob:{name}"),
    }
}

// =============================================================
// Exclusive selection
// =============================================================

#[test]
fn selecting_a_room_replaces_the_previous_variant() {
    let mut state = SelectionState::default();
    state.select_room(generated("d1"));
    state.select_room(uploaded("r2"));
    assert_eq!(state.room, Some(uploaded("r2")));
}

#[test]
fn selecting_a_room_drops_the_resolved_preview() {
    let mut state = SelectionState::default();
    state.select_room(generated("d1"));
    state.resolve_room_image("data:image/png;base64,AA==".to_owned());
    state.select_room(generated("d2"));
    assert!(state.room_image.is_none());
}

#[test]
fn local_room_file_carries_its_own_preview() {
    let mut state = SelectionState::default();
    state.select_room(RoomSource::LocalFile {
        name: "room.jpg".to_owned(),
        preview_url: "blob:room".to_owned(),
    });
    assert_eq!(state.room_image.as_deref(), Some("blob:room"));
}

#[test]
fn selecting_furniture_replaces_the_previous_variant() {
    let mut state = SelectionState::default();
    state.select_furniture(local_furniture("sofa.png"));
    state.select_furniture(library("f3"));
    assert_eq!(state.furniture, Some(library("f3")));
}

// =============================================================
// Submit gating
// =============================================================

#[test]
fn submit_requires_both_halves() {
    let mut state = SelectionState::default();
    assert!(!state.can_submit());

    state.select_room(generated("d1"));
    assert!(!state.can_submit());

    state.select_furniture(library("f3"));
    assert!(state.can_submit());

    state.clear_furniture();
    assert!(!state.can_submit());
}

#[test]
fn submit_blocked_while_room_upload_in_flight() {
    let mut state = SelectionState::default();
    state.select_room(RoomSource::LocalFile {
        name: "room.jpg".to_owned(),
        preview_url: "blob:room".to_owned(),
    });
    state.select_furniture(library("f3"));
    assert!(!state.can_submit());
}

#[test]
fn late_room_upload_completion_does_not_override_a_newer_pick() {
    // Protocol shared by the room pickers: every pick advances the room
    // generation, and an upload completion adopts its room only if the
    // token it captured at dispatch is still current.
    let mut generation = Generation::default();
    let mut state = SelectionState::default();

    state.select_room(RoomSource::LocalFile {
        name: "room.jpg".to_owned(),
        preview_url: "blob:room".to_owned(),
    });
    let token = generation.begin();

    // User picks a generated design while the upload is in flight.
    generation.begin();
    state.select_room(generated("d2"));

    // Late completion: the stale token drops the write.
    if generation.is_current(token) {
        state.select_room(uploaded("r-new"));
        state.resolve_room_image("data:image/png;base64,AA==".to_owned());
    }
    assert_eq!(state.room, Some(generated("d2")));
    assert!(state.room_image.is_none());
}

#[test]
fn clear_room_drops_selection_and_preview() {
    let mut state = SelectionState::default();
    state.select_room(generated("d1"));
    state.resolve_room_image("data:image/png;base64,AA==".to_owned());
    state.clear_room();
    assert!(state.room.is_none());
    assert!(state.room_image.is_none());
}

// =============================================================
// Library delete invariant
// =============================================================

#[test]
fn deleting_the_selected_library_item_clears_furniture() {
    let mut state = SelectionState::default();
    state.select_furniture(library("f3"));
    state.drop_library_item("f3");
    assert!(state.furniture.is_none());
}

#[test]
fn deleting_another_library_item_keeps_the_selection() {
    let mut state = SelectionState::default();
    state.select_furniture(library("f3"));
    state.drop_library_item("f9");
    assert_eq!(state.furniture, Some(library("f3")));

    state.select_furniture(local_furniture("sofa.png"));
    state.drop_library_item("f3");
    assert!(state.furniture.is_some());
}

// =============================================================
// Placement request construction
// =============================================================

#[test]
fn request_for_design_and_library_selection() {
    let mut state = SelectionState::default();
    state.select_room(generated("d1"));
    state.select_furniture(library("f3"));
    state.set_description("blue chair".to_owned());

    let req = state.placement_request().unwrap();
    assert_eq!(req.room, RoomRef::Design("d1".to_owned()));
    assert_eq!(req.furniture, FurnitureRef::Library("f3".to_owned()));
    assert_eq!(req.description, "blue chair");
}

#[test]
fn request_without_a_room_is_a_validation_error() {
    let mut state = SelectionState::default();
    state.select_furniture(library("f3"));
    let err = state.placement_request().unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn request_without_furniture_is_a_validation_error() {
    let mut state = SelectionState::default();
    state.select_room(uploaded("r2"));
    let err = state.placement_request().unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn request_with_pending_room_upload_is_a_validation_error() {
    let mut state = SelectionState::default();
    state.select_room(RoomSource::LocalFile {
        name: "room.jpg".to_owned(),
        preview_url: "blob:room".to_owned(),
    });
    state.select_furniture(library("f3"));
    assert!(state.placement_request().unwrap_err().is_validation());
}

#[test]
fn local_furniture_becomes_an_upload_reference() {
    let mut state = SelectionState::default();
    state.select_room(uploaded("r2"));
    state.select_furniture(local_furniture("sofa.png"));

    let req = state.placement_request().unwrap();
    assert_eq!(
        req.furniture,
        FurnitureRef::Upload {
            file_name: "sofa.png".to_owned()
        }
    );
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_returns_to_the_initial_empty_state() {
    let mut state = SelectionState::default();
    state.select_room(generated("d1"));
    state.resolve_room_image("data:image/png;base64,AA==".to_owned());
    state.select_furniture(library("f3"));
    state.set_description("blue chair".to_owned());

    state.reset();
    assert!(state.room.is_none());
    assert!(state.room_image.is_none());
    assert!(state.furniture.is_none());
    assert!(state.description.is_empty());
}
