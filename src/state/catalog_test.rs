use super::*;

fn design(id: &str) -> RoomDesign {
    RoomDesign {
        id: id.to_owned(),
        created_at: "2025-11-03".to_owned(),
        metadata: None,
        description: None,
    }
}

fn room(id: &str) -> UploadedRoom {
    UploadedRoom {
        id: id.to_owned(),
        image: format!("data:image/png;base64,{id}"),
    }
}

#[test]
fn defaults_are_empty_and_idle() {
    let state = CatalogState::default();
    assert!(state.designs.is_empty());
    assert!(state.rooms.is_empty());
    assert!(state.furniture.is_empty());
    assert!(!state.loading_designs && !state.loading_rooms && !state.loading_furniture);
}

#[test]
fn setting_a_list_clears_its_loading_flag() {
    let mut state = CatalogState {
        loading_designs: true,
        ..CatalogState::default()
    };
    state.set_designs(vec![design("d1")]);
    assert!(!state.loading_designs);
    assert_eq!(state.designs.len(), 1);
}

#[test]
fn refetch_replaces_the_list_wholesale() {
    let mut state = CatalogState::default();
    state.set_designs(vec![design("d1"), design("d2")]);
    state.set_designs(vec![design("d3")]);
    assert_eq!(state.designs.len(), 1);
    assert_eq!(state.designs[0].id, "d3");
}

#[test]
fn design_lookup_by_id() {
    let mut state = CatalogState::default();
    state.set_designs(vec![design("d1"), design("d2")]);
    assert_eq!(state.design("d2").map(|d| d.id.as_str()), Some("d2"));
    assert!(state.design("d9").is_none());
}

#[test]
fn newest_room_is_the_first_entry() {
    let mut state = CatalogState::default();
    assert!(state.newest_room().is_none());
    state.set_rooms(vec![room("r3"), room("r1")]);
    assert_eq!(state.newest_room().map(|r| r.id.as_str()), Some("r3"));
}
