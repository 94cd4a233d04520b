use super::*;

fn result(image: &str) -> CompositionResult {
    CompositionResult {
        image: image.to_owned(),
        text: Some("Placed by the window".to_owned()),
        timestamp: "11/3/2025, 9:12:44 AM".to_owned(),
    }
}

#[test]
fn apply_stores_exactly_one_result_and_clears_the_flag() {
    let mut state = ResultState {
        placing: true,
        ..ResultState::default()
    };
    state.apply(result("data:image/png;base64,AA=="));
    assert!(!state.placing);
    assert!(state.result.is_some());
}

#[test]
fn a_new_result_replaces_the_previous_one() {
    let mut state = ResultState::default();
    state.apply(result("first"));
    state.apply(result("second"));
    assert_eq!(state.result.unwrap().image, "second");
}

#[test]
fn fail_clears_the_flag_and_keeps_the_prior_result() {
    let mut state = ResultState::default();
    state.apply(result("first"));
    state.placing = true;
    state.fail();
    assert!(!state.placing);
    assert_eq!(state.result.unwrap().image, "first");
}

#[test]
fn clear_drops_everything() {
    let mut state = ResultState::default();
    state.apply(result("first"));
    state.saving_room = true;
    state.clear();
    assert!(state.result.is_none());
    assert!(!state.saving_room);
}
