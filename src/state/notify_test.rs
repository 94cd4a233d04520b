use super::*;

#[test]
fn push_appends_in_order() {
    let mut state = NotifyState::default();
    state.push(NoticeLevel::Error, "Failed to fetch designs");
    state.push(NoticeLevel::Success, "Furniture placed successfully!");
    assert_eq!(state.notices.len(), 2);
    assert_eq!(state.notices[0].level, NoticeLevel::Error);
    assert_eq!(state.notices[1].message, "Furniture placed successfully!");
}

#[test]
fn notice_ids_are_unique() {
    let mut state = NotifyState::default();
    let a = state.push(NoticeLevel::Info, "one");
    let b = state.push(NoticeLevel::Info, "two");
    assert_ne!(a, b);
}

#[test]
fn dismiss_removes_only_the_named_notice() {
    let mut state = NotifyState::default();
    let a = state.push(NoticeLevel::Info, "one");
    state.push(NoticeLevel::Info, "two");
    state.dismiss(&a);
    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].message, "two");
}

#[test]
fn dismissing_an_unknown_id_is_a_no_op() {
    let mut state = NotifyState::default();
    state.push(NoticeLevel::Info, "one");
    state.dismiss("nope");
    assert_eq!(state.notices.len(), 1);
}
