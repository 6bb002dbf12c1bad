use super::*;
use shared::domain::MentorId;
use storage::SeedStore;

fn user(name: &str) -> UserIdentity {
    UserIdentity::from_identifier(name)
}

fn mentor(id: i64) -> Mentor {
    SeedStore::builtin()
        .expect("seed")
        .mentors()
        .iter()
        .find(|m| m.id == MentorId(id))
        .cloned()
        .expect("seed mentor")
}

fn logged_in() -> SessionState {
    SessionState::default().reduce(Intent::LoginSucceeded(user("sam@example.org")))
}

#[test]
fn starts_logged_out() {
    let state = SessionState::default();
    assert!(!state.is_logged_in());
    assert_eq!(state.page(), None);
}

#[test]
fn login_lands_on_home() {
    let state = logged_in();
    assert_eq!(state.page(), Some(Page::Home));
    assert_eq!(state.user().map(|u| u.display_name.as_str()), Some("sam"));
}

#[test]
fn intents_are_ignored_while_logged_out() {
    let state = SessionState::default()
        .reduce(Intent::Navigate(Page::Stories))
        .reduce(Intent::OpenProfile(Some(mentor(1))))
        .reduce(Intent::Logout);
    assert_eq!(state, SessionState::LoggedOut);
}

#[test]
fn header_navigation_is_unconditional() {
    let state = logged_in().reduce(Intent::Navigate(Page::Stories));
    assert_eq!(state.page(), Some(Page::Stories));
    let state = state.reduce(Intent::Navigate(Page::Mentors));
    assert_eq!(state.page(), Some(Page::Mentors));
    let state = state.reduce(Intent::Navigate(Page::Home));
    assert_eq!(state.page(), Some(Page::Home));
}

#[test]
fn opening_a_profile_selects_that_mentor() {
    let state = logged_in()
        .reduce(Intent::Navigate(Page::Mentors))
        .reduce(Intent::OpenProfile(Some(mentor(3))));
    assert_eq!(state.page(), Some(Page::MentorProfile));
    assert_eq!(state.profile_mentor().map(|m| m.id), Some(MentorId(3)));
}

#[test]
fn profile_without_selection_falls_back_to_directory() {
    let state = logged_in()
        .reduce(Intent::Navigate(Page::Mentors))
        .reduce(Intent::OpenProfile(None));
    assert_eq!(state.page(), Some(Page::Mentors));
    assert!(state.profile_mentor().is_none());

    let state = logged_in().reduce(Intent::Navigate(Page::MentorProfile));
    assert_eq!(state.page(), Some(Page::Mentors));
}

#[test]
fn back_keeps_selection_but_hides_profile() {
    let state = logged_in()
        .reduce(Intent::OpenProfile(Some(mentor(2))))
        .reduce(Intent::BackToDirectory);
    assert_eq!(state.page(), Some(Page::Mentors));
    assert!(state.profile_mentor().is_none());
    let kept = state.active().and_then(ActiveSession::selected_mentor);
    assert_eq!(kept.map(|m| m.id), Some(MentorId(2)));
}

#[test]
fn navigating_directly_to_profile_does_not_reuse_old_selection() {
    let state = logged_in()
        .reduce(Intent::OpenProfile(Some(mentor(2))))
        .reduce(Intent::BackToDirectory)
        .reduce(Intent::Navigate(Page::MentorProfile));
    assert_eq!(state.page(), Some(Page::Mentors));
}

#[test]
fn logout_then_login_resets_router_and_selection() {
    let state = logged_in()
        .reduce(Intent::OpenProfile(Some(mentor(5))))
        .reduce(Intent::Logout);
    assert_eq!(state, SessionState::LoggedOut);

    let state = state.reduce(Intent::LoginSucceeded(user("alex")));
    assert_eq!(state.page(), Some(Page::Home));
    assert!(state
        .active()
        .and_then(ActiveSession::selected_mentor)
        .is_none());
    assert_eq!(state.user().map(|u| u.identifier.as_str()), Some("alex"));
}

#[test]
fn page_routes_match_router_names() {
    let routes: Vec<&str> = [Page::Home, Page::Mentors, Page::MentorProfile, Page::Stories]
        .into_iter()
        .map(Page::route)
        .collect();
    assert_eq!(routes, vec!["home", "mentors", "mentor-profile", "stories"]);
}
