use showreel_core::{
    plan_transitions, ContactError, ContactPayload, DeferredVideo, FilterState, ItemTransition,
    PlaybackParams,
};

const GALLERY: &[&str] = &["creatives", "general", "creatives"];

fn visible_set(plan: &[ItemTransition]) -> Vec<usize> {
    plan.iter()
        .enumerate()
        .filter(|(_, transition)| **transition == ItemTransition::Show)
        .map(|(index, _)| index)
        .collect()
}

#[test]
fn filter_selects_exactly_matching_items() {
    let plan = plan_transitions(GALLERY, "creatives");
    assert_eq!(visible_set(&plan), vec![0, 2]);
    let plan = plan_transitions(GALLERY, "general");
    assert_eq!(visible_set(&plan), vec![1]);
}

#[test]
fn repeated_switch_is_idempotent() {
    let mut state = FilterState::new("creatives");
    state.switch("general");
    let first: Vec<_> = GALLERY
        .iter()
        .map(|tags| state.transition_for(tags))
        .collect();
    state.switch("general");
    let second: Vec<_> = GALLERY
        .iter()
        .map(|tags| state.transition_for(tags))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn unknown_category_hides_everything() {
    let plan = plan_transitions(GALLERY, "films");
    assert_eq!(visible_set(&plan), Vec::<usize>::new());
}

#[test]
fn deferred_embed_round_trip_keeps_attributes() {
    let descriptor = DeferredVideo {
        src: "https://www.youtube.com/embed/dQw4w9WgXcQ".to_string(),
        title: "Showreel 2024".to_string(),
        allow: "accelerometer; autoplay; encrypted-media".to_string(),
        allowfullscreen: true,
    };
    let params = PlaybackParams {
        autoplay: false,
        origin: Some("https://kaif.example".to_string()),
    };
    let url = descriptor.player_src(&params).unwrap();
    assert!(url.starts_with(&descriptor.src));
    assert!(url.contains("origin=https%3A%2F%2Fkaif.example"));
    assert_eq!(descriptor.title, "Showreel 2024");
}

#[test]
fn empty_fields_never_build_a_relay_request() {
    for (name, contact, message) in [
        ("", "a@b.c", "hello"),
        ("Kaif", "", "hello"),
        ("Kaif", "a@b.c", "   "),
    ] {
        let payload = ContactPayload::trimmed(name, contact, message);
        assert!(matches!(
            payload.validate(),
            Err(ContactError::MissingName)
                | Err(ContactError::MissingContact)
                | Err(ContactError::MissingMessage)
        ));
    }
}
