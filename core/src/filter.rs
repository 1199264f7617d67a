pub const SHOW_FADE_DELAY_MS: u32 = 100;
pub const HIDE_COLLAPSE_DELAY_MS: u32 = 300;

// exact token match: `creative` must not match an item tagged `creatives`
pub fn matches_category(tags: &str, category: &str) -> bool {
    tags.split_whitespace().any(|tag| tag == category)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemTransition {
    Show,
    Hide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active: String,
}

impl FilterState {
    pub fn new(default_category: &str) -> Self {
        Self {
            active: default_category.to_string(),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn switch(&mut self, category: &str) {
        self.active.clear();
        self.active.push_str(category);
    }

    pub fn transition_for(&self, tags: &str) -> ItemTransition {
        if matches_category(tags, &self.active) {
            ItemTransition::Show
        } else {
            ItemTransition::Hide
        }
    }
}

pub fn plan_transitions(tag_lists: &[&str], category: &str) -> Vec<ItemTransition> {
    tag_lists
        .iter()
        .map(|tags| {
            if matches_category(tags, category) {
                ItemTransition::Show
            } else {
                ItemTransition::Hide
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_match_is_exact() {
        assert!(matches_category("creatives", "creatives"));
        assert!(matches_category("creatives general", "general"));
        assert!(!matches_category("creatives", "creative"));
        assert!(!matches_category("creative", "creatives"));
        assert!(!matches_category("", "creatives"));
    }

    #[test]
    fn switch_replaces_active_category() {
        let mut state = FilterState::new("creatives");
        assert_eq!(state.active(), "creatives");
        state.switch("general");
        assert_eq!(state.active(), "general");
        assert_eq!(state.transition_for("general"), ItemTransition::Show);
        assert_eq!(state.transition_for("creatives"), ItemTransition::Hide);
    }

    #[test]
    fn plan_covers_every_item_in_order() {
        let plan = plan_transitions(&["creatives", "general", "creatives"], "creatives");
        assert_eq!(
            plan,
            vec![
                ItemTransition::Show,
                ItemTransition::Hide,
                ItemTransition::Show
            ]
        );
    }
}
