use crate::models::Mood;

/// Tracks the single chosen mood. Nothing is selected until the user picks.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoodSelector {
    selected: Option<Mood>,
}

impl MoodSelector {
    pub fn selected(&self) -> Option<Mood> {
        self.selected
    }

    pub fn select(&mut self, mood: Mood) {
        self.selected = Some(mood);
    }

    pub fn is_active(&self, mood: Mood) -> bool {
        self.selected == Some(mood)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unset() {
        let selector = MoodSelector::default();
        assert_eq!(selector.selected(), None);
        assert!(Mood::ALL.iter().all(|mood| !selector.is_active(*mood)));
    }

    #[test]
    fn exactly_one_option_active_after_reselect() {
        let mut selector = MoodSelector::default();
        selector.select(Mood::Sad);
        selector.select(Mood::Happy);

        let active: Vec<Mood> = Mood::ALL
            .into_iter()
            .filter(|mood| selector.is_active(*mood))
            .collect();
        assert_eq!(active, vec![Mood::Happy]);
    }
}
