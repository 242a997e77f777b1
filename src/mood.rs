use crate::catalog::ActivityId;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Heartbroken,
    Healing,
    Thriving,
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub background: &'static str,
    pub background_dark: &'static str,
    pub text: &'static str,
    pub text_dark: &'static str,
    pub progress: &'static str,
}

impl Mood {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 25.0 {
            Self::Heartbroken
        } else if percentage < 50.0 {
            Self::Healing
        } else if percentage < 75.0 {
            Self::Thriving
        } else {
            Self::Over
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Heartbroken => "😭",
            Self::Healing => "😕",
            Self::Thriving => "😊",
            Self::Over => "🥳",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Heartbroken => "Still in the ice cream and tissues phase 🍦😢",
            Self::Healing => "Making progress! You've stopped checking their Instagram 📱",
            Self::Thriving => "Look at you, thriving! Their loss 💅",
            Self::Over => "Completely over them! Time to write a self-help book 📚✨",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Heartbroken => Palette {
                background: "#fef2f2",
                background_dark: "#3b1414",
                text: "#7f1d1d",
                text_dark: "#fee2e2",
                progress: "#dc2626",
            },
            Self::Healing => Palette {
                background: "#fff7ed",
                background_dark: "#3b2410",
                text: "#7c2d12",
                text_dark: "#ffedd5",
                progress: "#f97316",
            },
            Self::Thriving => Palette {
                background: "#eff6ff",
                background_dark: "#12233f",
                text: "#1e3a8a",
                text_dark: "#dbeafe",
                progress: "#3b82f6",
            },
            Self::Over => Palette {
                background: "#f0fdf4",
                background_dark: "#0f2f1d",
                text: "#14532d",
                text_dark: "#dcfce7",
                progress: "#16a34a",
            },
        }
    }

    /// The activity this bucket nudges toward next.
    pub fn next_step(self) -> ActivityId {
        match self {
            Self::Heartbroken => ActivityId::Friends,
            Self::Healing => ActivityId::Hobby,
            Self::Thriving => ActivityId::Dating,
            Self::Over => ActivityId::Travel,
        }
    }

    /// Advice never suggests a next step that is already part of the routine.
    pub fn advice(self, activities: &BTreeSet<ActivityId>) -> &'static str {
        let done = activities.contains(&self.next_step());
        match (self, done) {
            (Self::Heartbroken, false) => {
                "Call a friend tonight. You don't have to talk about it, just don't be alone with it."
            }
            (Self::Heartbroken, true) => {
                "Keep leaning on your friends. The tissues phase is shorter with company."
            }
            (Self::Healing, false) => {
                "Pick up a new hobby. Give your hands something to do besides scrolling."
            }
            (Self::Healing, true) => {
                "Your new hobby is paying off. Go deeper and let it become part of who you are."
            }
            (Self::Thriving, false) => {
                "Maybe it's time to start talking to someone new. No pressure, just practice."
            }
            (Self::Thriving, true) => {
                "Already back out there? Take it slow and enjoy being chosen on purpose."
            }
            (Self::Over, false) => {
                "Book the trip you kept postponing. Make memories that have nothing to do with them."
            }
            (Self::Over, true) => {
                "Passport stamps and a healed heart. Send a postcard to your past self."
            }
        }
    }
}

pub fn share_text(percentage: f64) -> String {
    format!(
        "I'm {}% over my ex! How about you? Try the Breakup Recovery Calculator! 🔗",
        percentage.clamp(0.0, 100.0).round()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_follow_quarter_thresholds() {
        assert_eq!(Mood::from_percentage(0.0), Mood::Heartbroken);
        assert_eq!(Mood::from_percentage(24.99), Mood::Heartbroken);
        assert_eq!(Mood::from_percentage(25.0), Mood::Healing);
        assert_eq!(Mood::from_percentage(49.99), Mood::Healing);
        assert_eq!(Mood::from_percentage(50.0), Mood::Thriving);
        assert_eq!(Mood::from_percentage(74.99), Mood::Thriving);
        assert_eq!(Mood::from_percentage(75.0), Mood::Over);
        assert_eq!(Mood::from_percentage(100.0), Mood::Over);
    }

    #[test]
    fn advice_skips_next_step_already_taken() {
        let none = BTreeSet::new();
        let with_hobby: BTreeSet<_> = [ActivityId::Hobby].into_iter().collect();

        let fresh = Mood::Healing.advice(&none);
        let taken = Mood::Healing.advice(&with_hobby);
        assert_ne!(fresh, taken);
        assert!(fresh.contains("Pick up a new hobby"));

        // Unrelated activities do not change the advice.
        assert_eq!(Mood::Thriving.advice(&with_hobby), Mood::Thriving.advice(&none));
    }

    #[test]
    fn every_bucket_has_distinct_display_fields() {
        let moods = [Mood::Heartbroken, Mood::Healing, Mood::Thriving, Mood::Over];
        for (i, a) in moods.iter().enumerate() {
            for b in &moods[i + 1..] {
                assert_ne!(a.emoji(), b.emoji());
                assert_ne!(a.message(), b.message());
                assert_ne!(a.palette(), b.palette());
                assert_ne!(a.next_step(), b.next_step());
            }
        }
    }

    #[test]
    fn share_text_rounds_percentage() {
        assert_eq!(
            share_text(55.99),
            "I'm 56% over my ex! How about you? Try the Breakup Recovery Calculator! 🔗"
        );
        assert!(share_text(140.0).starts_with("I'm 100%"));
    }
}
