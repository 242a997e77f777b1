use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityId {
    Gym,
    Friends,
    Work,
    Hobby,
    Travel,
    Therapy,
    Dating,
    Alcohol,
}

impl ActivityId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gym => "gym",
            Self::Friends => "friends",
            Self::Work => "work",
            Self::Hobby => "hobby",
            Self::Travel => "travel",
            Self::Therapy => "therapy",
            Self::Dating => "dating",
            Self::Alcohol => "alcohol",
        }
    }

    /// Variants are declared in catalog order.
    pub fn activity(self) -> &'static Activity {
        &ACTIVITIES[self as usize]
    }

    pub fn is_negative(self) -> bool {
        self.activity().negative
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownActivity(pub String);

impl fmt::Display for UnknownActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown activity '{}'", self.0)
    }
}

impl std::error::Error for UnknownActivity {}

impl FromStr for ActivityId {
    type Err = UnknownActivity;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        ACTIVITIES
            .iter()
            .map(|activity| activity.id)
            .find(|id| id.as_str() == value)
            .ok_or_else(|| UnknownActivity(value.to_string()))
    }
}

#[derive(Debug, Serialize)]
pub struct Activity {
    pub id: ActivityId,
    pub label: &'static str,
    pub negative: bool,
    pub description: &'static str,
}

pub static ACTIVITIES: [Activity; 8] = [
    Activity {
        id: ActivityId::Gym,
        label: "Gym 💪",
        negative: false,
        description: "Sweat it out and build the revenge body.",
    },
    Activity {
        id: ActivityId::Friends,
        label: "Meeting Friends 👥",
        negative: false,
        description: "Your people remind you who you were before them.",
    },
    Activity {
        id: ActivityId::Work,
        label: "Focusing on Work 💼",
        negative: false,
        description: "Channel the heartbreak into a promotion.",
    },
    Activity {
        id: ActivityId::Hobby,
        label: "New Hobby 🎨",
        negative: false,
        description: "Pottery, guitar, sourdough: anything that is yours alone.",
    },
    Activity {
        id: ActivityId::Travel,
        label: "Traveling ✈️",
        negative: false,
        description: "New places, no memories attached.",
    },
    Activity {
        id: ActivityId::Therapy,
        label: "Therapy 🧠",
        negative: false,
        description: "A professional to untangle the mess with you.",
    },
    Activity {
        id: ActivityId::Dating,
        label: "Talking to Girls 💋",
        negative: false,
        description: "Getting back out there, one conversation at a time.",
    },
    Activity {
        id: ActivityId::Alcohol,
        label: "Drinking Alcohol 🍺",
        negative: true,
        description: "Numbs tonight, costs you tomorrow.",
    },
];

pub const CAUTIONARY_POEMS: [&str; 7] = [
    "Amber liquid, false relief, a temporary veil; In morning light, the truth reveals, as healing starts to fail.",
    "Bottles empty, spirits high, but souls sink ever low; The path to healing never lies where bitter waters flow.",
    "What numbs tonight will sting at dawn, a cycle without end; The poison cup that seems a cure becomes your foe, not friend.",
    "Golden drops of sweet escape, a siren's deadly song; What dulls the pain today creates a tomorrow twice as long.",
    "In glasses deep and nights too long, we search for what's not there; True healing never comes from what we pour to drown despair.",
    "The liquid courage in your glass, a thief of time and health; Recovery demands the strength to find yourself in self.",
    "Spirits lift when spirits flow, or so the lie is told; But chains of glass hold tighter still than any heart can hold.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_exactly_one_negative_activity() {
        let negatives: Vec<_> = ACTIVITIES.iter().filter(|a| a.negative).collect();
        assert_eq!(negatives.len(), 1);
        assert_eq!(negatives[0].id, ActivityId::Alcohol);
    }

    #[test]
    fn variant_order_matches_catalog_order() {
        for (index, activity) in ACTIVITIES.iter().enumerate() {
            assert_eq!(activity.id as usize, index);
        }
    }

    #[test]
    fn activity_ids_parse_from_their_wire_names() {
        for activity in &ACTIVITIES {
            let parsed: ActivityId = activity.id.as_str().parse().unwrap();
            assert_eq!(parsed, activity.id);
            assert_eq!(parsed.activity().label, activity.label);
        }
        assert_eq!(" hobby ".parse::<ActivityId>().unwrap(), ActivityId::Hobby);
        assert_eq!(
            "karaoke".parse::<ActivityId>(),
            Err(UnknownActivity("karaoke".to_string()))
        );
    }

    #[test]
    fn serde_name_matches_display_name() {
        let json = serde_json::to_string(&ActivityId::Therapy).unwrap();
        assert_eq!(json, "\"therapy\"");
    }
}
