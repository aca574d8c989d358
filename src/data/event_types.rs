/// A kind of event the organization runs, shown in the "Types of Events" grid.
#[derive(Clone, Debug, PartialEq)]
pub struct EventType {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    /// Extra class on the card, picks the background gradient.
    pub tint: &'static str,
}

pub const EVENT_TYPES: &[EventType] = &[
    EventType {
        id: 1,
        title: "Hackathons",
        description: "Intensive coding competitions where teams collaborate to build innovative solutions within 24-48 hours. Compete for prizes and recognition.",
        icon: "💻",
        features: &[
            "24-48 hour sprints",
            "Team collaboration",
            "Innovation challenges",
            "Prize pools up to ₹10L",
        ],
        tint: "tint-blue",
    },
    EventType {
        id: 2,
        title: "Workshops & Seminars",
        description: "Learn from industry experts through hands-on workshops and insightful seminars covering latest technologies and business strategies.",
        icon: "👥",
        features: &[
            "Expert-led sessions",
            "Hands-on learning",
            "Networking opportunities",
            "Industry insights",
        ],
        tint: "tint-green",
    },
    EventType {
        id: 3,
        title: "Pitch Competitions",
        description: "Present your startup ideas to investors and industry leaders. Win funding, mentorship, and incubation opportunities.",
        icon: "🏆",
        features: &[
            "Investor presentations",
            "Seed funding opportunities",
            "Mentorship programs",
            "Incubation support",
        ],
        tint: "tint-yellow",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_lists_features() {
        for event_type in EVENT_TYPES {
            assert_eq!(event_type.features.len(), 4, "{}", event_type.title);
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<u32> = EVENT_TYPES.iter().map(|t| t.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), EVENT_TYPES.len());
    }
}
