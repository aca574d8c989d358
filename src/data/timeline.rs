#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Milestone,
    Event,
    Achievement,
    Announcement,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Milestone => "Milestone",
            EntryKind::Event => "Event",
            EntryKind::Achievement => "Achievement",
            EntryKind::Announcement => "Announcement",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            EntryKind::Milestone => "🏆",
            EntryKind::Event => "📅",
            EntryKind::Achievement => "✅",
            EntryKind::Announcement => "💡",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            EntryKind::Milestone => "badge badge-yellow",
            EntryKind::Event => "badge badge-blue",
            EntryKind::Achievement => "badge badge-green",
            EntryKind::Announcement => "badge badge-purple",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryStatus {
    Completed,
    Active,
    Upcoming,
}

impl EntryStatus {
    pub fn label(self) -> &'static str {
        match self {
            EntryStatus::Completed => "Completed",
            EntryStatus::Active => "In progress",
            EntryStatus::Upcoming => "Upcoming",
        }
    }
}

/// A milestone on the "Our Journey" timeline.
///
/// Entries are one flat ordered list. `group` marks the first entry of a
/// year block and is rendered as a header above it.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEntry {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub kind: EntryKind,
    pub status: EntryStatus,
    pub participants: Option<u32>,
    pub group: Option<&'static str>,
}

/// Even entries sit left of the spine, odd ones right.
pub fn is_left(index: usize) -> bool {
    index % 2 == 0
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        id: 1,
        title: "Platform Launch",
        date: "January 2024",
        description: "Official launch of our event management platform with over 1000 registered users in the first week.",
        kind: EntryKind::Milestone,
        status: EntryStatus::Completed,
        participants: Some(1000),
        group: Some("2024"),
    },
    TimelineEntry {
        id: 2,
        title: "Tech Summit 2024",
        date: "March 2024",
        description: "Our biggest conference yet with 500+ attendees, 20 speakers, and groundbreaking tech announcements.",
        kind: EntryKind::Event,
        status: EntryStatus::Completed,
        participants: Some(500),
        group: None,
    },
    TimelineEntry {
        id: 3,
        title: "Community Milestone",
        date: "June 2024",
        description: "Reached 10,000 active community members and launched our mentorship program.",
        kind: EntryKind::Achievement,
        status: EntryStatus::Completed,
        participants: Some(10_000),
        group: None,
    },
    TimelineEntry {
        id: 4,
        title: "AI Workshop Series",
        date: "September 2024",
        description: "Launched comprehensive AI workshop series covering machine learning, deep learning, and practical applications.",
        kind: EntryKind::Event,
        status: EntryStatus::Active,
        participants: None,
        group: None,
    },
    TimelineEntry {
        id: 5,
        title: "Global Expansion",
        date: "December 2024",
        description: "Expanding our events to 15 new cities worldwide, bringing our community closer together.",
        kind: EntryKind::Announcement,
        status: EntryStatus::Upcoming,
        participants: None,
        group: None,
    },
    TimelineEntry {
        id: 6,
        title: "Innovation Awards",
        date: "February 2025",
        description: "Annual innovation awards ceremony celebrating the best projects and contributions from our community.",
        kind: EntryKind::Event,
        status: EntryStatus::Upcoming,
        participants: None,
        group: Some("2025"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_alternate_sides() {
        let sides: Vec<bool> = (0..TIMELINE.len()).map(is_left).collect();
        assert_eq!(sides, vec![true, false, true, false, true, false]);
    }

    #[test]
    fn entries_are_in_reading_order() {
        let ids: Vec<u32> = TIMELINE.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn first_entry_opens_a_group() {
        assert!(TIMELINE[0].group.is_some());
        let groups: Vec<&str> = TIMELINE.iter().filter_map(|entry| entry.group).collect();
        assert_eq!(groups, vec!["2024", "2025"]);
    }

    #[test]
    fn completed_entries_precede_upcoming_ones() {
        let first_upcoming = TIMELINE
            .iter()
            .position(|entry| entry.status == EntryStatus::Upcoming)
            .unwrap();
        assert!(TIMELINE[..first_upcoming]
            .iter()
            .all(|entry| entry.status != EntryStatus::Upcoming));
        assert!(TIMELINE[first_upcoming..]
            .iter()
            .all(|entry| entry.status == EntryStatus::Upcoming));
    }

    #[test]
    fn kind_labels_are_capitalized() {
        for entry in TIMELINE {
            let label = entry.kind.label();
            assert!(label.chars().next().unwrap().is_uppercase());
        }
    }
}
