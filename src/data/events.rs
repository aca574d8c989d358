use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventCategory {
    Hackathon,
    Competition,
    Mentorship,
    Workshop,
}

impl EventCategory {
    pub fn label(self) -> &'static str {
        match self {
            EventCategory::Hackathon => "Hackathon",
            EventCategory::Competition => "Competition",
            EventCategory::Mentorship => "Mentorship",
            EventCategory::Workshop => "Workshop",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            EventCategory::Hackathon => "💻",
            EventCategory::Competition => "🏆",
            EventCategory::Mentorship => "👥",
            EventCategory::Workshop => "💡",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            EventCategory::Hackathon => "badge badge-blue",
            EventCategory::Competition => "badge badge-orange",
            EventCategory::Mentorship => "badge badge-green",
            EventCategory::Workshop => "badge badge-purple",
        }
    }
}

/// One card in the upcoming events grid.
///
/// `capacity >= registered` is expected of the data but not enforced; the
/// helpers below stay sane either way.
#[derive(Clone, Debug, PartialEq)]
pub struct EventListing {
    pub id: u32,
    pub title: &'static str,
    /// ISO `YYYY-MM-DD`.
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub category: EventCategory,
    pub registration_open: bool,
    pub capacity: u32,
    pub registered: u32,
    pub prize: &'static str,
    pub cta: &'static str,
}

impl EventListing {
    /// Share of seats taken, in percent, capped at 100.
    pub fn registration_percent(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        (self.registered as f64 / self.capacity as f64 * 100.0).min(100.0)
    }

    pub fn spots_left(&self) -> u32 {
        self.capacity.saturating_sub(self.registered)
    }

    /// `3/15/2025` style date; the raw string when it doesn't parse.
    pub fn display_date(&self) -> String {
        match NaiveDate::parse_from_str(self.date, "%Y-%m-%d") {
            Ok(date) => date.format("%-m/%-d/%Y").to_string(),
            Err(_) => self.date.to_string(),
        }
    }
}

pub const UPCOMING_EVENTS: &[EventListing] = &[
    EventListing {
        id: 1,
        title: "RIDEHack 4.0: AI for Good",
        date: "2025-03-15",
        time: "09:00 AM",
        location: "JIIT Noida Campus",
        description: "Annual hackathon focusing on AI solutions for social good. Build innovative applications that can make a positive impact on society.",
        category: EventCategory::Hackathon,
        registration_open: true,
        capacity: 300,
        registered: 87,
        prize: "₹10L Total Prize Pool",
        cta: "Register Now",
    },
    EventListing {
        id: 2,
        title: "Startup Pitch Championship",
        date: "2025-04-20",
        time: "10:00 AM",
        location: "Innovation Auditorium",
        description: "Pitch your startup idea to a panel of investors and industry experts. Winner receives ₹5L seed funding and incubation support.",
        category: EventCategory::Competition,
        registration_open: true,
        capacity: 50,
        registered: 23,
        prize: "₹5L Seed Funding",
        cta: "Apply to Pitch",
    },
    EventListing {
        id: 3,
        title: "Industry Mentor Connect",
        date: "2025-05-10",
        time: "02:00 PM",
        location: "RIDE Conference Hall",
        description: "One-on-one mentoring sessions with industry leaders. Get guidance on business strategy, funding, and scaling.",
        category: EventCategory::Mentorship,
        registration_open: true,
        capacity: 100,
        registered: 45,
        prize: "Free Mentoring Sessions",
        cta: "Book Session",
    },
    EventListing {
        id: 4,
        title: "Innovation Workshop Series",
        date: "2025-06-05",
        time: "11:00 AM",
        location: "Tech Lab, JIIT",
        description: "Hands-on workshop on emerging technologies including IoT, Blockchain, and Machine Learning applications.",
        category: EventCategory::Workshop,
        registration_open: false,
        capacity: 80,
        registered: 15,
        prize: "Certificates & Goodies",
        cta: "Notify Me",
    },
];
