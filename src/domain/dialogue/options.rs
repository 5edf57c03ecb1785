//! Quick-reply options resolver.
//!
//! Maps the dialogue position to the set of suggestion chips the host
//! should offer next: sub-topic follow-ups when a sub-topic just matched,
//! the topic menu while a topic is active, and the five top-level menu
//! labels otherwise. A sub-topic that does not belong to the given topic
//! falls back to the topic menu.

use super::topic::{SubTopic, Topic};

/// Top-level menu, one entry per topic in declared order.
const MAIN_MENU: &[&str] = &[
    "Fees Information",
    "Administration",
    "Hostels",
    "Results",
    "General Information",
];

/// Returns the quick replies for the given dialogue position.
pub fn options_for(topic: Option<Topic>, sub_topic: Option<SubTopic>) -> &'static [&'static str] {
    let Some(topic) = topic else {
        return MAIN_MENU;
    };
    match sub_topic {
        Some(sub) if sub.topic() == topic => follow_ups(sub),
        _ => topic_menu(topic),
    }
}

fn topic_menu(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Fees => &[
            "Payment methods",
            "Deadlines",
            "Fee balance",
            "Sponsorships",
            "Back to main",
        ],
        Topic::Administration => &[
            "Registrar",
            "Dean of Students",
            "Exams",
            "Finance",
            "Back to main",
        ],
        Topic::Hostels => &["Application", "Fees", "Rules", "Facilities", "Back to main"],
        Topic::Results => &[
            "Access results",
            "Transcripts",
            "Remarking",
            "Supp Exams",
            "Back to main",
        ],
        Topic::General => &["Library", "Contacts", "Events", "Facilities", "Back to main"],
    }
}

fn follow_ups(sub_topic: SubTopic) -> &'static [&'static str] {
    match sub_topic {
        SubTopic::Payment => &[
            "Payment confirmation",
            "Receipt issues",
            "Bank details",
            "Back to fees",
        ],
        SubTopic::Deadlines => &[
            "Installment plans",
            "Penalty waiver",
            "Extension request",
            "Back to fees",
        ],
        SubTopic::Balance => &[
            "Balance dispute",
            "Payment history",
            "Refund process",
            "Back to fees",
        ],
        SubTopic::Sponsorship => &[
            "HELB application",
            "Bursary status",
            "Corporate sponsorship",
            "Back to fees",
        ],
        SubTopic::Registrar => &[
            "Transcript status",
            "Certificate replacement",
            "Registration issues",
            "Back to admin",
        ],
        SubTopic::Dean => &[
            "Counseling booking",
            "Club registration",
            "Disability services",
            "Back to admin",
        ],
        SubTopic::Exams => &[
            "Exam card issues",
            "Special exams",
            "Result inquiries",
            "Back to admin",
        ],
        SubTopic::Finance => &[
            "Receipt request",
            "Payment plans",
            "Sponsorship billing",
            "Back to admin",
        ],
        SubTopic::Application => &[
            "Application status",
            "Eligibility",
            "Required documents",
            "Back to hostels",
        ],
        SubTopic::HostelFees => &[
            "Payment options",
            "Additional charges",
            "Refund policy",
            "Back to hostels",
        ],
        SubTopic::Rules => &[
            "Visiting hours",
            "Prohibited items",
            "Complaint procedure",
            "Back to hostels",
        ],
        SubTopic::HostelFacilities => &[
            "Amenities",
            "Security",
            "Maintenance",
            "Back to hostels",
        ],
        SubTopic::Access => &[
            "Missing results",
            "SMS service",
            "Release schedule",
            "Back to results",
        ],
        SubTopic::Transcripts => &[
            "Order status",
            "Delivery options",
            "Verification",
            "Back to results",
        ],
        SubTopic::Remarking => &[
            "Application process",
            "Fees",
            "Timeline",
            "Back to results",
        ],
        SubTopic::Supplementary => &["Registration", "Fees", "Schedule", "Back to results"],
        SubTopic::Library => &[
            "E-resources",
            "Borrowing rules",
            "Special services",
            "Back to general",
        ],
        SubTopic::Contacts => &[
            "Emergency numbers",
            "Department contacts",
            "Campus locations",
            "Back to general",
        ],
        SubTopic::Events => &[
            "Annual events",
            "Student activities",
            "Registration",
            "Back to general",
        ],
        SubTopic::CampusFacilities => &[
            "Learning facilities",
            "Recreational",
            "Health services",
            "Back to general",
        ],
    }
}
