//! Topic and sub-topic vocabulary.
//!
//! A `Topic` is the active top-level subject of conversation; the
//! neutral "main menu" state is represented as `Option<Topic>::None`.
//! A `SubTopic` is a subdivision within one topic, selected fresh from
//! each matched utterance.

use serde::{Deserialize, Serialize};

/// The active top-level topic of conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// Tuition fees, payments, balances, and sponsorships.
    Fees,
    /// Registrar, dean of students, exams office, finance office.
    Administration,
    /// Accommodation applications, fees, rules, and facilities.
    Hostels,
    /// Exam results, transcripts, remarking, and supplementaries.
    Results,
    /// Library, contacts, events, and campus facilities.
    General,
}

impl Topic {
    /// All topics in their declared priority order.
    ///
    /// This order is contractual: it is the tie-break when detection
    /// keyword sets overlap.
    pub const ALL: [Topic; 5] = [
        Topic::Fees,
        Topic::Administration,
        Topic::Hostels,
        Topic::Results,
        Topic::General,
    ];

    /// Returns the quick-reply label shown on the main menu.
    pub fn menu_label(&self) -> &'static str {
        match self {
            Self::Fees => "Fees Information",
            Self::Administration => "Administration",
            Self::Hostels => "Hostels",
            Self::Results => "Results",
            Self::General => "General Information",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Fees => "fees",
            Self::Administration => "administration",
            Self::Hostels => "hostels",
            Self::Results => "results",
            Self::General => "general",
        };
        write!(f, "{}", name)
    }
}

/// A topic subdivision, selected per-utterance within an active topic.
///
/// Each variant belongs to exactly one `Topic`; the pair
/// (topic, sub-topic) keys the response-rotation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubTopic {
    // Fees
    Payment,
    Deadlines,
    Balance,
    Sponsorship,

    // Administration
    Registrar,
    Dean,
    Exams,
    Finance,

    // Hostels
    Application,
    HostelFees,
    Rules,
    HostelFacilities,

    // Results
    Access,
    Transcripts,
    Remarking,
    Supplementary,

    // General
    Library,
    Contacts,
    Events,
    CampusFacilities,
}

impl SubTopic {
    /// Returns the topic this sub-topic belongs to.
    pub fn topic(&self) -> Topic {
        match self {
            Self::Payment | Self::Deadlines | Self::Balance | Self::Sponsorship => Topic::Fees,
            Self::Registrar | Self::Dean | Self::Exams | Self::Finance => Topic::Administration,
            Self::Application | Self::HostelFees | Self::Rules | Self::HostelFacilities => {
                Topic::Hostels
            }
            Self::Access | Self::Transcripts | Self::Remarking | Self::Supplementary => {
                Topic::Results
            }
            Self::Library | Self::Contacts | Self::Events | Self::CampusFacilities => {
                Topic::General
            }
        }
    }
}
