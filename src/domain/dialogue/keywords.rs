//! Declarative keyword tables for utterance matching.
//!
//! All matching is lowercase substring containment, evaluated in the
//! declared order; the first rule whose set matches wins. The sets are
//! not mutually exclusive - several (e.g. `exam`, `transcript`, `book`,
//! `facilit`) appear under more than one topic, and declaration order
//! is the only tie-break. That ambiguity is documented behavior, not a
//! defect to fix here.

use super::topic::{SubTopic, Topic};

/// Keywords that return the conversation to the main menu from any topic.
pub const RETURN_KEYWORDS: &[&str] = &["back", "main menu", "start over", "home"];

/// Keywords acknowledged with a thank-you reply that keeps the topic.
///
/// `thank` also covers `thanks` under substring matching.
pub const GRATITUDE_KEYWORDS: &[&str] = &["thank"];

/// One sub-topic's keyword set within an active topic.
#[derive(Debug, Clone, Copy)]
pub struct SubTopicRule {
    /// The sub-topic selected when this rule matches.
    pub sub_topic: SubTopic,
    /// Substrings tested against the lowercased utterance.
    pub keywords: &'static [&'static str],
}

/// One top-level topic's detection rule.
#[derive(Debug, Clone, Copy)]
pub struct TopicRule {
    /// The topic entered when this rule matches.
    pub topic: Topic,
    /// The exact quick-reply label, tested against the trimmed original text.
    pub menu_label: &'static str,
    /// Substrings tested against the lowercased utterance.
    pub keywords: &'static [&'static str],
}

/// Top-level detection rules in priority order.
pub const TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::Fees,
        menu_label: "Fees Information",
        keywords: &["fee", "payment", "sponsor"],
    },
    TopicRule {
        topic: Topic::Administration,
        menu_label: "Administration",
        keywords: &["admin", "registrar", "dean"],
    },
    TopicRule {
        topic: Topic::Hostels,
        menu_label: "Hostels",
        keywords: &["hostel", "accommodation", "dorm"],
    },
    TopicRule {
        topic: Topic::Results,
        menu_label: "Results",
        keywords: &["result", "transcript", "exam"],
    },
    TopicRule {
        topic: Topic::General,
        menu_label: "General Information",
        keywords: &["general", "info", "campus"],
    },
];

const FEES_RULES: &[SubTopicRule] = &[
    SubTopicRule {
        sub_topic: SubTopic::Payment,
        keywords: &["payment", "method", "mpesa", "bank"],
    },
    SubTopicRule {
        sub_topic: SubTopic::Deadlines,
        keywords: &["deadline", "due date", "late"],
    },
    SubTopicRule {
        sub_topic: SubTopic::Balance,
        keywords: &["balance", "outstanding", "statement"],
    },
    SubTopicRule {
        sub_topic: SubTopic::Sponsorship,
        keywords: &["sponsor", "helb", "loan"],
    },
];

const ADMINISTRATION_RULES: &[SubTopicRule] = &[
    SubTopicRule {
        sub_topic: SubTopic::Registrar,
        keywords: &["registrar", "academic record", "transcript"],
    },
    SubTopicRule {
        sub_topic: SubTopic::Dean,
        keywords: &["dean", "welfare", "counsel"],
    },
    SubTopicRule {
        sub_topic: SubTopic::Exams,
        keywords: &["exam", "examination", "card"],
    },
    SubTopicRule {
        sub_topic: SubTopic::Finance,
        keywords: &["finance", "bursar", "receipt"],
    },
];

const HOSTELS_RULES: &[SubTopicRule] = &[
    SubTopicRule {
        sub_topic: SubTopic::Application,
        keywords: &["application", "apply", "book"],
    },
    SubTopicRule {
        sub_topic: SubTopic::HostelFees,
        keywords: &["fee", "cost", "charge"],
    },
    SubTopicRule {
        sub_topic: SubTopic::Rules,
        keywords: &["rule", "regulation", "policy"],
    },
    SubTopicRule {
        sub_topic: SubTopic::HostelFacilities,
        keywords: &["facilit", "amenit", "room"],
    },
];

const RESULTS_RULES: &[SubTopicRule] = &[
    SubTopicRule {
        sub_topic: SubTopic::Access,
        keywords: &["access", "check", "view"],
    },
    SubTopicRule {
        sub_topic: SubTopic::Transcripts,
        keywords: &["transcript", "certificate", "academic"],
    },
    SubTopicRule {
        sub_topic: SubTopic::Remarking,
        keywords: &["remark", "recheck", "appeal"],
    },
    SubTopicRule {
        sub_topic: SubTopic::Supplementary,
        keywords: &["supplement", "retake", "repeat"],
    },
];

const GENERAL_RULES: &[SubTopicRule] = &[
    SubTopicRule {
        sub_topic: SubTopic::Library,
        keywords: &["library", "book", "research"],
    },
    SubTopicRule {
        sub_topic: SubTopic::Contacts,
        keywords: &["contact", "phone", "email"],
    },
    SubTopicRule {
        sub_topic: SubTopic::Events,
        keywords: &["event", "activity", "fair"],
    },
    SubTopicRule {
        sub_topic: SubTopic::CampusFacilities,
        keywords: &["facilit", "campus", "lab"],
    },
];

/// Returns the ordered sub-topic rules for a topic.
pub fn sub_topic_rules(topic: Topic) -> &'static [SubTopicRule] {
    match topic {
        Topic::Fees => FEES_RULES,
        Topic::Administration => ADMINISTRATION_RULES,
        Topic::Hostels => HOSTELS_RULES,
        Topic::Results => RESULTS_RULES,
        Topic::General => GENERAL_RULES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_rules_follow_declared_priority() {
        let topics: Vec<_> = TOPIC_RULES.iter().map(|r| r.topic).collect();
        assert_eq!(topics, Topic::ALL.to_vec());
    }

    #[test]
    fn every_topic_has_four_sub_topic_rules() {
        for topic in Topic::ALL {
            assert_eq!(sub_topic_rules(topic).len(), 4, "{} rule count", topic);
        }
    }

    #[test]
    fn sub_topic_rules_stay_within_their_topic() {
        for topic in Topic::ALL {
            for rule in sub_topic_rules(topic) {
                assert_eq!(rule.sub_topic.topic(), topic);
            }
        }
    }

    #[test]
    fn keyword_sets_are_nonempty_and_lowercase() {
        let all_rules = Topic::ALL.iter().flat_map(|t| sub_topic_rules(*t));
        for rule in all_rules {
            assert!(!rule.keywords.is_empty());
            for kw in rule.keywords {
                assert_eq!(*kw, kw.to_lowercase(), "keyword {:?} not lowercase", kw);
            }
        }
    }

    #[test]
    fn exam_keyword_is_deliberately_ambiguous() {
        // "exam" routes to Administration/Exams inside that topic, but to
        // the Results topic at top level. Declaration order decides.
        let admin_has_exam = sub_topic_rules(Topic::Administration)
            .iter()
            .any(|r| r.keywords.contains(&"exam"));
        let results_detects_exam = TOPIC_RULES
            .iter()
            .find(|r| r.topic == Topic::Results)
            .unwrap()
            .keywords
            .contains(&"exam");

        assert!(admin_has_exam);
        assert!(results_detects_exam);
    }

    #[test]
    fn menu_labels_match_topic_labels() {
        for rule in TOPIC_RULES {
            assert_eq!(rule.menu_label, rule.topic.menu_label());
        }
    }
}
