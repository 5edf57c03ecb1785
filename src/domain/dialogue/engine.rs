//! Dialogue engine.
//!
//! A total function from (utterance, current topic) to a reply. Matching
//! runs in a fixed priority order over the lowercased utterance:
//!
//! 1. global return-to-menu keywords, which drop the topic;
//! 2. global gratitude keywords, which keep the topic;
//! 3. the active topic's sub-topic rules in declared order, serving a
//!    rotated variant, or the topic's default text when none match;
//! 4. top-level topic detection (exact menu label or keyword), serving
//!    the topic overview;
//! 5. a fallback prompt with no topic.
//!
//! While a topic is active, step 3 always resolves the turn, so switching
//! topics requires returning to the menu first. Rotation state lives on
//! the engine instance; dropping the engine forgets it.

use super::keywords::{sub_topic_rules, GRATITUDE_KEYWORDS, RETURN_KEYWORDS, TOPIC_RULES};
use super::responses;
use super::rotation::RotationTracker;
use super::topic::{SubTopic, Topic};

/// Outcome of one dialogue turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// The text to show the user.
    pub text: String,
    /// The topic that is active after this turn.
    pub topic: Option<Topic>,
    /// The sub-topic that matched, if any.
    pub sub_topic: Option<SubTopic>,
}

impl Reply {
    fn new(text: impl Into<String>, topic: Option<Topic>, sub_topic: Option<SubTopic>) -> Self {
        Self {
            text: text.into(),
            topic,
            sub_topic,
        }
    }
}

/// Stateful keyword-matching responder.
#[derive(Debug, Default)]
pub struct DialogueEngine {
    rotation: RotationTracker,
}

impl DialogueEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the rotation state, as when a fresh conversation starts.
    pub fn reset(&mut self) {
        self.rotation.clear();
    }

    /// Produces the reply for one utterance given the current topic.
    ///
    /// Never fails: every input maps to some reply, with the fallback
    /// prompt as the floor.
    pub fn respond(&mut self, utterance: &str, current: Option<Topic>) -> Reply {
        let trimmed = utterance.trim();
        let lowered = trimmed.to_lowercase();

        if contains_any(&lowered, RETURN_KEYWORDS) {
            return Reply::new(responses::RETURN_TO_MENU, None, None);
        }
        if contains_any(&lowered, GRATITUDE_KEYWORDS) {
            return Reply::new(responses::GRATITUDE, current, None);
        }

        if let Some(topic) = current {
            return self.respond_in_topic(topic, &lowered);
        }

        for rule in TOPIC_RULES {
            if trimmed.eq_ignore_ascii_case(rule.menu_label)
                || contains_any(&lowered, rule.keywords)
            {
                return Reply::new(responses::topic_overview(rule.topic), Some(rule.topic), None);
            }
        }

        Reply::new(responses::FALLBACK, None, None)
    }

    fn respond_in_topic(&mut self, topic: Topic, lowered: &str) -> Reply {
        for rule in sub_topic_rules(topic) {
            if contains_any(lowered, rule.keywords) {
                let texts = responses::variants(rule.sub_topic);
                let index = self.rotation.next(topic, rule.sub_topic, texts.len());
                return Reply::new(texts[index], Some(topic), Some(rule.sub_topic));
            }
        }
        Reply::new(responses::topic_default(topic), Some(topic), None)
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod overrides {
        use super::*;

        #[test]
        fn return_keywords_drop_the_topic_before_anything_else() {
            let mut engine = DialogueEngine::new();
            // "exam" would match an Administration sub-topic, but "back" wins.
            let reply = engine.respond("back to exam results", Some(Topic::Administration));
            assert_eq!(reply.text, responses::RETURN_TO_MENU);
            assert_eq!(reply.topic, None);
            assert_eq!(reply.sub_topic, None);
        }

        #[test]
        fn gratitude_keeps_the_active_topic() {
            let mut engine = DialogueEngine::new();
            let reply = engine.respond("thanks a lot!", Some(Topic::Fees));
            assert_eq!(reply.text, responses::GRATITUDE);
            assert_eq!(reply.topic, Some(Topic::Fees));
        }

        #[test]
        fn gratitude_with_no_topic_stays_neutral() {
            let mut engine = DialogueEngine::new();
            let reply = engine.respond("thank you", None);
            assert_eq!(reply.topic, None);
        }
    }

    mod in_topic {
        use super::*;

        #[test]
        fn sub_topic_keywords_resolve_within_the_active_topic() {
            let mut engine = DialogueEngine::new();
            let reply = engine.respond("can I pay via mpesa?", Some(Topic::Fees));
            assert_eq!(reply.topic, Some(Topic::Fees));
            assert_eq!(reply.sub_topic, Some(SubTopic::Payment));
            assert_eq!(reply.text, responses::variants(SubTopic::Payment)[0]);
        }

        #[test]
        fn unmatched_utterance_gets_the_topic_default() {
            let mut engine = DialogueEngine::new();
            let reply = engine.respond("zzz nothing relevant", Some(Topic::Hostels));
            assert_eq!(reply.text, responses::topic_default(Topic::Hostels));
            assert_eq!(reply.topic, Some(Topic::Hostels));
            assert_eq!(reply.sub_topic, None);
        }

        #[test]
        fn active_topic_shadows_top_level_detection() {
            let mut engine = DialogueEngine::new();
            // "hostel" is a top-level keyword, but with Fees active the
            // utterance falls through to the Fees default instead.
            let reply = engine.respond("hostel", Some(Topic::Fees));
            assert_eq!(reply.topic, Some(Topic::Fees));
            assert_eq!(reply.text, responses::topic_default(Topic::Fees));
        }

        #[test]
        fn repeated_questions_rotate_through_variants() {
            let mut engine = DialogueEngine::new();
            let texts = responses::variants(SubTopic::Deadlines);
            for expected in [texts[0], texts[1], texts[2], texts[0]] {
                let reply = engine.respond("when is the deadline?", Some(Topic::Fees));
                assert_eq!(reply.text, expected);
            }
        }

        #[test]
        fn earlier_rule_wins_when_keywords_overlap() {
            let mut engine = DialogueEngine::new();
            // "transcript" appears under both Registrar and is the first
            // Administration rule to carry it.
            let reply = engine.respond("I need my transcript", Some(Topic::Administration));
            assert_eq!(reply.sub_topic, Some(SubTopic::Registrar));
        }

        #[test]
        fn reset_restarts_rotation() {
            let mut engine = DialogueEngine::new();
            engine.respond("payment", Some(Topic::Fees));
            engine.respond("payment", Some(Topic::Fees));
            engine.reset();
            let reply = engine.respond("payment", Some(Topic::Fees));
            assert_eq!(reply.text, responses::variants(SubTopic::Payment)[0]);
        }
    }

    mod top_level {
        use super::*;

        #[test]
        fn keyword_detection_activates_a_topic() {
            let mut engine = DialogueEngine::new();
            let reply = engine.respond("I have a hostel question", None);
            assert_eq!(reply.topic, Some(Topic::Hostels));
            assert_eq!(reply.text, responses::topic_overview(Topic::Hostels));
            assert_eq!(reply.sub_topic, None);
        }

        #[test]
        fn exact_menu_label_activates_a_topic() {
            let mut engine = DialogueEngine::new();
            let reply = engine.respond("  Fees Information  ", None);
            assert_eq!(reply.topic, Some(Topic::Fees));
        }

        #[test]
        fn detection_follows_declared_topic_order() {
            let mut engine = DialogueEngine::new();
            // "fee" (Fees) and "hostel" (Hostels) both match; Fees is first.
            let reply = engine.respond("hostel fee", None);
            assert_eq!(reply.topic, Some(Topic::Fees));
        }
    }

    mod fallback {
        use super::*;

        #[test]
        fn unknown_input_gets_the_fallback_prompt() {
            let mut engine = DialogueEngine::new();
            let reply = engine.respond("xyzzy", None);
            assert_eq!(reply.text, responses::FALLBACK);
            assert_eq!(reply.topic, None);
            assert_eq!(reply.sub_topic, None);
        }

        #[test]
        fn fallback_is_idempotent() {
            let mut engine = DialogueEngine::new();
            let first = engine.respond("xyzzy", None);
            let second = engine.respond("xyzzy", first.topic);
            assert_eq!(first, second);
        }
    }

    proptest! {
        #[test]
        fn every_input_yields_a_nonempty_reply(utterance in ".*") {
            let mut engine = DialogueEngine::new();
            for current in [None, Some(Topic::Fees), Some(Topic::Results)] {
                let reply = engine.respond(&utterance, current);
                prop_assert!(!reply.text.is_empty());
            }
        }

        #[test]
        fn matching_is_ascii_case_insensitive(
            // ASCII casings only; Unicode case variants (e.g. the long s
            // in "reſult") are out of scope for substring matching.
            topic_word in "[hH][oO][sS][tT][eE][lL]|[fF][eE][eE][sS]|[rR][eE][sS][uU][lL][tT]"
        ) {
            let mut engine = DialogueEngine::new();
            let reply = engine.respond(&topic_word, None);
            prop_assert!(reply.topic.is_some());
        }
    }
}
