//! Dialogue domain module.
//!
//! The core of the assistant: a deterministic keyword classifier over
//! (current topic, utterance), a response-rotation tracker that cycles
//! canned variants, and the quick-reply options resolver.

mod engine;
mod keywords;
mod options;
pub mod responses;
mod rotation;
mod topic;

pub use engine::{DialogueEngine, Reply};
pub use keywords::{
    sub_topic_rules, SubTopicRule, TopicRule, GRATITUDE_KEYWORDS, RETURN_KEYWORDS, TOPIC_RULES,
};
pub use options::options_for;
pub use rotation::RotationTracker;
pub use topic::{SubTopic, Topic};
