//! Small-talk detection for chat-style queries.
//!
//! The chat helper receives free-form messages. Greetings, thanks, and
//! questions about the assistant itself should be answered without touching
//! the document store, so they are classified before a search runs.

use std::fmt;

use serde::Serialize;

use crate::normalize::normalize_text;

/// Small-talk categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Hello, good morning.
    Greet,
    /// How are you.
    Status,
    /// Who are you.
    WhoAmI,
    /// What can you do.
    Capabilities,
    /// How do I search.
    HowTo,
    /// Help requests.
    Help,
    /// Thanks.
    Thanks,
    /// Goodbye.
    Bye,
    /// Short message with no recognizable request.
    SmallTalk,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Greet => "greet",
            Self::Status => "status",
            Self::WhoAmI => "whoami",
            Self::Capabilities => "capabilities",
            Self::HowTo => "howto",
            Self::Help => "help",
            Self::Thanks => "thanks",
            Self::Bye => "bye",
            Self::SmallTalk => "smalltalk",
        };
        write!(f, "{name}")
    }
}

/// Whole messages that map directly to an intent.
static EXACT: &[(Intent, &[&str])] = &[
    (
        Intent::Greet,
        &[
            "привет",
            "прив",
            "здравствуй",
            "здравствуйте",
            "добрый день",
            "добрый вечер",
            "доброе утро",
            "hi",
            "hello",
            "hey",
        ],
    ),
    (
        Intent::Status,
        &["как дела", "как ты", "как поживаешь", "что нового"],
    ),
    (
        Intent::WhoAmI,
        &["кто ты", "ты кто", "кто вы", "ты бот", "это бот"],
    ),
    (
        Intent::Capabilities,
        &[
            "что ты умеешь",
            "что ты можешь",
            "что умеешь",
            "что можешь",
            "возможности",
        ],
    ),
    (
        Intent::HowTo,
        &[
            "как пользоваться",
            "как пользоваться ботом",
            "как пользоваться чатом",
            "как искать",
            "как искать тут",
            "как найти",
        ],
    ),
    (
        Intent::Help,
        &["помоги", "помощь", "help", "инструкция", "команды"],
    ),
    (Intent::Thanks, &["спасибо", "спс", "thanks", "thank you"]),
    (Intent::Bye, &["пока", "до свидания", "до встречи", "bye"]),
];

/// Fragments that reveal an intent anywhere in the message, checked in order.
static CONTAINS: &[(Intent, &[&str])] = &[
    (Intent::WhoAmI, &["кто ты", "ты кто", "кто вы"]),
    (
        Intent::Capabilities,
        &["что ты уме", "что ты мож", "возможност"],
    ),
    (Intent::HowTo, &["как польз", "как искать", "как найти"]),
    (Intent::Help, &["помог", "help", "инструк"]),
    (Intent::Thanks, &["спасибо", "спс"]),
    (Intent::Bye, &["пока", "до свид"]),
];

/// Messages with at most this many words may be generic small talk.
const SHORT_MESSAGE_WORDS: usize = 3;
/// Messages of at most this many UTF-8 bytes may be generic small talk.
///
/// A Cyrillic letter takes two bytes, so a short Russian phrase such as
/// "озеро данчены" is already long enough to be searched.
const SHORT_MESSAGE_BYTES: usize = 16;

/// Classifies a chat message.
///
/// Returns `None` when the message looks like a search request.
pub fn detect_intent(message: &str) -> Option<Intent> {
    let q = normalize_text(message);
    if q.is_empty() {
        return Some(Intent::SmallTalk);
    }

    for (intent, phrases) in EXACT {
        if phrases.contains(&q.as_str()) {
            return Some(*intent);
        }
    }

    for (intent, fragments) in CONTAINS {
        if fragments.iter().any(|f| q.contains(f)) {
            return Some(*intent);
        }
    }

    if q.split_whitespace().count() <= SHORT_MESSAGE_WORDS
        && q.len() <= SHORT_MESSAGE_BYTES
    {
        return Some(Intent::SmallTalk);
    }

    None
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exact_greetings() {
        assert_eq!(detect_intent("Привет!"), Some(Intent::Greet));
        assert_eq!(detect_intent("  hello "), Some(Intent::Greet));
        assert_eq!(detect_intent("Добрый день"), Some(Intent::Greet));
    }

    #[test]
    fn exact_phrases_for_each_intent() {
        assert_eq!(detect_intent("как дела?"), Some(Intent::Status));
        assert_eq!(detect_intent("ты бот"), Some(Intent::WhoAmI));
        assert_eq!(detect_intent("что ты умеешь"), Some(Intent::Capabilities));
        assert_eq!(detect_intent("как искать"), Some(Intent::HowTo));
        assert_eq!(detect_intent("помощь"), Some(Intent::Help));
        assert_eq!(detect_intent("thank you"), Some(Intent::Thanks));
        assert_eq!(detect_intent("до свидания"), Some(Intent::Bye));
    }

    #[test]
    fn contains_heuristics() {
        assert_eq!(
            detect_intent("слушай, а кто ты вообще такой"),
            Some(Intent::WhoAmI)
        );
        assert_eq!(
            detect_intent("большое спасибо за отчеты про рыбалку"),
            Some(Intent::Thanks)
        );
    }

    #[test]
    fn empty_message_is_small_talk() {
        assert_eq!(detect_intent(""), Some(Intent::SmallTalk));
        assert_eq!(detect_intent("?!"), Some(Intent::SmallTalk));
    }

    #[test]
    fn short_messages_are_small_talk() {
        assert_eq!(detect_intent("ну ок да"), Some(Intent::SmallTalk));
    }

    #[test]
    fn short_message_limit_counts_bytes() {
        assert_eq!(detect_intent("Отчет о Днестре"), None);
        assert_eq!(detect_intent("озеро данчены"), None);
        assert_eq!(detect_intent("карп"), Some(Intent::SmallTalk));
        assert_eq!(detect_intent("lacul danceni"), Some(Intent::SmallTalk));
    }

    #[test]
    fn search_requests_are_not_small_talk() {
        assert_eq!(detect_intent("отчеты о рыбалке на озере Данчены"), None);
        assert_eq!(detect_intent("competitii feeder 2026 lacul danceni"), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(Intent::WhoAmI.to_string(), "whoami");
        assert_eq!(Intent::SmallTalk.to_string(), "smalltalk");
    }
}
