//! Static trigger -> reply table.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::CoreError;

/// Built-in English and French entries.
///
/// Languages are independent keys: "bonjour" and "hello" are unrelated.
const BUILTIN_RESPONSES: &[(&str, &str)] = &[
    ("bonjour", "Bonjour! Comment puis-je vous aider?"),
    ("hello", "Hello! How can I help you?"),
    ("hi", "Hi there! How can I help you?"),
    ("comment vas-tu", "Je vais très bien, merci! Et vous?"),
    ("how are you", "I'm doing great, thank you! How about you?"),
    ("au revoir", "Au revoir! Bonne journée!"),
    ("goodbye", "Goodbye! Have a great day!"),
    (
        "help",
        "You can ask me basic questions in English or French. Try: 'hello', 'how are you', 'goodbye'",
    ),
    (
        "aide",
        "Vous pouvez me poser des questions basiques en français ou en anglais. Essayez: 'bonjour', 'comment vas-tu', 'au revoir'",
    ),
    ("météo", "Désolé, je ne peux pas vous donner la météo actuelle."),
    ("weather", "Sorry, I can't provide current weather information."),
    ("heure", "Désolé, je ne peux pas vous donner l'heure exacte."),
    ("time", "Sorry, I can't provide the exact time."),
];

/// Immutable mapping from normalized trigger phrase to reply.
///
/// Lookups are exact: the whole key must equal a trigger. Triggers are
/// stored lowercased so they can match input normalized by the
/// [`Responder`](crate::Responder).
#[derive(Debug, Clone, Default)]
pub struct ResponseTable {
    entries: HashMap<String, String>,
}

impl ResponseTable {
    /// The built-in bilingual table, constructed once per process.
    pub fn builtin() -> &'static ResponseTable {
        static TABLE: OnceLock<ResponseTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let entries = BUILTIN_RESPONSES
                .iter()
                .map(|(trigger, reply)| (trigger.to_string(), reply.to_string()))
                .collect();
            ResponseTable { entries }
        })
    }

    /// Build a table from (trigger, reply) pairs.
    ///
    /// Triggers are lowercased. Empty triggers and triggers that collide
    /// after lowercasing are rejected.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut entries = HashMap::new();
        for (trigger, reply) in pairs {
            let trigger = trigger.as_ref().to_lowercase();
            if trigger.is_empty() {
                return Err(CoreError::InvalidInput("trigger must not be empty".to_string()));
            }
            if entries.contains_key(&trigger) {
                return Err(CoreError::DuplicateTrigger(trigger));
            }
            entries.insert(trigger, reply.into());
        }
        Ok(Self { entries })
    }

    /// Parse a JSON object of `"trigger": "reply"` entries.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut pairs = Vec::with_capacity(object.len());
        for (trigger, reply) in object {
            match reply {
                serde_json::Value::String(reply) => pairs.push((trigger, reply)),
                other => {
                    return Err(CoreError::InvalidInput(format!(
                        "reply for '{}' must be a string, got {}",
                        trigger, other
                    )))
                }
            }
        }
        Self::from_pairs(pairs)
    }

    /// Look up the reply for an already-normalized key.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of triggers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no triggers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All triggers, sorted.
    pub fn triggers(&self) -> Vec<&str> {
        let mut triggers: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        triggers.sort_unstable();
        triggers
    }
}
