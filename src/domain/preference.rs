use serde::Deserialize;

/// Typed value for a preference-store key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    Bool(bool),
    Int(i64),
    String(String),
}

impl PreferenceValue {
    /// `defaults write` type flag.
    pub fn type_flag(&self) -> &'static str {
        match self {
            PreferenceValue::Bool(_) => "-bool",
            PreferenceValue::Int(_) => "-int",
            PreferenceValue::String(_) => "-string",
        }
    }

    /// Value argument as passed to `defaults write`.
    pub fn to_arg(&self) -> String {
        match self {
            PreferenceValue::Bool(value) => value.to_string(),
            PreferenceValue::Int(value) => value.to_string(),
            PreferenceValue::String(value) => value.clone(),
        }
    }

    /// Whether the raw text printed by `defaults read` represents this value.
    pub fn matches(&self, raw: &str) -> bool {
        let raw = raw.trim();
        match self {
            PreferenceValue::Bool(value) => match raw {
                "1" | "true" | "YES" => *value,
                "0" | "false" | "NO" => !*value,
                _ => false,
            },
            PreferenceValue::Int(value) => raw.parse::<i64>().is_ok_and(|parsed| parsed == *value),
            PreferenceValue::String(value) => raw == value,
        }
    }
}

/// A single key write in the preference store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Preference {
    pub domain: String,
    pub key: String,
    pub value: PreferenceValue,
}

impl std::fmt::Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = {}", self.domain, self.key, self.value.to_arg())
    }
}
