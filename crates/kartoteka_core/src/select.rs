//! Index-or-key selection protocol shared by every lookup flow.
//!
//! The shell shows an ordered key list and accepts either a 1-based
//! position into that exact list or a literal key typed directly. The
//! ambiguity is resolved once here, not inside every repository.

/// Operator choice parsed from raw selection input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyChoice {
    ByIndex(usize),
    ByKey(String),
}

impl KeyChoice {
    /// Classifies raw input: all-digit input is a candidate index,
    /// everything else is a literal key.
    pub fn parse(input: &str) -> Self {
        if !input.is_empty() && input.bytes().all(|byte| byte.is_ascii_digit()) {
            if let Ok(position) = input.parse::<usize>() {
                return Self::ByIndex(position);
            }
        }
        Self::ByKey(input.to_string())
    }

    /// Resolves the choice against the most recently listed key ordering.
    ///
    /// An in-range index wins even when its digits are themselves a valid
    /// key; an out-of-range index falls back to a literal key lookup.
    pub fn resolve(&self, keys: &[String]) -> String {
        match self {
            Self::ByIndex(position) if (1..=keys.len()).contains(position) => {
                keys[position - 1].clone()
            }
            Self::ByIndex(position) => position.to_string(),
            Self::ByKey(key) => key.clone(),
        }
    }
}

/// Parses and resolves in one step.
pub fn resolve_key(input: &str, keys: &[String]) -> String {
    KeyChoice::parse(input).resolve(keys)
}
