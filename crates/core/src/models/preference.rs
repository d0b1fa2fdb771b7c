//! Per-customer taste signals.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::Phone;

/// How many top characteristics recommendations look at.
pub const DEFAULT_TOP_CHARACTERISTICS: usize = 3;

/// What a customer searched for, put in the cart and bought.
///
/// All three sequences are append-only and keep duplicates: repetition is
/// the signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preference {
    pub identity: Phone,
    pub characteristics: Vec<String>,
    pub purchases: Vec<String>,
    pub cart: Vec<String>,
}

impl Preference {
    /// An empty record for a customer seen for the first time.
    #[must_use]
    pub const fn new(identity: Phone) -> Self {
        Self {
            identity,
            characteristics: Vec::new(),
            purchases: Vec::new(),
            cart: Vec::new(),
        }
    }

    /// The `n` most frequent characteristics, most frequent first.
    ///
    /// Values are compared trimmed and lower-cased; blank entries are ignored.
    /// Equal counts keep the order in which each value was first recorded.
    ///
    /// ```
    /// use chatclothes_core::{Phone, Preference};
    ///
    /// let mut pref = Preference::new(Phone::parse("11987654321").unwrap());
    /// pref.characteristics = vec!["azul".into(), "azul".into(), "verde".into()];
    /// assert_eq!(pref.top_characteristics(3), vec!["azul", "verde"]);
    /// ```
    #[must_use]
    pub fn top_characteristics(&self, n: usize) -> Vec<String> {
        let mut order: Vec<String> = Vec::new();
        let mut counts: HashMap<String, usize> = HashMap::new();

        for raw in &self.characteristics {
            let value = raw.trim().to_lowercase();
            if value.is_empty() {
                continue;
            }
            let count = counts.entry(value.clone()).or_insert(0);
            if *count == 0 {
                order.push(value);
            }
            *count += 1;
        }

        // Stable sort keeps first-seen order among equal counts.
        order.sort_by_key(|value| std::cmp::Reverse(counts.get(value).copied().unwrap_or(0)));
        order.truncate(n);
        order
    }
}
