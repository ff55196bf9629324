/*!
 * Speaker registry: the set of characters who ever speak.
 *
 * Built in a single pre-pass over the raw transcript, before the timeline is
 * parsed. Membership is what matters downstream; discovery order is kept so
 * logs and reports are reproducible.
 */

use std::collections::HashSet;

use serde::Serialize;

use super::classifier::cue_speaker;

/// Distinct speaker names in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SpeakerRegistry {
    names: Vec<String>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl SpeakerRegistry {
    /// Collect every speaker named by a cue line.
    pub fn collect<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut registry = Self::default();
        for line in lines {
            if let Some(name) = cue_speaker(line.as_ref()) {
                registry.insert(name);
            }
        }
        registry
    }

    /// Register a name, ignoring duplicates. Returns true if it was new.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        self.names.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// Names in discovery order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
