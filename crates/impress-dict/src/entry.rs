//! Dictionary entry data structures

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Inflection groups of an orthography: group name -> inflected forms
pub type InflectionGroups = BTreeMap<String, BTreeSet<String>>;

/// One meaning of an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    /// Part-of-speech tags, possibly empty
    #[serde(default)]
    pub pos: Vec<String>,
    /// Definition strings
    pub gloss: Vec<String>,
}

impl Sense {
    pub fn new<P, G>(pos: P, gloss: G) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        G: IntoIterator,
        G::Item: Into<String>,
    {
        Self {
            pos: pos.into_iter().map(Into::into).collect(),
            gloss: gloss.into_iter().map(Into::into).collect(),
        }
    }
}

/// A written form of a headword together with its priority rank
///
/// Lower rank wins collisions; rank 0 is the canonical spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ortho {
    pub value: String,
    pub rank: u32,
    #[serde(default)]
    pub inflgrps: InflectionGroups,
}

impl Ortho {
    /// Create an orthography without inflection groups
    pub fn new(value: impl Into<String>, rank: u32) -> Self {
        Self {
            value: value.into(),
            rank,
            inflgrps: InflectionGroups::new(),
        }
    }

    /// Add an inflection group, merging into an existing group of that name
    pub fn with_inflections<F>(mut self, group: impl Into<String>, forms: F) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
    {
        self.inflgrps
            .entry(group.into())
            .or_default()
            .extend(forms.into_iter().map(Into::into));
        self
    }

    /// Whether any inflection group lists `form`
    pub fn has_inflection(&self, form: &str) -> bool {
        self.inflgrps.values().any(|forms| forms.contains(form))
    }
}

/// A dictionary headword record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub label: String,
    pub senses: Vec<Sense>,
    pub orthos: Vec<Ortho>,
}

impl Entry {
    /// Create a new entry
    pub fn new(label: impl Into<String>, senses: Vec<Sense>, orthos: Vec<Ortho>) -> Self {
        Self {
            label: label.into(),
            senses,
            orthos,
        }
    }

    /// Remove the orthography record matching `value`.
    ///
    /// An orthography whose value matches is removed outright (first match
    /// only). Failing that, `value` is discarded from every inflection group
    /// holding it, and groups left empty are dropped. Returns whether
    /// anything was removed.
    pub fn remove(&mut self, value: &str) -> bool {
        if let Some(pos) = self.orthos.iter().position(|o| o.value == value) {
            self.orthos.remove(pos);
            return true;
        }

        let mut removed = false;
        for ortho in &mut self.orthos {
            ortho.inflgrps.retain(|_, forms| {
                if forms.remove(value) {
                    removed = true;
                }
                !forms.is_empty()
            });
        }
        removed
    }

    /// Look up an orthography by value
    pub fn ortho(&self, value: &str) -> Option<&Ortho> {
        self.orthos.iter().find(|o| o.value == value)
    }

    /// Check the structural preconditions the writer relies on.
    pub fn validate(&self) -> Result<(), String> {
        if self.senses.is_empty() {
            return Err("entry has no senses".to_string());
        }
        if let Some(i) = self.senses.iter().position(|s| s.gloss.is_empty()) {
            return Err(format!("sense {} has no gloss", i));
        }
        for ortho in &self.orthos {
            if let Some((name, _)) = ortho.inflgrps.iter().find(|(_, forms)| forms.is_empty()) {
                return Err(format!(
                    "orthography `{}` has empty inflection group `{}`",
                    ortho.value, name
                ));
            }
        }
        Ok(())
    }
}
