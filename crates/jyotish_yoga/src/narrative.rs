//! Narrative bundles.
//!
//! Bundles are flat JSON maps from `<id>.<key>` to a template, embedded at
//! build time and parsed once. A `{detail}` placeholder is filled from the
//! evaluation. Lookups fall back from the requested language to English,
//! then from the rule's own key to the `generic.<key>` entry.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

type Bundle = HashMap<String, String>;

static EN: OnceLock<Bundle> = OnceLock::new();
static HI: OnceLock<Bundle> = OnceLock::new();

/// Narrative language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    /// Parses a language tag; anything other than Hindi reads as English.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase();
        if tag == "hi" || tag.starts_with("hi-") || tag.starts_with("hi_") {
            Self::Hi
        } else {
            Self::En
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }
}

fn load(language: Language, source: &'static str) -> Bundle {
    serde_json::from_str(source).unwrap_or_else(|e| {
        warn!(language = language.tag(), error = %e, "narrative bundle unreadable");
        Bundle::new()
    })
}

fn bundle(language: Language) -> &'static Bundle {
    match language {
        Language::En => EN.get_or_init(|| load(language, include_str!("narratives/en.json"))),
        Language::Hi => HI.get_or_init(|| load(language, include_str!("narratives/hi.json"))),
    }
}

fn resolve<'b>(primary: &'b Bundle, fallback: &'b Bundle, key: &str) -> Option<&'b str> {
    primary
        .get(key)
        .or_else(|| fallback.get(key))
        .map(String::as_str)
}

fn fill(template: &str, detail: Option<&str>) -> String {
    template.replace("{detail}", detail.unwrap_or(""))
}

/// Template for `key` in `language`, falling back to English.
pub fn lookup(language: Language, key: &str) -> Option<&'static str> {
    resolve(bundle(language), bundle(Language::En), key)
}

/// Narrative for a rule outcome. Empty only when neither the rule's key nor
/// the generic key exists in any bundle.
pub fn narrate(language: Language, id: &str, key: &str, detail: Option<&str>) -> String {
    lookup(language, &format!("{id}.{key}"))
        .or_else(|| lookup(language, &format!("generic.{key}")))
        .map(|t| fill(t, detail))
        .unwrap_or_default()
}
