//! Domain records returned by the lore generation service.
//!
//! Both records are transient: they arrive in a service response, live in
//! the controller for the session, and are replaced by the next generation.
//! Missing string fields decode to empty strings so a partial record still
//! renders.

use std::fmt;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Lowest faction count the service accepts.
pub const MIN_FACTION_COUNT: u8 = 1;
/// Highest faction count the service accepts.
pub const MAX_FACTION_COUNT: u8 = 10;

// ============================================================================
// Faction
// ============================================================================

/// A generated in-world organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faction {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub values: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soundtrack_vibe: Option<String>,
}

/// Rendering identity of a faction within a list.
///
/// The name is the key; position is only a fallback for unnamed factions,
/// which is sound as long as lists are replaced wholesale and never
/// reordered in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactionKey<'a> {
    Name(&'a str),
    Index(usize),
}

impl Faction {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        values: impl Into<String>,
        soundtrack_vibe: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            values: values.into(),
            soundtrack_vibe,
        }
    }

    /// Identity used for list rendering and selection.
    pub fn key(&self, index: usize) -> FactionKey<'_> {
        if self.name.is_empty() {
            FactionKey::Index(index)
        } else {
            FactionKey::Name(&self.name)
        }
    }

    /// Soundtrack descriptor, if the service supplied a non-empty one.
    pub fn soundtrack(&self) -> Option<&str> {
        self.soundtrack_vibe.as_deref().filter(|s| !s.is_empty())
    }
}

// ============================================================================
// Quest
// ============================================================================

/// A generated mission record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "quest_brief")]
    pub brief: String,
    #[serde(default)]
    pub conflict: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub npcs: Npcs,
}

impl Quest {
    /// NPC names in display order.
    pub fn npc_names(&self) -> Vec<String> {
        self.npcs.names()
    }
}

// ============================================================================
// NPCs
// ============================================================================

/// The characters attached to a quest.
///
/// The service sends either a list or one comma-separated string. Lists of
/// NPC objects are reduced to their names while decoding, so the rest of the
/// crate only ever sees these two shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Npcs {
    List(Vec<String>),
    Text(String),
}

impl Default for Npcs {
    fn default() -> Self {
        Npcs::List(Vec::new())
    }
}

impl Npcs {
    /// Normalized names: the text form is split on commas and trimmed;
    /// empty segments are dropped.
    pub fn names(&self) -> Vec<String> {
        match self {
            Npcs::List(names) => names
                .iter()
                .map(|n| n.trim())
                .filter(|n| !n.is_empty())
                .map(str::to_string)
                .collect(),
            Npcs::Text(text) => text
                .split(',')
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Markdown form: lists are comma-joined, text is kept verbatim.
    pub fn display_text(&self) -> String {
        match self {
            Npcs::List(names) => names.join(", "),
            Npcs::Text(text) => text.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names().is_empty()
    }
}

impl From<Vec<String>> for Npcs {
    fn from(names: Vec<String>) -> Self {
        Npcs::List(names)
    }
}

impl From<&str> for Npcs {
    fn from(text: &str) -> Self {
        Npcs::Text(text.to_string())
    }
}

impl Serialize for Npcs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Npcs::List(names) => names.serialize(serializer),
            Npcs::Text(text) => serializer.serialize_str(text),
        }
    }
}

/// One element of an NPC list as the service may send it.
#[derive(Deserialize)]
#[serde(untagged)]
enum NpcEntry {
    Name(String),
    Record {
        #[serde(default)]
        name: String,
    },
}

impl<'de> Deserialize<'de> for Npcs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NpcsVisitor;

        impl<'de> Visitor<'de> for NpcsVisitor {
            type Value = Npcs;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a comma-separated string or a list of NPCs")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Npcs, E> {
                Ok(Npcs::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Npcs, E> {
                Ok(Npcs::Text(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Npcs, E> {
                Ok(Npcs::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<Npcs, E> {
                Ok(Npcs::default())
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Npcs, D::Error> {
                d.deserialize_any(self)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Npcs, A::Error> {
                let mut names = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(entry) = seq.next_element::<NpcEntry>()? {
                    match entry {
                        NpcEntry::Name(name) | NpcEntry::Record { name } => names.push(name),
                    }
                }
                Ok(Npcs::List(names))
            }
        }

        deserializer.deserialize_any(NpcsVisitor)
    }
}
