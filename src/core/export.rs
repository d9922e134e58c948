//! Export serializers for factions and quests.
//!
//! Pure string builders: nothing here touches the clipboard or the
//! filesystem. Missing fields render as empty text; nothing is validated
//! or defaulted.

use std::fmt::Write as _;

use serde::Serialize;

use super::error::ExportError;
use super::models::{Faction, Quest};

/// Output format of an export.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Markdown,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Markdown, ExportFormat::Json];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "Markdown",
            ExportFormat::Json => "JSON",
        }
    }

    /// Stable identifier used as a select option value.
    pub fn value(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "markdown",
            ExportFormat::Json => "json",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.value() == value)
    }
}

/// What to export. The variant plays the role of the loose `faction` /
/// `quest` type tag and decides the Markdown layout.
#[derive(Debug, Clone, Copy)]
pub enum ExportTarget<'a> {
    Factions(&'a [Faction]),
    Quest(&'a Quest),
    Other(&'a serde_json::Value),
}

impl ExportTarget<'_> {
    /// Suggested file stem for this target.
    pub fn file_stem(&self) -> &'static str {
        match self {
            ExportTarget::Factions(_) => "factions",
            ExportTarget::Quest(_) => "quest",
            ExportTarget::Other(_) => "export",
        }
    }
}

/// Pretty-printed JSON with a 2-space indent. Field order is preserved, so
/// parsing the output and exporting it again yields the same string.
pub fn export_to_json<T: Serialize + ?Sized>(data: &T) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Markdown for factions and quests; anything else falls back to JSON.
pub fn export_to_markdown(target: ExportTarget<'_>) -> Result<String, ExportError> {
    match target {
        ExportTarget::Factions(factions) => Ok(factions
            .iter()
            .map(faction_markdown)
            .collect::<Vec<_>>()
            .join("\n")),
        ExportTarget::Quest(quest) => Ok(quest_markdown(quest)),
        ExportTarget::Other(value) => export_to_json(value),
    }
}

/// Export `target` in `format`.
pub fn export(target: ExportTarget<'_>, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Markdown => export_to_markdown(target),
        ExportFormat::Json => match target {
            ExportTarget::Factions(factions) => export_to_json(factions),
            ExportTarget::Quest(quest) => export_to_json(quest),
            ExportTarget::Other(value) => export_to_json(value),
        },
    }
}

fn faction_markdown(faction: &Faction) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "## {}", faction.name);
    let _ = writeln!(out);
    let _ = writeln!(out, "**Symbol:** {}", faction.symbol);
    let _ = writeln!(out);
    let _ = writeln!(out, "**Values:** {}", faction.values);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "**Soundtrack:** {}",
        faction.soundtrack_vibe.as_deref().unwrap_or_default()
    );
    let _ = writeln!(out);
    out.push_str("---\n");
    out
}

fn quest_markdown(quest: &Quest) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", quest.title);
    for (heading, body) in [
        ("Brief", quest.brief.as_str()),
        ("Conflict", quest.conflict.as_str()),
        ("Location", quest.location.as_str()),
    ] {
        let _ = writeln!(out);
        let _ = writeln!(out, "## {heading}");
        let _ = writeln!(out, "{body}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "## NPCs");
    let _ = writeln!(out, "{}", quest.npcs.display_text());
    let _ = writeln!(out);
    out.push_str("---\n");
    out
}
