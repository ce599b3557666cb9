// =============================================================================
// Fichier : layout.rs
// Rôle    : Mise en forme des lignes de log (console / fichier)
// =============================================================================

use std::fmt::Write;

use anyhow::{bail, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use log::Level;

use super::level::level_name;

/// Format d'horodatage par défaut : `YYYY-MM-DD HH:MM:SS`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Gabarit console par défaut.
pub const CONSOLE_TEMPLATE: &str = "{asctime} {label} {message}";

/// Gabarit fichier par défaut (libellé jamais coloré).
pub const FILE_TEMPLATE: &str = "{asctime} [{levelname}] {message}";

/// Une ligne de log prête à être mise en forme.
#[derive(Debug, Clone)]
pub struct Entry<'a> {
    pub timestamp: DateTime<Local>,
    pub channel: &'a str,
    pub level: Level,
    /// Libellé décoré (éventuellement coloré).
    pub label: &'a str,
    pub message: Option<&'a str>,
}

/// Gabarit de ligne.
///
/// Champs reconnus : `{asctime}`, `{label}`, `{levelname}`, `{message}`,
/// `{name}`. Tout autre champ est recopié tel quel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    template: String,
    date_format: String,
}

impl Layout {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            date_format: DATE_FORMAT.to_string(),
        }
    }

    pub fn console() -> Self {
        Self::new(CONSOLE_TEMPLATE)
    }

    pub fn file() -> Self {
        Self::new(FILE_TEMPLATE)
    }

    /// Remplace le format d'horodatage (syntaxe strftime).
    pub fn with_date_format(mut self, date_format: &str) -> Result<Self> {
        if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
            bail!("Format de date invalide : {date_format}");
        }
        self.date_format = date_format.to_string();
        Ok(self)
    }

    pub fn render(&self, entry: &Entry<'_>) -> String {
        let mut out = String::with_capacity(self.template.len() + 64);
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let Some(end) = after.find('}') else {
                out.push_str(&rest[start..]);
                return out;
            };

            match &after[..end] {
                "asctime" => {
                    let _ = write!(out, "{}", entry.timestamp.format(&self.date_format));
                }
                "label" => out.push_str(entry.label),
                "levelname" => out.push_str(level_name(entry.level)),
                "message" => out.push_str(entry.message.unwrap_or_default()),
                "name" => out.push_str(entry.channel),
                other => {
                    out.push('{');
                    out.push_str(other);
                    out.push('}');
                }
            }
            rest = &after[end + 1..];
        }

        out.push_str(rest);
        out
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::console()
    }
}
