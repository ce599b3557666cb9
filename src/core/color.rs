// =============================================================================
// Fichier : color.rs
// Rôle    : Colorisation des libellés de niveau (séquences SGR)
// =============================================================================

use std::borrow::Cow;

use super::level::Severity;
use super::settings::LogConfig;

const RESET: &str = "\x1b[0m";

/// Clé de recherche dans la table `colors`.
///
/// Une par sévérité, plus `Name` pour colorer un nom de canal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKey {
    Level(Severity),
    Name,
}

impl ColorKey {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Level(severity) => severity.key(),
            Self::Name => "name",
        }
    }
}

impl From<Severity> for ColorKey {
    fn from(severity: Severity) -> Self {
        Self::Level(severity)
    }
}

/// Entoure `text` du code couleur `code`, puis réinitialise.
///
/// Retourne `text` tel quel si `code` vaut `None`.
pub fn paint(text: &str, code: Option<u8>) -> String {
    match code {
        Some(n) => format!("\x1b[{n}m{text}{RESET}"),
        None => text.to_string(),
    }
}

/// Indique si les couleurs doivent être utilisées.
pub const fn use_colors(config: &LogConfig, color_disabled: bool) -> bool {
    !color_disabled && config.colorize
}

/// Colore `label` avec la couleur configurée pour `key`.
///
/// Le libellé est retourné inchangé si les couleurs sont désactivées, ou si
/// la clé n'a pas de couleur (absente, `null` ou `0`).
pub fn colorize_label(label: &str, key: &str, config: &LogConfig, color_disabled: bool) -> String {
    if !use_colors(config, color_disabled) {
        return label.to_string();
    }
    paint(label, config.color_for(key))
}

/// Retire les séquences SGR (`ESC [ ... m`) de `text`.
pub fn strip_sgr(text: &str) -> Cow<'_, str> {
    if !text.contains('\x1b') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("\x1b[") {
        out.push_str(&rest[..start]);
        let params = &rest[start + 2..];
        match params.find(|c: char| !(c.is_ascii_digit() || c == ';')) {
            Some(end) if params[end..].starts_with('m') => rest = &params[end + 1..],
            _ => {
                out.push_str(&rest[start..start + 2]);
                rest = params;
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}
