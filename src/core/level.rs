// =============================================================================
// Fichier : level.rs
// Rôle    : Niveaux de sévérité (DEBUG, INFO, OK, WARNING, ERROR)
// =============================================================================

use log::Level;

/// Niveau de sévérité d'un message.
///
/// `Ok` est un synonyme cosmétique de `Info` : même sévérité côté backend,
/// mais son propre libellé et sa propre couleur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Debug,
    Info,
    Ok,
    Warning,
    Error,
}

impl Severity {
    /// Libellé entre crochets (ex: "[WARNING]").
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Debug => "[DEBUG]",
            Self::Info => "[INFO]",
            Self::Ok => "[OK]",
            Self::Warning => "[WARNING]",
            Self::Error => "[ERROR]",
        }
    }

    /// Clé utilisée dans la table `colors` de la configuration.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Code couleur SGR de la configuration intégrée.
    pub const fn default_color(&self) -> u8 {
        match self {
            Self::Debug => 37,
            Self::Info => 34,
            Self::Ok => 32,
            Self::Warning => 33,
            Self::Error => 31,
        }
    }

    /// Niveau transmis au backend `log`.
    pub const fn level(&self) -> Level {
        match self {
            Self::Debug => Level::Debug,
            Self::Info | Self::Ok => Level::Info,
            Self::Warning => Level::Warn,
            Self::Error => Level::Error,
        }
    }

    /// Sévérité correspondant à un niveau `log` (TRACE est replié sur DEBUG).
    pub const fn from_level(level: Level) -> Self {
        match level {
            Level::Error => Self::Error,
            Level::Warn => Self::Warning,
            Level::Info => Self::Info,
            Level::Debug | Level::Trace => Self::Debug,
        }
    }

    /// Liste de toutes les sévérités, de la moins à la plus grave.
    pub const fn all() -> &'static [Self] {
        &[Self::Debug, Self::Info, Self::Ok, Self::Warning, Self::Error]
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Nom de niveau écrit dans les fichiers : "DEBUG", "INFO", "WARNING", "ERROR".
///
/// Différent de `Level::as_str()` qui abrège WARN.
pub const fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
