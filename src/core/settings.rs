// =============================================================================
// Fichier : settings.rs
// Rôle    : Configuration du logger (JSON) et résolution au démarrage
// =============================================================================

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::color::ColorKey;
use super::level::Severity;

/// Nom du fichier de log utilisé quand ni l'appelant ni la configuration
/// n'en fournissent un.
pub const DEFAULT_LOG_FILE: &str = "logworks.log";

// =============================================================================
// Structure de configuration
// =============================================================================

/// Configuration effective d'une session de logging.
///
/// `LogConfig::default()` est la configuration **vide** (pas de couleurs, pas
/// de fichier). La configuration intégrée s'obtient via [`LogConfig::builtin`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Toute valeur JSON « vraie » active les couleurs (`1`, `"yes"`, ...).
    #[serde(deserialize_with = "truthy")]
    pub colorize: bool,
    /// Clé de niveau → code couleur SGR (`null` = pas de couleur).
    pub colors: BTreeMap<String, Option<u8>>,
    #[serde(rename = "logfile")]
    pub log_file_path: Option<PathBuf>,
}

impl LogConfig {
    /// Configuration intégrée, construite une seule fois et partagée.
    pub fn builtin() -> Arc<Self> {
        static BUILTIN: OnceLock<Arc<LogConfig>> = OnceLock::new();
        Arc::clone(BUILTIN.get_or_init(|| {
            let mut colors: BTreeMap<String, Option<u8>> = Severity::all()
                .iter()
                .map(|s| (s.key().to_string(), Some(s.default_color())))
                .collect();
            colors.insert(ColorKey::Name.as_str().to_string(), Some(36));
            Arc::new(Self {
                colorize: true,
                colors,
                log_file_path: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            })
        }))
    }

    /// Analyse un document JSON. Aucune fusion avec la configuration intégrée :
    /// les clés absentes prennent leur valeur vide.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Format JSON invalide")
    }

    /// Charge la configuration depuis un fichier JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Impossible de lire {}", path.display()))?;
        let config = Self::from_json(&content)
            .with_context(|| format!("Configuration invalide dans {}", path.display()))?;
        log::debug!("Configuration du logger chargée depuis {}", path.display());
        Ok(config)
    }

    /// Code couleur configuré pour `key`.
    ///
    /// Absent, `null` et `0` donnent tous `None` : aucune séquence ne sera émise.
    pub fn color_for(&self, key: &str) -> Option<u8> {
        self.colors
            .get(key)
            .copied()
            .flatten()
            .filter(|&code| code != 0)
    }
}

/// Vérité d'une valeur JSON : `null`, `false`, `0`, `""`, `[]` et `{}` sont
/// faux, tout le reste est vrai.
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    })
}

// =============================================================================
// Résolution
// =============================================================================

/// Résout la configuration d'une session.
///
/// - pas de source : configuration intégrée ;
/// - source illisible ou invalide : un avertissement sur stderr et une
///   configuration **vide**.
pub fn resolve(source: Option<&Path>) -> Arc<LogConfig> {
    resolve_with(source, |warning| eprintln!("{warning}"))
}

/// Comme [`resolve`], mais l'avertissement est confié à `warn`.
///
/// L'avertissement ne passe jamais par le logger en cours de configuration.
pub fn resolve_with<F: FnMut(&str)>(source: Option<&Path>, mut warn: F) -> Arc<LogConfig> {
    let Some(path) = source else {
        return LogConfig::builtin();
    };

    match LogConfig::load(path) {
        Ok(config) => Arc::new(config),
        Err(e) => {
            warn(&format!(
                "Impossible de lire le fichier de configuration du logger '{}' ({e:#}). Ignoré.",
                path.display()
            ));
            Arc::new(LogConfig::default())
        }
    }
}
