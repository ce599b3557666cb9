// =============================================================================
// Fichier : logger.rs
// Rôle    : Session de logging : construction, presets et émission
// =============================================================================

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use super::channel::{Backend, Channel};
use super::color::{self, ColorKey};
use super::layout::Layout;
use super::level::Severity;
use super::settings::{self, LogConfig, DEFAULT_LOG_FILE};
use super::sink::ConsoleTarget;

// =============================================================================
// Options de construction
// =============================================================================

/// Paramètres d'une session de logging.
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    /// Nom du canal.
    pub name: String,
    /// Fichier de configuration JSON. `None` : configuration intégrée.
    pub config_path: Option<PathBuf>,
    pub color_disabled: bool,
    pub level: LevelFilter,
    pub console: bool,
    /// Flux de la console (stderr par défaut).
    pub console_target: ConsoleTarget,
    pub file: bool,
    /// Fichier de log explicite ; sinon `logfile` de la configuration, sinon
    /// [`DEFAULT_LOG_FILE`]. Un chemin vide compte comme absent.
    pub log_file: Option<PathBuf>,
    pub console_layout: Layout,
    pub file_layout: Layout,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            name: "logworks".to_string(),
            config_path: None,
            color_disabled: false,
            level: LevelFilter::Info,
            console: true,
            console_target: ConsoleTarget::Stderr,
            file: false,
            log_file: None,
            console_layout: Layout::console(),
            file_layout: Layout::file(),
        }
    }
}

impl LoggerOptions {
    /// Preset console seule.
    pub fn console_only() -> Self {
        Self {
            level: LevelFilter::Debug,
            console: true,
            file: false,
            ..Self::default()
        }
    }

    /// Preset fichier seul : jamais de couleurs dans un fichier.
    pub fn file_only() -> Self {
        Self {
            level: LevelFilter::Debug,
            console: false,
            file: true,
            color_disabled: true,
            ..Self::default()
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// Session de logging liée à un canal nommé.
pub struct Logger {
    config: Arc<LogConfig>,
    color_disabled: bool,
    backend: Box<dyn Backend>,
}

impl Logger {
    /// Construit une session. Seule l'ouverture du fichier de log peut échouer.
    pub fn new(options: LoggerOptions) -> Result<Self> {
        let config = settings::resolve(options.config_path.as_deref());

        let mut channel = Channel::new(options.name, options.level);
        if options.console {
            channel.attach_console(options.console_target, options.console_layout);
        }
        if options.file {
            let path = log_file_path(options.log_file, &config);
            channel.attach_file(&path, options.file_layout)?;
        }
        log::debug!("Session de log créée : {channel:?}");

        Ok(Self::with_backend(config, options.color_disabled, Box::new(channel)))
    }

    /// Session console seule, configuration intégrée.
    pub fn console() -> Result<Self> {
        Self::new(LoggerOptions::console_only())
    }

    /// Session fichier seul, configuration intégrée.
    pub fn file(path: Option<&Path>) -> Result<Self> {
        Self::new(LoggerOptions {
            log_file: path.map(Path::to_path_buf),
            ..LoggerOptions::file_only()
        })
    }

    /// Construit une session sur un backend quelconque.
    pub fn with_backend(
        config: Arc<LogConfig>,
        color_disabled: bool,
        backend: Box<dyn Backend>,
    ) -> Self {
        Self {
            config,
            color_disabled,
            backend,
        }
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    pub const fn color_disabled(&self) -> bool {
        self.color_disabled
    }

    /// Vrai si les libellés seront colorés.
    pub fn use_colors(&self) -> bool {
        color::use_colors(&self.config, self.color_disabled)
    }

    pub fn name(&self) -> &str {
        self.backend.name()
    }

    // ── Émission ──────────────────────────────────────────────────────────────

    /// Émet `text` avec le libellé coloré de `severity`.
    ///
    /// `text` peut être absent ; aucune validation n'est faite.
    pub fn emit<'a>(&self, severity: Severity, text: impl Into<Option<&'a str>>) {
        let label = self.with_color(severity.into(), severity.label());
        self.backend.emit(severity.level(), text.into(), &label);
    }

    pub fn debug<'a>(&self, text: impl Into<Option<&'a str>>) {
        self.emit(Severity::Debug, text);
    }

    pub fn info<'a>(&self, text: impl Into<Option<&'a str>>) {
        self.emit(Severity::Info, text);
    }

    /// Émis au niveau INFO, avec le libellé "[OK]".
    pub fn ok<'a>(&self, text: impl Into<Option<&'a str>>) {
        self.emit(Severity::Ok, text);
    }

    pub fn warning<'a>(&self, text: impl Into<Option<&'a str>>) {
        self.emit(Severity::Warning, text);
    }

    pub fn error<'a>(&self, text: impl Into<Option<&'a str>>) {
        self.emit(Severity::Error, text);
    }

    // ── Couleurs ──────────────────────────────────────────────────────────────

    /// Retourne `text` avec la couleur de `key`, selon la configuration.
    pub fn with_color(&self, key: ColorKey, text: &str) -> String {
        color::colorize_label(text, key.as_str(), &self.config, self.color_disabled)
    }

    pub fn with_debug_color(&self, text: &str) -> String {
        self.with_color(Severity::Debug.into(), text)
    }

    pub fn with_info_color(&self, text: &str) -> String {
        self.with_color(Severity::Info.into(), text)
    }

    pub fn with_ok_color(&self, text: &str) -> String {
        self.with_color(Severity::Ok.into(), text)
    }

    pub fn with_warning_color(&self, text: &str) -> String {
        self.with_color(Severity::Warning.into(), text)
    }

    pub fn with_error_color(&self, text: &str) -> String {
        self.with_color(Severity::Error.into(), text)
    }

    /// Couleur d'un nom de canal ou de logger.
    pub fn with_name_color(&self, text: &str) -> String {
        self.with_color(ColorKey::Name, text)
    }

    // ── Cycle de vie ─────────────────────────────────────────────────────────

    /// Installe la session comme logger global de la façade `log`.
    pub fn install(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.backend.level());
        log::set_boxed_logger(Box::new(self))
    }

    /// Vide et libère les sinks (fichier fermé).
    pub fn close(self) {
        drop(self);
    }
}

/// Fichier de log effectif : explicite, puis `logfile`, puis le défaut.
/// Un chemin vide est ignoré.
fn log_file_path(explicit: Option<PathBuf>, config: &LogConfig) -> PathBuf {
    let non_empty = |path: Option<PathBuf>| path.filter(|p| !p.as_os_str().is_empty());
    non_empty(explicit)
        .or_else(|| non_empty(config.log_file_path.clone()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.backend.enabled(metadata.level())
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let severity = Severity::from_level(record.level());
        let label = self.with_color(severity.into(), severity.label());
        let message = record.args().to_string();
        self.backend.emit(severity.level(), Some(&message), &label);
    }

    fn flush(&self) {
        self.backend.flush();
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.backend.flush();
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name())
            .field("config", &self.config)
            .field("color_disabled", &self.color_disabled)
            .finish()
    }
}
