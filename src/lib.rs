// =============================================================================
// logworks — Surcouche de logging standardisée
// =============================================================================
//
// Architecture :
//   core/settings — Configuration JSON et résolution (intégrée / vide)
//   core/color    — Colorisation des libellés (séquences SGR)
//   core/level    — Sévérités DEBUG, INFO, OK, WARNING, ERROR
//   core/layout   — Gabarits de ligne (horodatage, libellé, message)
//   core/sink     — Sorties console (env_logger) et fichier
//   core/channel  — Backend : canal nommé, seuil, sinks
//   core/logger   — Session : construction, presets, émission
//
// Licence : MIT
// =============================================================================

pub mod core;

pub use crate::core::channel::{Backend, Channel};
pub use crate::core::color::{colorize_label, paint, strip_sgr, ColorKey};
pub use crate::core::layout::{Entry, Layout};
pub use crate::core::level::Severity;
pub use crate::core::logger::{Logger, LoggerOptions};
pub use crate::core::settings::{resolve, resolve_with, LogConfig, DEFAULT_LOG_FILE};
pub use crate::core::sink::{ConsoleSink, ConsoleTarget, FileSink, Sink};

/// Version du paquet, si connue à la compilation.
pub fn version() -> Option<&'static str> {
    option_env!("CARGO_PKG_VERSION")
}
