// =============================================================================
// Fichier : channel.rs
// Rôle    : Trait d'abstraction du backend et canal de log nommé
//
// Principe :
//   - Le Logger ne connaît que le trait Backend.
//   - Channel est l'implémentation réelle : seuil + liste de sinks.
// =============================================================================

use std::path::Path;

use anyhow::Result;
use chrono::Local;
use log::{Level, LevelFilter};

use super::layout::{Entry, Layout};
use super::sink::{ConsoleSink, ConsoleTarget, FileSink, Sink};

/// Backend recevant les messages déjà décorés.
pub trait Backend: Send + Sync {
    /// Nom du canal.
    fn name(&self) -> &str;

    /// Seuil minimal de sévérité.
    fn level(&self) -> LevelFilter;

    /// Émet `message` au niveau `level`, avec le libellé décoré `label`.
    ///
    /// `message` peut être absent ; il est transmis tel quel aux sinks.
    fn emit(&self, level: Level, message: Option<&str>, label: &str);

    /// Vide les sinks.
    fn flush(&self) {}

    fn enabled(&self, level: Level) -> bool {
        level <= self.level()
    }
}

/// Canal nommé possédant ses sinks.
pub struct Channel {
    name: String,
    level: LevelFilter,
    sinks: Vec<Box<dyn Sink>>,
}

impl Channel {
    pub fn new(name: impl Into<String>, level: LevelFilter) -> Self {
        Self {
            name: name.into(),
            level,
            sinks: Vec::new(),
        }
    }

    pub fn set_level(&mut self, level: LevelFilter) {
        self.level = level;
    }

    pub fn attach(&mut self, sink: Box<dyn Sink>) {
        self.sinks.push(sink);
    }

    /// Ajoute une sortie console sur `target`.
    ///
    /// Le filtre du sink reste ouvert : le seuil du canal est le seul appliqué,
    /// y compris après `set_level`.
    pub fn attach_console(&mut self, target: ConsoleTarget, layout: Layout) {
        self.attach(Box::new(ConsoleSink::new(LevelFilter::Trace, layout, target)));
    }

    /// Ajoute une sortie fichier. L'échec d'ouverture est fatal.
    pub fn attach_file(&mut self, path: &Path, layout: Layout) -> Result<()> {
        let sink = FileSink::open(path, layout)?;
        self.attach(Box::new(sink));
        Ok(())
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Backend for Channel {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> LevelFilter {
        self.level
    }

    fn emit(&self, level: Level, message: Option<&str>, label: &str) {
        if !self.enabled(level) {
            return;
        }

        let entry = Entry {
            timestamp: Local::now(),
            channel: &self.name,
            level,
            label,
            message,
        };
        for sink in &self.sinks {
            sink.write(&entry);
        }
    }

    fn flush(&self) {
        for sink in &self.sinks {
            sink.flush();
        }
    }
}

impl std::fmt::Debug for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
