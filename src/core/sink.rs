// =============================================================================
// Fichier : sink.rs
// Rôle    : Destinations de sortie (console via env_logger, fichier)
// =============================================================================

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use env_logger::{Builder, Target, WriteStyle};
use log::{LevelFilter, Log, Record};

use super::color::strip_sgr;
use super::layout::{Entry, Layout};

/// Destination recevant des lignes de log.
///
/// Une écriture ne remonte jamais d'erreur : un appel de log ne doit pas
/// échouer.
pub trait Sink: Send + Sync {
    fn write(&self, entry: &Entry<'_>);

    fn flush(&self);
}

// =============================================================================
// Console
// =============================================================================

/// Flux de sortie d'une console.
#[derive(Clone, Default)]
pub enum ConsoleTarget {
    #[default]
    Stderr,
    Stdout,
    /// Flux quelconque partagé (tests, redirection par l'application hôte).
    Writer(Arc<Mutex<dyn Write + Send>>),
}

impl ConsoleTarget {
    fn into_target(self) -> Target {
        match self {
            Self::Stderr => Target::Stderr,
            Self::Stdout => Target::Stdout,
            Self::Writer(writer) => Target::Pipe(Box::new(SharedWriter(writer))),
        }
    }
}

impl std::fmt::Debug for ConsoleTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stderr => write!(f, "Stderr"),
            Self::Stdout => write!(f, "Stdout"),
            Self::Writer(_) => write!(f, "Writer"),
        }
    }
}

struct SharedWriter(Arc<Mutex<dyn Write + Send>>);

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.0.lock() {
            Ok(mut writer) => writer.write(buf),
            Err(_) => Err(io::Error::new(io::ErrorKind::Other, "flux console verrouillé")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.0.lock() {
            Ok(mut writer) => writer.flush(),
            Err(_) => Ok(()),
        }
    }
}

/// Sortie console, écrite par un `env_logger::Logger` dédié.
///
/// Avec `WriteStyle::Auto`, env_logger retire les séquences SGR quand la
/// cible ne les supporte pas.
pub struct ConsoleSink {
    layout: Layout,
    logger: env_logger::Logger,
}

impl ConsoleSink {
    /// Console sur `target`, style d'écriture détecté automatiquement.
    pub fn new(level: LevelFilter, layout: Layout, target: ConsoleTarget) -> Self {
        Self::with_target(level, layout, target.into_target(), WriteStyle::Auto)
    }

    pub fn with_target(
        level: LevelFilter,
        layout: Layout,
        target: Target,
        write_style: WriteStyle,
    ) -> Self {
        let logger = Builder::new()
            .filter_level(level)
            .target(target)
            .write_style(write_style)
            .format(|buf, record| writeln!(buf, "{}", record.args()))
            .build();
        Self { layout, logger }
    }
}

impl Sink for ConsoleSink {
    fn write(&self, entry: &Entry<'_>) {
        let line = self.layout.render(entry);
        self.logger.log(
            &Record::builder()
                .args(format_args!("{line}"))
                .level(entry.level)
                .target(entry.channel)
                .build(),
        );
    }

    fn flush(&self) {
        self.logger.flush();
    }
}

// =============================================================================
// Fichier
// =============================================================================

/// Sortie fichier (ajout en fin de fichier).
///
/// Les lignes sont toujours écrites sans séquences SGR, même si le gabarit
/// utilise `{label}`. Le fichier est vidé après chaque ligne et fermé quand
/// le sink est libéré.
pub struct FileSink {
    path: PathBuf,
    layout: Layout,
    writer: Mutex<BufWriter<File>>,
}

impl FileSink {
    /// Ouvre (ou crée) `path`. L'erreur d'ouverture est remontée telle quelle.
    pub fn open(path: &Path, layout: Layout) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Impossible d'ouvrir le fichier de log {}", path.display()))?;
        log::debug!("Fichier de log ouvert : {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            layout,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&self, entry: &Entry<'_>) {
        let rendered = self.layout.render(entry);
        let line = strip_sgr(&rendered);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{line}").and_then(|()| writer.flush());
        }
    }

    fn flush(&self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        self.flush();
    }
}

impl std::fmt::Debug for FileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSink").field("path", &self.path).finish()
    }
}
