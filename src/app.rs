// =============================================================================
// Fichier : app.rs
// Rôle    : Exemples d'utilisation affichés par le binaire de démonstration
// =============================================================================

use std::path::PathBuf;

use anyhow::Result;
use log::LevelFilter;
use logworks::{Layout, Logger, LoggerOptions};

/// Déroule les exemples. `config_path` est transmis à chaque session.
pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    println!(
        "#\n# logworks {} : quelques exemples\n#\n",
        logworks::version().unwrap_or("(version inconnue)")
    );

    println!("Code :\n\n    let logger = Logger::new(LoggerOptions::default())?;\n");
    println!("Résultat (pas de debug) :\n");
    let logger = Logger::new(LoggerOptions {
        config_path: config_path.clone(),
        ..LoggerOptions::default()
    })?;
    logger.debug("Debug verbeux");
    logger.info("Quelques informations");
    logger.ok("Tout va bien");
    logger.warning("Danger ! Danger !");
    logger.error("Quelque chose s'est mal passé");
    logger.close();

    println!("\nCode :\n\n    let logger = Logger::new(LoggerOptions {{ level: LevelFilter::Debug, .. }})?;\n");
    println!("Résultat (avec debug) :\n");
    let logger = Logger::new(LoggerOptions {
        config_path: config_path.clone(),
        level: LevelFilter::Debug,
        ..LoggerOptions::default()
    })?;
    logger.debug("Debug verbeux");
    logger.close();

    println!("\nSans couleurs :\n\n    let logger = Logger::new(LoggerOptions {{ color_disabled: true, .. }})?;\n");
    println!("Résultat :\n");
    let logger = Logger::new(LoggerOptions {
        name: "exemple2".to_string(),
        config_path: config_path.clone(),
        color_disabled: true,
        ..LoggerOptions::default()
    })?;
    logger.info("Quelques informations");
    logger.ok("Tout va bien");
    logger.warning("Danger ! Danger !");
    logger.error("Quelque chose s'est mal passé");
    logger.close();

    println!("\nGabarit personnalisé :\n\n    Layout::new(\"{{label}} - {{asctime}} - {{message}}\").with_date_format(\"%H:%M:%S\")?\n");
    println!("Résultat :\n");
    let logger = Logger::new(LoggerOptions {
        name: "exemple3".to_string(),
        config_path,
        console_layout: Layout::new("{label} - {asctime} - {message}")
            .with_date_format("%H:%M:%S")?,
        ..LoggerOptions::default()
    })?;
    logger.info("Informations personnalisées");
    println!("\nNom coloré : {}", logger.with_name_color(logger.name()));

    Ok(())
}
