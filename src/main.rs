// =============================================================================
// logworks — démonstration
// =============================================================================
//
// Usage : logworks [fichier-de-configuration.json]
//
// Affiche quelques exemples d'utilisation de la bibliothèque.
// =============================================================================

mod app;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    app::run(config_path)
}
