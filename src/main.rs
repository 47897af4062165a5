/// Headless mapnote entry point for native builds.
///
/// Replays a JSON array of messages through the annotator and prints the
/// resulting layer data, so the interaction core can be driven without a
/// browser.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(e) = native::run() {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;

    use mapnote::config::AppConfig;
    use mapnote::marker::MarkerIcon;
    use mapnote::{Annotator, AppError, LayerProjector, Message};

    #[derive(Parser)]
    #[command(name = "mapnote-native")]
    #[command(version)]
    #[command(about = "Replay annotation messages and print the resulting map layers")]
    struct Args {
        /// Configuration file (defaults to the user config directory)
        #[arg(long)]
        config: Option<PathBuf>,

        /// JSON array of messages to replay
        script: Option<PathBuf>,
    }

    pub fn run() -> Result<(), AppError> {
        let args = Args::parse();

        let config = match &args.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::load_from_default_path().unwrap_or_default(),
        };

        env_logger::Builder::new()
            .filter_level(config.preferences.log_level.to_level_filter())
            .parse_default_env()
            .init();

        // A configured marker icon that fails to load stops startup
        if let Some(path) = &config.marker_icon {
            let icon = MarkerIcon::load(path)?;
            log::debug!("Marker '{}' ready ({}x{})", icon.name, icon.width, icon.height);
        }

        let mut annotator = Annotator::from_config(&config);

        if let Some(script) = &args.script {
            let json = std::fs::read_to_string(script)?;
            let messages: Vec<Message> = serde_json::from_str(&json)?;
            log::info!("Replaying {} messages from {:?}", messages.len(), script);
            for message in messages {
                let outcome = annotator.update(message);
                if let Some(committed) = &outcome.committed {
                    log::debug!("Committed {}", committed.id);
                }
            }
        }

        log::info!(
            "Active tool: {}, {} features stored",
            annotator.action().name(),
            annotator.store().total_len()
        );

        let layers = LayerProjector::project(&annotator);
        println!("{}", serde_json::to_string_pretty(&layers)?);
        Ok(())
    }

}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
