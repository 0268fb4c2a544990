use crate::view::{DEFAULT_ATTRIBUTION, DEFAULT_TILE_URL, DEFAULT_ZOOM, MapConfig, TileLayer};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mapty",
    about = "Replay a recorded map-workout session and print what it logged"
)]
pub struct Cli {
    /// Session script (JSON array or JSON lines of events). `-` reads stdin.
    #[arg(value_name = "SCRIPT", default_value = "-")]
    pub script: PathBuf,

    /// Zoom level for the initial view and list navigation.
    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: u8,

    /// Base tile URL template.
    #[arg(long, default_value = DEFAULT_TILE_URL)]
    pub tiles: String,

    /// Attribution shown with the base tiles.
    #[arg(long, default_value = DEFAULT_ATTRIBUTION)]
    pub attribution: String,

    /// Print a JSON snapshot instead of the list markup.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

impl Cli {
    pub fn map_config(&self) -> MapConfig {
        MapConfig {
            zoom: self.zoom,
            tiles: TileLayer {
                url_template: self.tiles.clone(),
                attribution: self.attribution.clone(),
            },
            ..MapConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_map_config() {
        let cli = Cli::parse_from(["mapty", "session.jsonl", "--zoom", "15", "-vv"]);
        let config = cli.map_config();
        assert_eq!(config.zoom, 15);
        assert_eq!(config.tiles, TileLayer::default());
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.script, PathBuf::from("session.jsonl"));
    }

    #[test]
    fn defaults_read_stdin() {
        let cli = Cli::parse_from(["mapty"]);
        assert_eq!(cli.script, PathBuf::from("-"));
        assert_eq!(cli.map_config(), MapConfig::default());
        assert!(!cli.json);
    }
}
