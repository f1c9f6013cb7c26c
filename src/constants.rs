//! Application constants
//!
//! Centralized location for the service address, timings and user-facing text.

use std::time::Duration;

/// Base URL of the catalog service, fixed at build time.
///
/// Override with `USD_GAMES_API_URL=http://host:port cargo build`.
pub const API_BASE_URL: &str = match option_env!("USD_GAMES_API_URL") {
    Some(url) => url,
    None => "http://192.168.15.2:8080",
};

/// Collection path on the catalog service
pub const ITEMS_PATH: &str = "/jogos";

/// How long the splash screen stays up before the catalog is mounted
pub const SPLASH_DURATION: Duration = Duration::from_millis(3000);

/// Brand title shown on the splash and catalog header
pub const APP_TITLE: &str = "U$D GAMES";

/// Catalog subtitle
pub const APP_SUBTITLE: &str = "GAME CATALOG";

/// Log file written next to the working directory
pub const LOG_FILE: &str = "usd-games.log";

pub const ALERT_TITLE: &str = "Error";
pub const MSG_FILL_ALL_FIELDS: &str = "Fill in all fields";
pub const MSG_SAVE_FAILED: &str = "Could not save the game";
pub const MSG_DELETE_FAILED: &str = "Could not delete the game";
