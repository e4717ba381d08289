use feed_shared::datefmt::{DateFmt, DateFmtErr};
use feed_shared::settings::{Settings, SettingsErr};
use leptos::prelude::*;
use thiserror::Error;
use tracing::{debug, error};

use app::App;
use app::page::startup_error::StartupError;

pub mod app;
pub mod logger;
pub mod toolbox;

/// Feed configuration compiled into the binary.
pub const FEED_TOML: &str = include_str!("../../feed.toml");

const FALLBACK_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum StartErr {
    #[error("settings: {0}")]
    Settings(#[from] SettingsErr),

    #[error("date format: {0}")]
    DateFmt(#[from] DateFmtErr),
}

pub fn load(toml: &str) -> Result<(Settings, DateFmt), StartErr> {
    let settings = Settings::new_from_str(toml)?;
    let date_fmt = settings.date_fmt()?;
    Ok((settings, date_fmt))
}

pub fn start() {
    console_error_panic_hook::set_once();

    match load(FEED_TOML) {
        Ok((settings, date_fmt)) => {
            logger::simple_web_logger_init(&settings.log.filter);
            debug!("mounting feed with {} posts", settings.posts.len());
            leptos::mount::mount_to_body(move || view! { <App settings date_fmt /> });
        }
        Err(err) => {
            logger::simple_web_logger_init(FALLBACK_LOG_FILTER);
            error!("failed to start feed: {err}");
            let msg = err.to_string();
            leptos::mount::mount_to_body(move || view! { <StartupError msg /> });
        }
    }
}

#[cfg(test)]
mod lib_tests {
    use super::{FEED_TOML, StartErr, load};
    use test_log::test;

    #[test]
    fn test_load_shipped_feed() {
        let (settings, _date_fmt) = load(FEED_TOML).unwrap();
        assert!(!settings.posts.is_empty());
    }

    #[test]
    fn test_load_err() {
        assert!(matches!(load("nope = ["), Err(StartErr::Settings(_))));
    }

    #[test]
    fn test_load_bad_offset() {
        let toml = FEED_TOML.replace("utc_offset_hours = -3", "utc_offset_hours = 90");
        assert!(matches!(load(&toml), Err(StartErr::DateFmt(_))));
    }
}
