use std::collections::HashSet;

use config::{Config, File, FileFormat};
use thiserror::Error;
use tracing::trace;

use crate::datefmt::{DateFmt, DateFmtErr};
use crate::post::{Author, Post};

#[derive(Debug, Error)]
pub enum SettingsErr {
    #[error("config error {0}")]
    Config(#[from] config::ConfigError),

    #[error("post id {0} is used more than once")]
    DuplicatePostId(u64),
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Settings {
    pub log: Log,
    pub locale: Locale,
    #[serde(default)]
    pub thread: Thread,
    pub profile: Profile,
    pub viewer: Author,
    #[serde(default)]
    pub posts: Vec<Post>,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Log {
    pub filter: String,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Locale {
    pub utc_offset_hours: i8,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Thread {
    #[serde(default = "default_placeholder")]
    pub placeholder: bool,
}

impl Default for Thread {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

fn default_placeholder() -> bool {
    true
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Profile {
    pub avatar_url: String,
    pub name: String,
    pub role: String,
    pub cover_url: String,
}

impl Profile {
    pub fn author(&self) -> Author {
        Author {
            avatar_url: self.avatar_url.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

impl Settings {
    pub fn new_from_str(toml: &str) -> Result<Self, SettingsErr> {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        let mut ids = HashSet::new();
        for post in &settings.posts {
            if !ids.insert(post.id) {
                return Err(SettingsErr::DuplicatePostId(post.id.0));
            }
        }
        trace!("settings loaded with {} posts", settings.posts.len());

        Ok(settings)
    }

    pub fn date_fmt(&self) -> Result<DateFmt, DateFmtErr> {
        DateFmt::new(self.locale.utc_offset_hours)
    }
}
