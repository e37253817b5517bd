use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{field} is not set — set `{key}` in rollout.toml or pass --{flag}")]
    MissingField {
        field: &'static str,
        key: &'static str,
        flag: &'static str,
    },

    #[error("invalid {field} {value:?}: {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    // ── Release tags ──
    #[error("invalid release tag {0:?}: expected v<YYYYMMDD>-<HHMMSS>")]
    InvalidTag(String),
}
