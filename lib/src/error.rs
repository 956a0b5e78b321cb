use std::path::PathBuf;

/// Custom error type for the marktree library
///
/// One flat enum for every failure the tool can hit. All of them are
/// terminal for the current run: the binary prints the message once and
/// exits non-zero. Using `thiserror` for automatic `Error` trait
/// implementation and `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum MarktreeError {
    /// No profiles-root mapping exists for this (platform, browser) pair
    #[error("Unsupported platform or browser: {os}/{browser}")]
    UnsupportedPlatform { os: String, browser: String },

    /// The invoking user's home directory could not be resolved
    #[error("Cannot resolve home directory")]
    NoHomeDir,

    /// Profiles root listing failed
    #[error("Cannot read directory {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No profile directories found (or the root was unreadable)
    #[error("Cannot find any profiles")]
    NoProfiles,

    /// Menu input was non-numeric or out of range
    #[error("Invalid choice")]
    InvalidChoice,

    /// Bookmarks file could not be read
    #[error("Error reading bookmarks: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Bookmarks file read fine but did not decode
    #[error("Error parsing bookmarks: {0}")]
    Parse(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors not tied to a specific file above
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error for cases that don't fit other categories
    #[error("{0}")]
    Other(String),
}

/// Result type alias using MarktreeError
pub type Result<T> = std::result::Result<T, MarktreeError>;

impl From<String> for MarktreeError {
    fn from(s: String) -> Self {
        MarktreeError::Other(s)
    }
}

impl From<&str> for MarktreeError {
    fn from(s: &str) -> Self {
        MarktreeError::Other(s.to_string())
    }
}

impl From<simd_json::Error> for MarktreeError {
    fn from(err: simd_json::Error) -> Self {
        MarktreeError::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for MarktreeError {
    fn from(err: serde_yaml::Error) -> Self {
        MarktreeError::Config(err.to_string())
    }
}
