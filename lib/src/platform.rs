use std::fmt;
use std::path::{Path, PathBuf};

/// Operating systems with a known browser data layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Windows,
    Macos,
    Linux,
}

impl Os {
    /// Detect the compile target's OS, `None` for anything else
    pub fn current() -> Option<Self> {
        if cfg!(target_os = "windows") {
            Some(Os::Windows)
        } else if cfg!(target_os = "macos") {
            Some(Os::Macos)
        } else if cfg!(target_os = "linux") {
            Some(Os::Linux)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Os::Windows => "windows",
            Os::Macos => "macos",
            Os::Linux => "linux",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Supported browser families (all share the Chromium bookmarks format)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Browser {
    Chrome,
    Edge,
    Brave,
}

impl Browser {
    pub const ALL: [Browser; 3] = [Browser::Chrome, Browser::Edge, Browser::Brave];

    /// Name as shown in menus and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Edge => "edge",
            Browser::Brave => "brave",
        }
    }

    /// Parse browser from string (case-insensitive)
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "chrome" => Some(Browser::Chrome),
            "edge" => Some(Browser::Edge),
            "brave" => Some(Browser::Brave),
            _ => None,
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Profiles-root directories relative to the home directory, one row per
/// supported (os, browser) pair. A pair absent from this table is
/// unsupported, never defaulted.
const PROFILE_ROOTS: &[(Os, Browser, &[&str])] = &[
    (
        Os::Windows,
        Browser::Chrome,
        &["AppData", "Local", "Google", "Chrome", "User Data"],
    ),
    (
        Os::Windows,
        Browser::Edge,
        &["AppData", "Local", "Microsoft", "Edge", "User Data"],
    ),
    (
        Os::Windows,
        Browser::Brave,
        &["AppData", "Local", "BraveSoftware", "Brave-Browser", "User Data"],
    ),
    (
        Os::Macos,
        Browser::Chrome,
        &["Library", "Application Support", "Google", "Chrome"],
    ),
    (
        Os::Macos,
        Browser::Edge,
        &["Library", "Application Support", "Microsoft Edge"],
    ),
    (
        Os::Macos,
        Browser::Brave,
        &["Library", "Application Support", "BraveSoftware", "Brave-Browser"],
    ),
    (Os::Linux, Browser::Chrome, &[".config", "google-chrome"]),
    (Os::Linux, Browser::Edge, &[".config", "microsoft-edge"]),
    (
        Os::Linux,
        Browser::Brave,
        &[".config", "BraveSoftware", "Brave-Browser"],
    ),
];

/// Profiles root for a (os, browser) pair under the given home directory.
/// Pure table lookup, no existence check.
pub fn profiles_root(os: Os, browser: Browser, home: &Path) -> Option<PathBuf> {
    PROFILE_ROOTS
        .iter()
        .find(|(o, b, _)| *o == os && *b == browser)
        .map(|(_, _, segments)| {
            segments
                .iter()
                .fold(home.to_path_buf(), |path, seg| path.join(seg))
        })
}

/// Full path to a profile's bookmarks file. No existence check.
pub fn bookmarks_file(os: Os, browser: Browser, home: &Path, profile: &str) -> Option<PathBuf> {
    profiles_root(os, browser, home).map(|root| root.join(profile).join("Bookmarks"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_browser_from_string() {
        assert_eq!(Browser::from_string("chrome"), Some(Browser::Chrome));
        assert_eq!(Browser::from_string("Chrome"), Some(Browser::Chrome));
        assert_eq!(Browser::from_string("CHROME"), Some(Browser::Chrome));
        assert_eq!(Browser::from_string("edge"), Some(Browser::Edge));
        assert_eq!(Browser::from_string("brave"), Some(Browser::Brave));
        assert_eq!(Browser::from_string("firefox"), None);
        assert_eq!(Browser::from_string(""), None);
    }

    #[test]
    fn test_browser_name() {
        assert_eq!(Browser::Chrome.name(), "chrome");
        assert_eq!(Browser::Edge.name(), "edge");
        assert_eq!(Browser::Brave.name(), "brave");
    }

    #[rstest]
    #[case(Os::Windows, Browser::Chrome, "AppData/Local/Google/Chrome/User Data")]
    #[case(Os::Windows, Browser::Edge, "AppData/Local/Microsoft/Edge/User Data")]
    #[case(
        Os::Windows,
        Browser::Brave,
        "AppData/Local/BraveSoftware/Brave-Browser/User Data"
    )]
    #[case(Os::Macos, Browser::Chrome, "Library/Application Support/Google/Chrome")]
    #[case(Os::Macos, Browser::Edge, "Library/Application Support/Microsoft Edge")]
    #[case(
        Os::Macos,
        Browser::Brave,
        "Library/Application Support/BraveSoftware/Brave-Browser"
    )]
    #[case(Os::Linux, Browser::Chrome, ".config/google-chrome")]
    #[case(Os::Linux, Browser::Edge, ".config/microsoft-edge")]
    #[case(Os::Linux, Browser::Brave, ".config/BraveSoftware/Brave-Browser")]
    fn test_profiles_root_table(#[case] os: Os, #[case] browser: Browser, #[case] suffix: &str) {
        let home = Path::new("/home/user");
        let root = profiles_root(os, browser, home).unwrap();
        assert!(root.starts_with(home));
        assert!(
            root.ends_with(suffix),
            "{} does not end with {}",
            root.display(),
            suffix
        );
    }

    #[test]
    fn test_bookmarks_file_appends_profile_and_filename() {
        let home = Path::new("/home/user");
        let path = bookmarks_file(Os::Linux, Browser::Chrome, home, "Profile 2").unwrap();
        assert_eq!(
            path,
            Path::new("/home/user/.config/google-chrome/Profile 2/Bookmarks")
        );
    }

    #[test]
    fn test_every_pair_has_a_row() {
        let home = Path::new("/h");
        for os in [Os::Windows, Os::Macos, Os::Linux] {
            for browser in Browser::ALL {
                assert!(
                    profiles_root(os, browser, home).is_some(),
                    "missing row for {}/{}",
                    os,
                    browser
                );
            }
        }
    }
}
