use std::io::{BufRead, Write};
use std::path::Path;

use marktree::bookmarks::{self, BookmarkFile, BookmarkNode};
use marktree::error::{MarktreeError, Result};
use marktree::platform::{self, Browser, Os};
use marktree::profiles;
use marktree::tree;

use crate::format::json::JsonDocument;
use crate::format::OutputFormat;
use crate::output::colorize::{Colorize, ColorizeHeader, ColorizeTree};

pub struct ShellOptions {
    /// Preselected browser (flag or config), skips the first prompt
    pub browser: Option<Browser>,
    /// Preselected profile directory name, skips discovery and the second prompt
    pub profile: Option<String>,
    pub format: OutputFormat,
    pub color: bool,
}

/// The prompt-driven flow over an injected input/output pair.
///
/// Holds the process's single input reader for its whole lifetime, so tests
/// can substitute a scripted reader and capture the output.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Browser choice, profile choice, load, print. Every failure is
    /// terminal: one message, no retry.
    pub fn run(&mut self, os: Os, home: &Path, opts: &ShellOptions) -> Result<()> {
        let browser = match opts.browser {
            Some(browser) => {
                log::info!("browser preselected: {}", browser);
                browser
            }
            None => {
                let names: Vec<&str> = Browser::ALL.iter().map(|b| b.name()).collect();
                let idx = self.prompt_choice("Select browser:", &names)?;
                Browser::ALL[idx]
            }
        };

        let profile = match &opts.profile {
            Some(profile) => {
                log::info!("profile preselected: {:?}", profile);
                profile.clone()
            }
            None => self.choose_profile(os, browser, home)?,
        };

        // TODO: build this path from the selected browser; only the Chrome
        // layout is wired up for the final read.
        let path = platform::bookmarks_file(os, Browser::Chrome, home, &profile).ok_or(
            MarktreeError::UnsupportedPlatform {
                os: os.name().to_string(),
                browser: Browser::Chrome.name().to_string(),
            },
        )?;
        let doc = bookmarks::load_bookmarks(&path)?;

        match opts.format {
            OutputFormat::Json => {
                let json = JsonDocument(&doc)
                    .render()
                    .map_err(|e| MarktreeError::Other(e.to_string()))?;
                writeln!(self.output, "{}", json)?;
            }
            OutputFormat::Tree => self.print_sections(&doc, opts.color)?,
        }
        Ok(())
    }

    fn choose_profile(&mut self, os: Os, browser: Browser, home: &Path) -> Result<String> {
        let root = platform::profiles_root(os, browser, home).ok_or(
            MarktreeError::UnsupportedPlatform {
                os: os.name().to_string(),
                browser: browser.name().to_string(),
            },
        )?;

        // An unreadable root and an empty one get the same user-facing
        // message; the underlying cause only goes to the log.
        let profiles = match profiles::list_profiles(&root) {
            Ok(profiles) if !profiles.is_empty() => profiles,
            Ok(_) => return Err(MarktreeError::NoProfiles),
            Err(e) => {
                log::debug!("profile discovery failed: {}", e);
                return Err(MarktreeError::NoProfiles);
            }
        };

        let names: Vec<&str> = profiles.iter().map(String::as_str).collect();
        let idx = self.prompt_choice("Select profile:", &names)?;
        Ok(profiles[idx].clone())
    }

    /// Present numbered options and read one line. One shot: non-numeric or
    /// out-of-range input aborts instead of re-prompting.
    fn prompt_choice(&mut self, title: &str, options: &[&str]) -> Result<usize> {
        writeln!(self.output, "{}", title)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "{}) {}", i + 1, option)?;
        }
        write!(self.output, "Enter choice (number): ")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        parse_choice(line.trim(), options.len())
    }

    fn print_sections(&mut self, doc: &BookmarkFile, color: bool) -> Result<()> {
        self.print_section("=== Bookmark Bar ===", &doc.roots.bookmark_bar, color, false)?;
        self.print_section("=== Other Bookmarks ===", &doc.roots.other, color, true)?;
        self.print_section("=== Synced Bookmarks ===", &doc.roots.synced, color, true)?;
        Ok(())
    }

    fn print_section(
        &mut self,
        header: &str,
        node: &BookmarkNode,
        color: bool,
        leading_blank: bool,
    ) -> Result<()> {
        if leading_blank {
            writeln!(self.output)?;
        }
        if color {
            writeln!(self.output, "{}", ColorizeHeader(header).to_colored())?;
            write!(self.output, "{}", ColorizeTree(node).to_colored())?;
        } else {
            writeln!(self.output, "{}", header)?;
            tree::write_tree(&mut self.output, node, 0)?;
        }
        Ok(())
    }
}

/// Parse a menu answer: 1-based, must land in [1, count]
pub fn parse_choice(input: &str, count: usize) -> Result<usize> {
    let choice: usize = input.parse().map_err(|_| MarktreeError::InvalidChoice)?;
    if choice < 1 || choice > count {
        return Err(MarktreeError::InvalidChoice);
    }
    Ok(choice - 1)
}
