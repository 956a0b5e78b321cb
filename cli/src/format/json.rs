use marktree::bookmarks::BookmarkFile;

/// Pretty-printed JSON view of a decoded bookmarks document
pub struct JsonDocument<'a>(pub &'a BookmarkFile);

impl JsonDocument<'_> {
    pub fn render(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self.0)
    }
}
