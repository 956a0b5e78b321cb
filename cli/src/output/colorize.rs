use marktree::bookmarks::BookmarkNode;
use owo_colors::OwoColorize;

pub trait Colorize {
    fn to_colored(&self) -> String;
}

/// Section header, e.g. `=== Bookmark Bar ===`
pub struct ColorizeHeader<'a>(pub &'a str);

impl Colorize for ColorizeHeader<'_> {
    fn to_colored(&self) -> String {
        format!("{}", self.0.bold().cyan())
    }
}

/// Colored rendering of a bookmark tree, same structure as the plain one:
/// one line per leaf, two spaces per depth level, folders silent.
pub struct ColorizeTree<'a>(pub &'a BookmarkNode);

impl Colorize for ColorizeTree<'_> {
    fn to_colored(&self) -> String {
        let mut s = String::new();
        push_node(&mut s, self.0, 0);
        s
    }
}

fn push_node(s: &mut String, node: &BookmarkNode, depth: usize) {
    if !node.url.is_empty() {
        s.push_str(&format!(
            "{}{} {} {}\n",
            "  ".repeat(depth),
            node.name.bold().green(),
            "->".red(),
            node.url.yellow(),
        ));
    }
    for child in &node.children {
        push_node(s, child, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> BookmarkNode {
        BookmarkNode {
            name: "Bar".to_string(),
            url: String::new(),
            children: vec![
                BookmarkNode {
                    name: "Site".to_string(),
                    url: "http://x.test".to_string(),
                    children: vec![],
                },
                BookmarkNode {
                    name: "Dev".to_string(),
                    url: String::new(),
                    children: vec![BookmarkNode {
                        name: "Rust".to_string(),
                        url: "https://www.rust-lang.org/".to_string(),
                        children: vec![],
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_colorize_tree_keeps_names_and_urls() {
        let colored = ColorizeTree(&sample_tree()).to_colored();
        assert!(colored.contains("Site"));
        assert!(colored.contains("http://x.test"));
        assert!(colored.contains("Rust"));
    }

    #[test]
    fn test_colorize_tree_skips_folder_names() {
        let colored = ColorizeTree(&sample_tree()).to_colored();
        assert!(!colored.contains("Bar"));
        assert!(!colored.contains("Dev"));
    }

    #[test]
    fn test_colorize_tree_line_count_matches_leaves() {
        let colored = ColorizeTree(&sample_tree()).to_colored();
        assert_eq!(colored.lines().count(), 2);
    }

    #[test]
    fn test_colorize_header_keeps_text() {
        let colored = ColorizeHeader("=== Bookmark Bar ===").to_colored();
        assert!(colored.contains("=== Bookmark Bar ==="));
    }
}
