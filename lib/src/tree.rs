use std::io::{self, Write};

use crate::bookmarks::BookmarkNode;

/// Write one line per leaf bookmark, `<indent><name> -> <url>`, indented
/// two spaces per depth level, pre-order and in source order.
///
/// Folders contribute no line of their own, only their descendants, so an
/// empty folder prints nothing at all. A node carrying both a url and
/// children gets its line and is still recursed into.
pub fn write_tree<W: Write>(out: &mut W, node: &BookmarkNode, depth: usize) -> io::Result<()> {
    if !node.url.is_empty() {
        writeln!(out, "{}{} -> {}", "  ".repeat(depth), node.name, node.url)?;
    }
    for child in &node.children {
        write_tree(out, child, depth + 1)?;
    }
    Ok(())
}

/// `write_tree` into a fresh String, starting at depth 0
pub fn render_tree(node: &BookmarkNode) -> String {
    let mut buf = Vec::new();
    // Vec<u8> writes cannot fail
    write_tree(&mut buf, node, 0).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("tree output is valid UTF-8")
}
