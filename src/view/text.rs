//! Plain-text rendering of a layout tree, for terminals and logs.

use super::{Glyph, Node, TextStyle};

const INDENT: &str = "  ";
const DIVIDER: &str = "│";

pub fn render(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, 0, &mut out);
    out
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(line);
    out.push('\n');
}

fn thumbnail(node: &Node) -> String {
    match node {
        Node::Image { url, .. } => format!("[image: {}]", url),
        Node::Placeholder { glyph, .. } => glyph_text(*glyph).to_string(),
        _ => String::new(),
    }
}

fn glyph_text(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::BrokenImage => "[no image]",
        Glyph::Image => "[image placeholder]",
    }
}

fn write_node(node: &Node, depth: usize, out: &mut String) {
    match node {
        Node::Column(children) => {
            for child in children {
                write_node(child, depth, out);
            }
        }
        Node::Row(panes) => {
            for (i, pane) in panes.iter().enumerate() {
                if i > 0 {
                    push_line(out, depth, DIVIDER);
                }
                write_node(&pane.content, depth + 1, out);
            }
        }
        Node::Text { text, style } => {
            let prefix = match style {
                TextStyle::Headline => "# ",
                TextStyle::Title => "## ",
                TextStyle::Error => "! ",
                TextStyle::Body | TextStyle::Status => "",
            };
            if text.is_empty() {
                push_line(out, depth, prefix.trim_end());
            }
            for (i, line) in text.lines().enumerate() {
                if i == 0 {
                    push_line(out, depth, &format!("{}{}", prefix, line));
                } else {
                    push_line(out, depth, line);
                }
            }
        }
        Node::Bullet(text) => push_line(out, depth, &format!("- {}", text)),
        Node::TextField { label, value, .. } => {
            push_line(out, depth, &format!("[{}: {}]", label, value))
        }
        Node::Button { label, .. } => push_line(out, depth, &format!("[ {} ]", label)),
        Node::Back { .. } => push_line(out, depth, "< Back"),
        Node::Image { .. } | Node::Placeholder { .. } => push_line(out, depth, &thumbnail(node)),
        Node::ListItem {
            thumbnail: thumb,
            title,
            action,
        } => {
            let id = match action {
                super::Action::Select(id) => format!(" (#{})", id),
                _ => String::new(),
            };
            push_line(out, depth, &format!("{} {}{}", thumbnail(thumb), title, id))
        }
        Node::Spacer => out.push('\n'),
    }
}
