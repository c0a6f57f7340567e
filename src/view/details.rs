use super::{Action, Glyph, ImageSize, Node, TextStyle};
use crate::model::RecipeDetails;
use crate::store::LoadStatus;
use html_escape::decode_html_entities;

const LINE_TERMINATORS: [char; 5] = ['\n', '\r', '\u{85}', '\u{2028}', '\u{2029}'];

/// Shown in place of missing instructions
pub const NO_INSTRUCTIONS: &str = "No instructions available.";

/// Remove every `<...>` span, shortest match first.
///
/// A tag never spans a line terminator; an unmatched `<` is kept as text.
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find(|c: char| c == '>' || LINE_TERMINATORS.contains(&c)) {
            Some(end) if after[end..].starts_with('>') => {
                rest = &after[end + 1..];
            }
            _ => {
                out.push('<');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Display text for a recipe's instructions.
///
/// Entities are decoded before tags are stripped, so escaped markup such as
/// `&lt;b&gt;` is removed like any other tag.
pub fn instructions_text(instructions: Option<&str>) -> String {
    match instructions {
        Some(raw) => strip_tags(&decode_html_entities(raw)),
        None => NO_INSTRUCTIONS.to_string(),
    }
}

pub(super) fn screen(details: &RecipeDetails, status: &LoadStatus) -> Node {
    let mut children = vec![Node::Back {
        action: Action::Back,
    }];

    match status {
        LoadStatus::Loading => children.push(Node::text("Loading recipe…", TextStyle::Status)),
        LoadStatus::Failed(message) => children.push(Node::text(
            format!("Could not load recipe: {}", message),
            TextStyle::Error,
        )),
        LoadStatus::Idle | LoadStatus::Loaded => {}
    }

    children.push(Node::text(details.title.clone(), TextStyle::Headline));
    children.push(match &details.image {
        Some(url) => Node::Image {
            url: url.clone(),
            size: ImageSize::Banner,
        },
        None => Node::Placeholder {
            glyph: Glyph::Image,
            size: ImageSize::Banner,
        },
    });

    children.push(Node::text("Ingredients", TextStyle::Title));
    children.extend(
        details
            .extended_ingredients
            .iter()
            .map(|ingredient| Node::Bullet(ingredient.original.clone())),
    );

    children.push(Node::text("Instructions", TextStyle::Title));
    children.push(Node::text(
        instructions_text(details.instructions.as_deref()),
        TextStyle::Body,
    ));

    Node::Column(children)
}
