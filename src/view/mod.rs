//! Pure layout of the two screens.
//!
//! `render` turns the store's state, the form input and the current
//! orientation into a [`Node`] tree. Nothing here performs I/O; shells walk the
//! tree to draw it and feed tapped [`Action`]s back through [`dispatch`].

mod details;
mod search;
pub mod text;

pub use details::{instructions_text, strip_tags, NO_INSTRUCTIONS};
pub use search::{FormField, SearchForm};

use crate::model::RecipeDetails;
use crate::store::{AppState, RecipeStore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Which logical screen is active, decided only by whether a recipe is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
    Search,
    Details(&'a RecipeDetails),
}

impl<'a> Mode<'a> {
    pub fn of(state: &'a AppState) -> Self {
        match &state.selected {
            Some(details) => Mode::Details(details),
            None => Mode::Search,
        }
    }
}

/// What a tap on an interactive node asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Submit,
    Select(i64),
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Headline,
    Title,
    Body,
    Status,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    /// 80x80 list thumbnail
    Thumbnail,
    /// Full width, 200 high
    Banner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    BrokenImage,
    Image,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Column(Vec<Node>),
    Row(Vec<Pane>),
    Text {
        text: String,
        style: TextStyle,
    },
    Bullet(String),
    TextField {
        field: FormField,
        label: &'static str,
        value: String,
    },
    Button {
        label: &'static str,
        action: Action,
    },
    Back {
        action: Action,
    },
    Image {
        url: String,
        size: ImageSize,
    },
    Placeholder {
        glyph: Glyph,
        size: ImageSize,
    },
    ListItem {
        thumbnail: Box<Node>,
        title: String,
        action: Action,
    },
    Spacer,
}

/// One side of a `Row`, sized relative to its siblings
#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    pub weight: u16,
    pub content: Node,
}

impl Pane {
    pub fn half(content: Node) -> Self {
        Pane { weight: 1, content }
    }
}

impl Node {
    pub fn text(text: impl Into<String>, style: TextStyle) -> Self {
        Node::Text {
            text: text.into(),
            style,
        }
    }

    /// Every action reachable in the tree, in reading order
    pub fn actions(&self) -> Vec<Action> {
        let mut found = Vec::new();
        self.collect_actions(&mut found);
        found
    }

    fn collect_actions(&self, found: &mut Vec<Action>) {
        match self {
            Node::Column(children) => children.iter().for_each(|c| c.collect_actions(found)),
            Node::Row(panes) => panes
                .iter()
                .for_each(|p| p.content.collect_actions(found)),
            Node::Button { action, .. } | Node::Back { action } | Node::ListItem { action, .. } => {
                found.push(*action)
            }
            _ => {}
        }
    }
}

/// Lay out the whole window
pub fn render(state: &AppState, form: &SearchForm, orientation: Orientation) -> Node {
    match (Mode::of(state), orientation) {
        (Mode::Search, Orientation::Portrait) => Node::Column(vec![
            search::form(form, orientation),
            search::list(state),
        ]),
        (Mode::Search, Orientation::Landscape) => Node::Row(vec![
            Pane::half(search::form(form, orientation)),
            Pane::half(search::list(state)),
        ]),
        (Mode::Details(details), Orientation::Portrait) => {
            details::screen(details, &state.details_status)
        }
        (Mode::Details(details), Orientation::Landscape) => Node::Row(vec![
            Pane::half(search::list(state)),
            Pane::half(details::screen(details, &state.details_status)),
        ]),
    }
}

/// Route a user action to the store
pub fn dispatch(store: &RecipeStore, form: &SearchForm, action: Action) {
    match action {
        Action::Submit => store.search(form.to_params()),
        Action::Select(id) => store.load_details(id),
        Action::Back => store.clear_selection(),
    }
}
