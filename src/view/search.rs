use super::{Action, Glyph, ImageSize, Node, Orientation, Pane, TextStyle};
use crate::model::{Recipe, SearchParams};
use crate::store::{AppState, LoadStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Query,
    Ingredients,
    Cuisine,
    Diet,
    MaxCalories,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Query,
        FormField::Ingredients,
        FormField::Cuisine,
        FormField::Diet,
        FormField::MaxCalories,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Query => "Search",
            FormField::Ingredients => "Ingredients",
            FormField::Cuisine => "Cuisine",
            FormField::Diet => "Diet",
            FormField::MaxCalories => "Max Calories",
        }
    }
}

/// Raw text the user has typed into the search form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub query: String,
    pub ingredients: String,
    pub cuisine: String,
    pub diet: String,
    pub max_calories: String,
}

impl SearchForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Query => &self.query,
            FormField::Ingredients => &self.ingredients,
            FormField::Cuisine => &self.cuisine,
            FormField::Diet => &self.diet,
            FormField::MaxCalories => &self.max_calories,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Query => self.query = value,
            FormField::Ingredients => self.ingredients = value,
            FormField::Cuisine => self.cuisine = value,
            FormField::Diet => self.diet = value,
            FormField::MaxCalories => self.max_calories = value,
        }
    }

    /// Normalize the current input into search parameters
    pub fn to_params(&self) -> SearchParams {
        SearchParams::from_input(
            &self.query,
            &self.ingredients,
            &self.cuisine,
            &self.diet,
            &self.max_calories,
        )
    }
}

fn field(form: &SearchForm, field: FormField) -> Node {
    Node::TextField {
        field,
        label: field.label(),
        value: form.get(field).to_string(),
    }
}

/// Heading, the five inputs and the search button
pub(super) fn form(form: &SearchForm, orientation: Orientation) -> Node {
    let mut children = vec![Node::text("Recipe Finder", TextStyle::Headline)];

    match orientation {
        Orientation::Portrait => {
            children.extend(FormField::ALL.iter().map(|f| field(form, *f)));
        }
        Orientation::Landscape => {
            let left = [FormField::Query, FormField::Cuisine, FormField::MaxCalories];
            let right = [FormField::Ingredients, FormField::Diet];
            children.push(Node::Row(vec![
                Pane::half(Node::Column(left.iter().map(|f| field(form, *f)).collect())),
                Pane::half(Node::Column(right.iter().map(|f| field(form, *f)).collect())),
            ]));
        }
    }

    children.push(Node::Spacer);
    children.push(Node::Button {
        label: "Search",
        action: Action::Submit,
    });
    Node::Column(children)
}

fn list_item(recipe: &Recipe) -> Node {
    let thumbnail = match &recipe.image {
        Some(url) => Node::Image {
            url: url.clone(),
            size: ImageSize::Thumbnail,
        },
        None => Node::Placeholder {
            glyph: Glyph::BrokenImage,
            size: ImageSize::Thumbnail,
        },
    };
    Node::ListItem {
        thumbnail: Box::new(thumbnail),
        title: recipe.title.clone(),
        action: Action::Select(recipe.id),
    }
}

/// Result list, preceded by any pending or failed request
pub(super) fn list(state: &AppState) -> Node {
    let mut children = Vec::new();

    match &state.search_status {
        LoadStatus::Loading => children.push(Node::text("Loading…", TextStyle::Status)),
        LoadStatus::Failed(message) => children.push(Node::text(
            format!("Search failed: {}", message),
            TextStyle::Error,
        )),
        LoadStatus::Idle | LoadStatus::Loaded => {}
    }

    // With a selection the details screen reports its own status
    if !state.has_selection() {
        match &state.details_status {
            LoadStatus::Loading => children.push(Node::text("Loading recipe…", TextStyle::Status)),
            LoadStatus::Failed(message) => children.push(Node::text(
                format!("Could not load recipe: {}", message),
                TextStyle::Error,
            )),
            LoadStatus::Idle | LoadStatus::Loaded => {}
        }
    }

    children.extend(state.recipes.iter().map(list_item));
    Node::Column(children)
}
