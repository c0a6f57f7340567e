use clap::{Parser, Subcommand};
use log::debug;
use std::sync::Arc;

use recipe_finder::store::LoadStatus;
use recipe_finder::view::{self, Action, Orientation};
use recipe_finder::{FinderConfig, RecipeStore, SearchForm, SpoonacularClient};

#[derive(Parser)]
#[command(name = "recipe-finder", version, about = "Search recipes on Spoonacular")]
struct Cli {
    /// Lay the screen out side by side
    #[arg(long, global = true)]
    landscape: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search recipes and print the result list
    Search {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = "")]
        ingredients: String,
        #[arg(long, default_value = "")]
        cuisine: String,
        #[arg(long, default_value = "")]
        diet: String,
        /// Ignored unless it is a whole number
        #[arg(long, default_value = "")]
        max_calories: String,
    },
    /// Show one recipe
    Details { id: i64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = FinderConfig::load()?;
    let client = SpoonacularClient::new(&config)?;
    let store = RecipeStore::new(Arc::new(client))?;
    let mut updates = store.subscribe();

    let orientation = if cli.landscape {
        Orientation::Landscape
    } else {
        Orientation::Portrait
    };

    let form = match cli.command {
        Command::Search {
            query,
            ingredients,
            cuisine,
            diet,
            max_calories,
        } => {
            let form = SearchForm {
                query,
                ingredients,
                cuisine,
                diet,
                max_calories,
            };
            view::dispatch(&store, &form, Action::Submit);
            updates
                .wait_for(|state| state.search_status != LoadStatus::Loading)
                .await?;
            form
        }
        Command::Details { id } => {
            let form = SearchForm::default();
            view::dispatch(&store, &form, Action::Select(id));
            updates
                .wait_for(|state| state.details_status != LoadStatus::Loading)
                .await?;
            form
        }
    };

    let state = store.snapshot();
    debug!("final state: {:?}", state);
    print!("{}", view::text::render(&view::render(&state, &form, orientation)));

    match (&state.search_status, &state.details_status) {
        (LoadStatus::Failed(message), _) | (_, LoadStatus::Failed(message)) => {
            Err(message.clone().into())
        }
        _ => Ok(()),
    }
}
