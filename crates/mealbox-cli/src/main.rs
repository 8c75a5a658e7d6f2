//! Mealbox CLI — browse the meal catalog and manage favorites

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use mealbox::data::{FavoriteSet, FavoritesStore, FileStore, KeyValueStore};
use mealbox::Catalog;

#[derive(Parser, Debug)]
#[command(name = "mealbox", about = "Browse meals and keep favorites", version)]
struct Cli {
    /// Directory holding saved favorites (defaults to the user config directory)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// List categories, optionally narrowed by a search term
    Categories {
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// List the meals of a category
    Meals { category: String },
    /// Mark or unmark a meal as favorite
    Favorite { meal: String },
    /// List favorite meals
    Favorites,
}

fn render_categories(catalog: &Catalog, search: &str) -> Vec<String> {
    catalog
        .search_categories(search)
        .into_iter()
        .map(|c| format!("{:>4}  {}", c.id, c.title))
        .collect()
}

fn render_meals(catalog: &Catalog, category: &str, favorites: &FavoriteSet) -> Vec<String> {
    catalog
        .meals_for(category)
        .iter()
        .map(|m| {
            let mark = if favorites.contains(m.id.as_str()) { "♥" } else { " " };
            format!("{mark} {:>4}  {}", m.id, m.title)
        })
        .collect()
}

fn render_favorites(catalog: &Catalog, favorites: &FavoriteSet) -> Vec<String> {
    favorites
        .iter()
        .map(|id| match catalog.meal(id.as_str()) {
            Some(meal) => format!("{:>4}  {}", id, meal.title),
            None => format!("{:>4}  (no longer in catalog)", id),
        })
        .collect()
}

async fn run<S: KeyValueStore>(
    command: Command,
    catalog: &Catalog,
    store: &FavoritesStore<S>,
) -> anyhow::Result<Vec<String>> {
    let lines = match command {
        Command::Categories { search } => render_categories(catalog, &search),
        Command::Meals { category } => {
            if catalog.category(&category).is_none() {
                bail!("Unknown category '{category}'");
            }
            let favorites = store.load_or_default().await?;
            render_meals(catalog, &category, &favorites)
        }
        Command::Favorite { meal } => {
            let Some(entry) = catalog.meal(&meal) else {
                bail!("Unknown meal '{meal}'");
            };
            let favorites = store.load_or_default().await?;
            let updated = store.toggle(&favorites, entry.id.clone());
            store
                .save(&updated)
                .await
                .context("Could not save favorites")?;

            let state = if updated.contains(&meal) { "Added" } else { "Removed" };
            vec![format!("{state} {} ({})", entry.title, entry.id)]
        }
        Command::Favorites => {
            let favorites = store.load_or_default().await?;
            render_favorites(catalog, &favorites)
        }
    };
    Ok(lines)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let backend = match cli.data_dir {
        Some(dir) => FileStore::new(dir),
        None => FileStore::default_location()?,
    };
    log::debug!("Using data directory {:?}", backend.dir());

    let store = FavoritesStore::new(backend);
    let catalog = Catalog::sample();

    for line in run(cli.command, &catalog, &store).await? {
        println!("{line}");
    }
    Ok(())
}
