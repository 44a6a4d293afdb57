use clap::Parser;
use log::{error, info};
use recipe_planner::commands::{parse_command, Command, HELP};
use recipe_planner::{
    Action, Controller, FileStore, PlannerConfig, Render, RequestFetcher, TerminalRenderer,
};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Search recipes, scale servings, keep a shopping list and bookmark favourites.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Recipe to open on start, as an address fragment or plain id (e.g. '#47746')
    recipe: Option<String>,
    /// Configuration file (defaults to ./recipe-planner.toml when present)
    #[arg(short, long, env = "RECIPE_PLANNER_CONFIG")]
    config: Option<String>,
    /// Directory where likes are stored, overrides the configuration
    #[arg(long)]
    storage_dir: Option<PathBuf>,
    /// Enable verbose logging{n}[SETS default level: debug]
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = PlannerConfig::load(args.config.as_deref())?;
    if let Some(dir) = args.storage_dir {
        config.storage.dir = dir;
    }
    info!("Using recipe API at {}", config.api.base_url);

    let fetcher = RequestFetcher::from_config(&config.api)?;
    let renderer = TerminalRenderer::stdout(config.search.page_size);
    let store = FileStore::new(config.storage.dir.clone());
    let mut controller = Controller::new(fetcher, renderer, store, config);

    controller
        .dispatch(Action::Load {
            fragment: args.recipe.unwrap_or_default(),
        })
        .await;

    println!("Type 'help' for commands.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(Command::Action(action))) => controller.dispatch(action).await,
            Ok(Some(Command::ShowList)) => show_list(&mut controller),
            Ok(Some(Command::ShowLikes)) => show_likes(&mut controller),
            Ok(Some(Command::Help)) => println!("{}", HELP),
            Ok(Some(Command::Quit)) => break,
            Err(e) => {
                error!("{}", e);
                println!("{}", e);
            }
        }
    }

    Ok(())
}

fn show_list<A, S>(controller: &mut Controller<A, TerminalRenderer, S>)
where
    A: recipe_planner::RecipeApi,
    S: recipe_planner::KeyValueStore,
{
    let items = controller
        .state()
        .list
        .as_ref()
        .map(|list| list.items().to_vec())
        .unwrap_or_default();
    if items.is_empty() {
        println!("Shopping list is empty.");
    }
    for item in &items {
        controller.renderer_mut().render_shopping_item(item);
    }
}

fn show_likes<A, S>(controller: &mut Controller<A, TerminalRenderer, S>)
where
    A: recipe_planner::RecipeApi,
    S: recipe_planner::KeyValueStore,
{
    let likes = controller
        .state()
        .likes
        .as_ref()
        .map(|likes| likes.likes().to_vec())
        .unwrap_or_default();
    controller.renderer_mut().toggle_like_menu(likes.len());
    for like in &likes {
        controller.renderer_mut().render_like(like);
    }
}
