#[macro_use]
extern crate log;

mod commands;
mod screen;
mod store;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gutenshelf_lib::{
    catalog::{CatalogClient, CatalogConfig},
    DEFAULT_API_URL,
};
use store::JsonFileStore;

#[derive(Parser)]
#[clap(version, about = "Browse the public-domain book catalog and keep a wishlist")]
struct Opts {
    /// Catalog endpoint
    #[clap(long, env = "GUTENSHELF_API", default_value = DEFAULT_API_URL)]
    api_url: String,
    /// Where the wishlist and remembered filters are kept
    #[clap(long, env = "GUTENSHELF_STORE")]
    store: Option<PathBuf>,
    #[clap(subcommand)]
    subcmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show one page of the catalog
    List {
        #[clap(short, long, default_value_t = 1)]
        page: u32,
        /// Free text search, remembered for later runs ("" clears it)
        #[clap(short, long)]
        search: Option<String>,
        /// Genre filter, remembered for later runs ("" clears it)
        #[clap(short, long)]
        topic: Option<String>,
    },
    /// Show everything known about one book
    Show { id: i64 },
    /// Print the wishlist, or change it
    Wishlist {
        #[clap(subcommand)]
        action: Option<WishlistAction>,
    },
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Add the book if absent, remove it if present
    Toggle { id: i64 },
    /// Remove every book
    Clear,
}

fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gutenshelf")
        .join("storage.json")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opts: Opts = Opts::parse();

    let store_path = opts.store.unwrap_or_else(default_store_path);
    debug!("using store at {}", store_path.display());
    let store = JsonFileStore::open(&store_path)?;

    let catalog = CatalogClient::new(CatalogConfig {
        base_url: opts.api_url,
    });

    match opts.subcmd {
        Command::List {
            page,
            search,
            topic,
        } => commands::list(&catalog, &store, page, search, topic).await?,
        Command::Show { id } => commands::show(&catalog, id).await?,
        Command::Wishlist { action: None } => commands::wishlist(&catalog, &store).await?,
        Command::Wishlist {
            action: Some(WishlistAction::Toggle { id }),
        } => commands::toggle(&store, id)?,
        Command::Wishlist {
            action: Some(WishlistAction::Clear),
        } => commands::clear(&store)?,
    }

    Ok(())
}
