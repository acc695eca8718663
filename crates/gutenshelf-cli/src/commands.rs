use gutenshelf_lib::{prelude::*, sync, wishlist::EMPTY_WISHLIST_MESSAGE};

use crate::screen::{self, Screen};

pub async fn list<C, S>(
    catalog: &C,
    store: &S,
    page: u32,
    search: Option<String>,
    topic: Option<String>,
) -> anyhow::Result<()>
where
    C: Catalog,
    S: KeyValueStore,
{
    let mut filter = FilterState::restore(store);
    if let Some(search) = search {
        filter.set_search_text(store, &search)?;
    }
    if let Some(topic) = topic {
        filter.set_genre(store, &topic)?;
    }
    filter.go_to_page(page);

    let mut genres = GenreIndex::new();
    let listing = Listing::load(catalog, &filter, &mut genres).await?;

    let screen = Screen::new(listing.cards.clone());
    sync::sync_all(&Favorites::new(store), &screen);

    if !filter.search_text.is_empty() {
        println!("Search: {}", filter.search_text);
    }
    println!(
        "{} books, page {} of {} | Wishlist ({})",
        listing.pagination.total_items,
        listing.pagination.clamped_page(),
        listing.pagination.total_pages(),
        screen.badge()
    );
    println!();
    print!("{}", screen.render_cards());
    println!();
    println!("{}", screen::render_pages(&listing.pagination));
    println!("Genres: {}", screen::render_genres(&genres.render(&filter.genre)));

    Ok(())
}

pub async fn show<C: Catalog>(catalog: &C, id: i64) -> anyhow::Result<()> {
    let record = catalog.fetch_book(id).await?;
    print!("{}", screen::render_detail(&BookDetail::from(&record)));
    Ok(())
}

pub async fn wishlist<C, S>(catalog: &C, store: &S) -> anyhow::Result<()>
where
    C: Catalog,
    S: KeyValueStore,
{
    let favorites = Favorites::new(store);
    match WishlistPage::resolve(catalog, &favorites).await? {
        WishlistPage::Empty => println!("{}", EMPTY_WISHLIST_MESSAGE),
        WishlistPage::Books(cards) => {
            let screen = Screen::new(cards);
            sync::sync_all(&favorites, &screen);
            println!("Wishlist ({})", screen.badge());
            println!();
            print!("{}", screen.render_cards());
        }
    }
    Ok(())
}

pub fn toggle<S: KeyValueStore>(store: &S, id: i64) -> anyhow::Result<()> {
    let favorites = Favorites::new(store);
    if favorites.toggle_favorite(id)? {
        println!("Added {} to the wishlist", id);
    } else {
        println!("Removed {} from the wishlist", id);
    }
    println!("Wishlist ({})", favorites.count());
    Ok(())
}

pub fn clear<S: KeyValueStore>(store: &S) -> anyhow::Result<()> {
    let favorites = Favorites::new(store);
    favorites.clear()?;
    println!("Wishlist ({})", favorites.count());
    Ok(())
}
