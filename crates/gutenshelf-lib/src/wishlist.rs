use crate::{
    catalog::Catalog,
    error::Result,
    favorites::Favorites,
    storage::KeyValueStore,
    view::BookCard,
};

pub const EMPTY_WISHLIST_MESSAGE: &str = "Your wishlist is empty.";

/// Contents of the wishlist page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WishlistPage {
    /// Nothing favorited, shown as a message rather than an empty grid
    Empty,
    Books(Vec<BookCard>),
}

impl WishlistPage {
    /// Resolves the persisted ids into cards; no request is made when there are none.
    pub async fn resolve<C, S>(catalog: &C, favorites: &Favorites<S>) -> Result<Self>
    where
        C: Catalog,
        S: KeyValueStore,
    {
        let ids = favorites.get_favorites();
        if ids.is_empty() {
            return Ok(Self::Empty);
        }

        let books = catalog.fetch_by_ids(&ids).await?;
        Ok(Self::Books(books.iter().map(BookCard::from).collect()))
    }

    pub fn card_ids(&self) -> Vec<i64> {
        match self {
            Self::Empty => vec![],
            Self::Books(cards) => cards.iter().map(|card| card.id).collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use futures::executor::block_on;

    use super::*;
    use crate::{
        favorites::WISHLIST_KEY,
        fixtures::{StaticCatalog, book},
        query::CatalogQuery,
        storage::MemoryStore,
    };

    #[test]
    fn test_favorite_then_remove() {
        let catalog = StaticCatalog::new(vec![book(3, &[]), book(7, &[]), book(9, &[])]);
        let favorites = Favorites::new(MemoryStore::new());

        favorites.toggle_favorite(7).unwrap();
        assert_eq!(favorites.store().get_item(WISHLIST_KEY).as_deref(), Some("[7]"));

        let page = block_on(WishlistPage::resolve(&catalog, &favorites)).unwrap();
        assert_eq!(page.card_ids(), vec![7]);

        favorites.remove(7).unwrap();
        let page = block_on(WishlistPage::resolve(&catalog, &favorites)).unwrap();
        assert_eq!(page, WishlistPage::Empty);
        assert_eq!(catalog.queries(), vec![CatalogQuery::Ids(vec![7])]);
    }

    #[test]
    fn test_empty_wishlist_makes_no_request() {
        let catalog = StaticCatalog::failing();
        let favorites = Favorites::new(MemoryStore::new());

        let page = block_on(WishlistPage::resolve(&catalog, &favorites)).unwrap();

        assert_eq!(page, WishlistPage::Empty);
        assert!(catalog.queries().is_empty());
    }

    #[test]
    fn test_fetch_error_propagates() {
        let catalog = StaticCatalog::failing();
        let favorites = Favorites::new(MemoryStore::with_items([(WISHLIST_KEY, "[1]")]));

        assert!(block_on(WishlistPage::resolve(&catalog, &favorites)).is_err());
        assert_eq!(favorites.get_favorites(), vec![1]);
    }
}
