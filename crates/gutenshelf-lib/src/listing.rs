use crate::{
    catalog::Catalog,
    error::Result,
    filter::FilterState,
    genre::GenreIndex,
    models::BookPage,
    pagination::{PageDescriptor, PageItem},
    view::BookCard,
};

/// One rendered page of the book grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub cards: Vec<BookCard>,
    pub pagination: PageDescriptor,
}

impl Listing {
    /// Builds the grid for a freshly fetched page, feeding its subjects to `genres`.
    pub fn from_page(page: &BookPage, current_page: u32, genres: &mut GenreIndex) -> Self {
        genres.observe(&page.results);

        Self {
            cards: page.results.iter().map(BookCard::from).collect(),
            pagination: PageDescriptor::new(page.count, current_page),
        }
    }

    pub async fn load<C: Catalog>(
        catalog: &C,
        filter: &FilterState,
        genres: &mut GenreIndex,
    ) -> Result<Self> {
        let page = catalog.fetch(&filter.query()).await?;
        Ok(Self::from_page(&page, filter.page, genres))
    }

    pub fn card_ids(&self) -> Vec<i64> {
        self.cards.iter().map(|card| card.id).collect()
    }

    pub fn visible_pages(&self) -> Vec<PageItem> {
        self.pagination.visible_pages()
    }
}
