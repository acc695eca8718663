use crate::{
    error::Result,
    query::CatalogQuery,
    storage::{load_json, save_json, KeyValueStore},
};

/// Storage key of the last search text
pub const TITLE_KEY: &str = "title";
/// Storage key of the last selected genre
pub const GENRE_KEY: &str = "genre";

/// What the listing is currently showing.
///
/// `search_text` and `genre` survive reloads through the store, `page` does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    /// Empty means unfiltered
    pub genre: String,
    pub page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            genre: String::new(),
            page: 1,
        }
    }
}

impl FilterState {
    pub fn restore<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Self {
            search_text: load_json(store, TITLE_KEY).unwrap_or_default(),
            genre: load_json(store, GENRE_KEY).unwrap_or_default(),
            page: 1,
        }
    }

    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<()> {
        save_json(store, TITLE_KEY, &self.search_text)?;
        save_json(store, GENRE_KEY, &self.genre)
    }

    /// Query for the current state
    pub fn query(&self) -> CatalogQuery {
        CatalogQuery::page(self.page, &self.search_text, &self.genre)
    }

    /// New search text: remembered, back to page 1.
    pub fn set_search_text<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &S,
        search_text: &str,
    ) -> Result<CatalogQuery> {
        save_json(store, TITLE_KEY, search_text)?;
        self.search_text = search_text.to_string();
        self.page = 1;
        info!("search text changed to {:?}", self.search_text);
        Ok(self.query())
    }

    /// New genre: remembered, back to page 1.
    pub fn set_genre<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &S,
        genre: &str,
    ) -> Result<CatalogQuery> {
        save_json(store, GENRE_KEY, genre)?;
        self.genre = genre.to_string();
        self.page = 1;
        info!("genre changed to {:?}", self.genre);
        Ok(self.query())
    }

    /// The only transition that keeps search text and genre and moves the page.
    pub fn go_to_page(&mut self, page: u32) -> CatalogQuery {
        self.page = page.max(1);
        self.query()
    }
}
