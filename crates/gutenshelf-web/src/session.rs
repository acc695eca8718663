use std::{cell::RefCell, rc::Rc};

use futures_signals::signal::Mutable;
use gutenshelf_lib::{
    catalog::{CatalogClient, CatalogConfig},
    favorites::Favorites,
    genre::GenreIndex,
};

use crate::utils::{api_url, BrowserStorage};

/// Application state shared by every page, owned by [`crate::app::App`].
///
/// Lives as long as the document, so the genre index is reset only by a reload.
pub struct Session {
    pub catalog: CatalogClient,
    pub storage: BrowserStorage,
    pub favorites: Favorites<BrowserStorage>,
    pub genres: RefCell<GenreIndex>,
    /// Text of the navigation badge, derived from `favorites`
    pub badge: Mutable<usize>,
}

impl Session {
    pub fn new() -> Rc<Self> {
        let storage = BrowserStorage::local();
        let favorites = Favorites::new(storage.clone());
        let badge = Mutable::new(favorites.count());

        Rc::new(Self {
            catalog: CatalogClient::new(CatalogConfig {
                base_url: api_url(),
            }),
            storage,
            favorites,
            genres: RefCell::new(GenreIndex::new()),
            badge,
        })
    }
}
