pub use crate::catalog::{Catalog, CatalogClient, CatalogConfig};
pub use crate::error::{Error, Result};
pub use crate::favorites::Favorites;
pub use crate::filter::FilterState;
pub use crate::genre::{GenreIndex, GenreOption};
pub use crate::listing::Listing;
pub use crate::models::*;
pub use crate::pagination::{PageDescriptor, PageItem, PAGE_SIZE};
pub use crate::query::CatalogQuery;
pub use crate::storage::{KeyValueStore, MemoryStore};
pub use crate::sync::FavoriteView;
pub use crate::view::{BookCard, BookDetail};
pub use crate::wishlist::WishlistPage;
