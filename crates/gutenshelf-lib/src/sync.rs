use crate::{favorites::Favorites, storage::KeyValueStore};

/// The places where wishlist membership is visible on screen.
///
/// Implementors only hold presentation flags; the favorites store stays the
/// single source of truth and is re-read on every sync.
pub trait FavoriteView {
    /// Ids of the book cards currently rendered
    fn card_ids(&self) -> Vec<i64>;

    fn set_favorited(&self, id: i64, favorited: bool);

    fn set_badge_count(&self, count: usize);
}

/// Sets every rendered card's favorite flag from the store.
pub fn sync_icon_state<S, V>(favorites: &Favorites<S>, view: &V)
where
    S: KeyValueStore,
    V: FavoriteView + ?Sized,
{
    let ids = favorites.get_favorites();
    for card_id in view.card_ids() {
        view.set_favorited(card_id, ids.contains(&card_id));
    }
}

pub fn sync_badge_count<S, V>(favorites: &Favorites<S>, view: &V)
where
    S: KeyValueStore,
    V: FavoriteView + ?Sized,
{
    view.set_badge_count(favorites.count());
}

/// Run after the initial load, after any toggle and after any re-render of the cards.
pub fn sync_all<S, V>(favorites: &Favorites<S>, view: &V)
where
    S: KeyValueStore,
    V: FavoriteView + ?Sized,
{
    sync_icon_state(favorites, view);
    sync_badge_count(favorites, view);
}

/// Flips `id` and brings the view back in line. Never refetches anything.
pub fn toggle_and_sync<S, V>(favorites: &Favorites<S>, view: &V, id: i64) -> crate::error::Result<bool>
where
    S: KeyValueStore,
    V: FavoriteView + ?Sized,
{
    let favorited = favorites.toggle_favorite(id)?;
    sync_all(favorites, view);
    Ok(favorited)
}
