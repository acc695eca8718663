use std::rc::Rc;

use dominator::{clone, events, html, routing, Dom};
use futures_signals::signal::Mutable;
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use gutenshelf_lib::{
    sync::{self, FavoriteView},
    view::BookCard,
    wishlist::{WishlistPage, EMPTY_WISHLIST_MESSAGE},
};

use crate::{
    common::{Route, Spinner},
    session::Session,
    utils::AsyncLoader,
};

/// The favorited books, resolved from the ids kept in storage
pub struct Wishlist {
    session: Rc<Session>,
    card_list: MutableVec<BookCard>,
    is_empty: Mutable<bool>,
    loader: AsyncLoader,
}

impl Wishlist {
    pub fn new(session: Rc<Session>) -> Rc<Self> {
        Rc::new(Self {
            session,
            card_list: MutableVec::new(),
            is_empty: Mutable::new(false),
            loader: AsyncLoader::new(),
        })
    }

    pub fn fetch_wishlist(wishlist: Rc<Self>) {
        sync::sync_badge_count(&wishlist.session.favorites, wishlist.as_ref());

        wishlist.loader.load(clone!(wishlist => async move {
            match WishlistPage::resolve(&wishlist.session.catalog, &wishlist.session.favorites).await {
                Ok(WishlistPage::Empty) => {
                    wishlist.card_list.lock_mut().clear();
                    wishlist.is_empty.set_neq(true);
                }
                Ok(WishlistPage::Books(cards)) => {
                    wishlist.is_empty.set_neq(cards.is_empty());
                    wishlist.card_list.lock_mut().replace_cloned(cards);
                }
                Err(e) => {
                    error!("error fetching wishlist books: {}", e);
                }
            }
        }));
    }

    fn remove(wishlist: Rc<Self>, id: i64) {
        match wishlist.session.favorites.remove(id) {
            Ok(()) => sync::sync_all(&wishlist.session.favorites, wishlist.as_ref()),
            Err(e) => error!("error removing {} from wishlist: {}", id, e),
        }
    }

    fn render_card(wishlist: Rc<Self>, card: BookCard) -> Dom {
        let id = card.id;

        html!("div", {
            .class("book-card")
            .event(move |_: events::Click| {
                routing::go_to_url(&Route::Book(Some(id)).url());
            })
            .children(&mut [
                html!("img", {
                    .attr("src", &card.cover_url)
                    .attr("alt", &card.full_title)
                    .attr("loading", "lazy")
                }),
                html!("h3", {
                    .text(&card.full_title)
                }),
                html!("p", {
                    .text(&format!("Authors: {}", card.authors))
                }),
                html!("button", {
                    .class("remove-btn")
                    .text("Remove from Wishlist")
                    .event(clone!(wishlist => move |e: events::Click| {
                        e.stop_propagation();
                        Self::remove(wishlist.clone(), id);
                    }))
                }),
            ])
        })
    }

    pub fn render(wishlist: Rc<Self>) -> Dom {
        Self::fetch_wishlist(wishlist.clone());

        html!("div", {
            .class("page")
            .children(&mut [
                Spinner::render(wishlist.loader.is_loading()),
                html!("p", {
                    .class("empty-message")
                    .visible_signal(wishlist.is_empty.signal())
                    .text(EMPTY_WISHLIST_MESSAGE)
                }),
                html!("div", {
                    .class("book-container")
                    .attr("id", "wishlist-container")
                    .children_signal_vec(wishlist.card_list.signal_vec_cloned().map(clone!(wishlist => move |card| {
                        Self::render_card(wishlist.clone(), card)
                    })))
                }),
            ])
        })
    }
}

/// Wishlist cards carry no heart: a card whose book is no longer a favorite
/// is dropped from the page instead.
impl FavoriteView for Wishlist {
    fn card_ids(&self) -> Vec<i64> {
        self.card_list.lock_ref().iter().map(|card| card.id).collect()
    }

    fn set_favorited(&self, id: i64, favorited: bool) {
        if !favorited {
            self.card_list.lock_mut().retain(|card| card.id != id);
            if self.card_list.lock_ref().is_empty() {
                self.is_empty.set_neq(true);
            }
        }
    }

    fn set_badge_count(&self, count: usize) {
        self.session.badge.set_neq(count);
    }
}
