use std::rc::Rc;

use dominator::{clone, events, html, link, Dom};
use futures_signals::signal::Mutable;
use gutenshelf_lib::view::BookCard;

use super::{icons, Route};

/// A card in the book grid together with its heart state
pub struct BookCover {
    pub card: BookCard,
    pub is_favorite: Mutable<bool>,
}

impl BookCover {
    /// Fresh covers start unflagged until the next icon sync
    pub fn new(card: BookCard) -> Rc<Self> {
        Rc::new(Self {
            card,
            is_favorite: Mutable::new(false),
        })
    }

    pub fn id(&self) -> i64 {
        self.card.id
    }

    pub fn set_favorite(&self, favorite: bool) {
        self.is_favorite.set_neq(favorite);
    }

    pub fn link(&self) -> String {
        Route::Book(Some(self.card.id)).url()
    }

    pub fn render<F>(cover: Rc<Self>, on_toggle: F) -> Dom
    where
        F: Fn(i64) + 'static,
    {
        html!("div", {
            .class("book-card")
            .class_signal("favorite", cover.is_favorite.signal())
            .attr("data-id", &cover.card.id.to_string())
            .children(&mut [
                html!("button", {
                    .class("wishlist-btn")
                    .attr("title", "Toggle wishlist")
                    .event(clone!(cover => move |e: events::Click| {
                        e.stop_propagation();
                        on_toggle(cover.id());
                    }))
                    .children(&mut [
                        icons::heart(),
                    ])
                }),
                link!(cover.link(), {
                    .children(&mut [
                        html!("img", {
                            .attr("src", &cover.card.cover_url)
                            .attr("alt", &cover.card.full_title)
                            .attr("loading", "lazy")
                        }),
                        html!("h3", {
                            .text(&cover.card.title)
                        }),
                        html!("p", {
                            .text(&format!("Authors: {}", cover.card.authors))
                        }),
                        html!("p", {
                            .text(&format!("Genre: {}", cover.card.genre))
                        }),
                        html!("p", {
                            .text(&format!("ID: {}", cover.card.id))
                        }),
                    ])
                })
            ])
        })
    }
}
