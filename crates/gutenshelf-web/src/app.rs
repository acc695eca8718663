use std::rc::Rc;

use dominator::{clone, html, Dom};
use futures_signals::signal::SignalExt;

use crate::book::Book;
use crate::catalogue::Catalogue;
use crate::common::{Navbar, Route};
use crate::session::Session;
use crate::wishlist::Wishlist;

/// Top-level controller: owns the session and swaps pages on navigation
pub struct App {
    pub session: Rc<Session>,
}

impl App {
    pub fn new() -> Rc<Self> {
        Rc::new(App {
            session: Session::new(),
        })
    }

    pub fn render(app: Rc<Self>) -> Dom {
        html!("div", {
            .class("app")
            .children(&mut [
                Navbar::render(&app.session.badge),
            ])
            .child_signal(Route::signal().map(clone!(app => move |x| {
                match x {
                    Route::Books => Some(
                        Catalogue::render(Catalogue::new(app.session.clone())),
                    ),
                    Route::Book(id) => Some(
                        Book::render(Book::new(app.session.clone(), id)),
                    ),
                    Route::Wishlist => Some(
                        Wishlist::render(Wishlist::new(app.session.clone())),
                    ),
                    Route::NotFound => Some(
                        html!("div", {
                            .class("page")
                            .text("not found")
                        }),
                    ),
                }
            })))
        })
    }
}
