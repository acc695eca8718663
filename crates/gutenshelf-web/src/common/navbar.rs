use dominator::{html, link, Dom};
use futures_signals::signal::{Mutable, SignalExt};

use super::{icons, Route};

pub struct Navbar;

impl Navbar {
    /// Top navigation; `badge` holds the number of favorited books
    pub fn render(badge: &Mutable<usize>) -> Dom {
        html!("nav", {
            .class("navbar")
            .children(&mut [
                link!(Route::Books.url(), {
                    .class("brand")
                    .class_signal("active", Route::signal().map(|x| matches!(x, Route::Books)))
                    .children(&mut [
                        icons::book_open(),
                        html!("span", {
                            .text("Books")
                        })
                    ])
                }),
                link!(Route::Wishlist.url(), {
                    .class_signal("active", Route::signal().map(|x| matches!(x, Route::Wishlist)))
                    .children(&mut [
                        icons::heart(),
                        html!("span", {
                            .text("Wishlist")
                        }),
                        html!("span", {
                            .class("badge")
                            .attr("id", "wishnav")
                            .text_signal(badge.signal().map(|count| count.to_string()))
                        })
                    ])
                })
            ])
        })
    }
}
