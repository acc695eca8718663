use dominator::routing;
use futures_signals::signal::{Signal, SignalExt};
use wasm_bindgen::prelude::*;
use web_sys::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Books,
    /// Detail page; `None` when the url carries no usable `id`
    Book(Option<i64>),
    Wishlist,
    NotFound,
}

impl Route {
    pub fn signal() -> impl Signal<Item = Self> {
        routing::url()
            .signal_ref(|url| Url::new(url).unwrap_throw())
            .map(|url| {
                let pathname = url.pathname();
                let mut paths = pathname.split('/').collect::<Vec<_>>();
                paths.retain(|path| !path.is_empty());

                match paths.as_slice() {
                    [] | ["index.html"] => Route::Books,
                    ["book"] | ["book.html"] => {
                        Route::Book(url.search_params().get("id").and_then(|id| id.parse().ok()))
                    }
                    ["wishlist"] | ["wishlist.html"] => Route::Wishlist,
                    _ => Route::NotFound,
                }
            })
    }

    pub fn url(&self) -> String {
        match self {
            Route::Books => "/".to_string(),
            Route::Book(Some(id)) => format!("/book?id={}", id),
            Route::Book(None) => "/book".to_string(),
            Route::Wishlist => "/wishlist".to_string(),
            Route::NotFound => "/notfound".to_string(),
        }
    }
}
