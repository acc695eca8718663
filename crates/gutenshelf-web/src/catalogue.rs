use std::rc::Rc;

use dominator::{clone, events, html, with_node, Dom, EventOptions};
use futures_signals::signal::{Mutable, SignalExt};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use gutenshelf_lib::{
    catalog::Catalog,
    filter::FilterState,
    genre::GenreOption,
    listing::Listing,
    pagination::PageDescriptor,
    sync::{self, FavoriteView},
};
use web_sys::HtmlInputElement;

use crate::{
    common::{BookCover, GenreSelect, Pagination, Spinner},
    session::Session,
    utils::{window, AsyncLoader},
};

/// Delay between the last keystroke in the search box and the request
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// The book grid with its search box, genre filter and pagination
pub struct Catalogue {
    session: Rc<Session>,
    filter: Mutable<FilterState>,
    cover_list: MutableVec<Rc<BookCover>>,
    pagination: Mutable<Option<PageDescriptor>>,
    genre_options: MutableVec<GenreOption>,
    loader: AsyncLoader,
}

impl Catalogue {
    pub fn new(session: Rc<Session>) -> Rc<Self> {
        let filter = FilterState::restore(&session.storage);

        Rc::new(Self {
            session,
            filter: Mutable::new(filter),
            cover_list: MutableVec::new(),
            pagination: Mutable::new(None),
            genre_options: MutableVec::new(),
            loader: AsyncLoader::new(),
        })
    }

    fn refresh_genre_options(&self) {
        let selected = self.filter.lock_ref().genre.clone();
        let options = self.session.genres.borrow().render(&selected);
        self.genre_options.lock_mut().replace_cloned(options);
    }

    /// Fetches the page the filter points at. The grid keeps its previous
    /// contents when the request fails.
    pub fn fetch_books(catalogue: Rc<Self>, debounce: bool) {
        let filter = catalogue.filter.get_cloned();
        let query = filter.query();

        let fut = clone!(catalogue => async move {
            match catalogue.session.catalog.fetch(&query).await {
                Ok(page) => {
                    let listing = Listing::from_page(&page, filter.page, &mut catalogue.session.genres.borrow_mut());
                    catalogue.cover_list.lock_mut().replace_cloned(listing.cards.into_iter().map(BookCover::new).collect());
                    catalogue.pagination.set(Some(listing.pagination));
                    catalogue.refresh_genre_options();
                    sync::sync_all(&catalogue.session.favorites, catalogue.as_ref());
                }
                Err(e) => {
                    error!("error fetching books: {}", e);
                }
            }
        });

        if debounce {
            catalogue.loader.load_debounced(SEARCH_DEBOUNCE_MS, fut);
        } else {
            catalogue.loader.load(fut);
        }
    }

    fn search(catalogue: Rc<Self>, search_text: String) {
        let result = catalogue
            .filter
            .lock_mut()
            .set_search_text(&catalogue.session.storage, &search_text);
        match result {
            Ok(_) => Self::fetch_books(catalogue, true),
            Err(e) => error!("error saving search text: {}", e),
        }
    }

    fn select_genre(catalogue: Rc<Self>, genre: String) {
        let result = catalogue
            .filter
            .lock_mut()
            .set_genre(&catalogue.session.storage, &genre);
        match result {
            Ok(_) => {
                catalogue.refresh_genre_options();
                Self::fetch_books(catalogue, false);
            }
            Err(e) => error!("error saving genre: {}", e),
        }
    }

    fn go_to_page(catalogue: Rc<Self>, page: u32) {
        catalogue.filter.lock_mut().go_to_page(page);
        window().scroll_to_with_x_and_y(0.0, 0.0);
        Self::fetch_books(catalogue, false);
    }

    fn toggle_favorite(catalogue: Rc<Self>, id: i64) {
        if let Err(e) = sync::toggle_and_sync(&catalogue.session.favorites, catalogue.as_ref(), id) {
            error!("error toggling favorite {}: {}", id, e);
        }
    }

    pub fn render_toolbar(catalogue: Rc<Self>) -> Dom {
        let search_text = catalogue.filter.lock_ref().search_text.clone();

        html!("div", {
            .class("toolbar")
            .children(&mut [
                html!("input" => HtmlInputElement, {
                    .class("search-input")
                    .attr("placeholder", "Search by title or author")
                    .attr("type", "search")
                    .attr("value", &search_text)
                    .with_node!(input => {
                        .event(clone!(catalogue => move |_: events::Input| {
                            Self::search(catalogue.clone(), input.value());
                        }))
                        .event_with_options(&EventOptions::preventable(), |e: events::KeyDown| {
                            if e.key() == "Enter" {
                                e.prevent_default();
                            }
                        })
                    })
                }),
                GenreSelect::render(&catalogue.genre_options, clone!(catalogue => move |genre| {
                    Self::select_genre(catalogue.clone(), genre);
                })),
            ])
        })
    }

    pub fn render_main(catalogue: Rc<Self>) -> Dom {
        let on_toggle = clone!(catalogue => move |id| Self::toggle_favorite(catalogue.clone(), id));
        let on_toggle = Rc::new(on_toggle);

        html!("div", {
            .class("book-container")
            .children_signal_vec(catalogue.cover_list.signal_vec_cloned().map(move |cover| {
                BookCover::render(cover, clone!(on_toggle => move |id| on_toggle(id)))
            }))
        })
    }

    pub fn render_pagination(catalogue: Rc<Self>) -> Dom {
        let on_select: Rc<dyn Fn(u32)> = Rc::new(clone!(catalogue => move |page| {
            Self::go_to_page(catalogue.clone(), page);
        }));

        html!("div", {
            .child_signal(catalogue.pagination.signal().map(move |descriptor| {
                descriptor.map(|descriptor| Pagination::render(descriptor, on_select.clone()))
            }))
        })
    }

    pub fn render(catalogue: Rc<Self>) -> Dom {
        catalogue.refresh_genre_options();
        Self::fetch_books(catalogue.clone(), false);

        html!("div", {
            .class("page")
            .children(&mut [
                Self::render_toolbar(catalogue.clone()),
                Spinner::render(catalogue.loader.is_loading()),
                Self::render_main(catalogue.clone()),
                Self::render_pagination(catalogue),
            ])
        })
    }
}

impl FavoriteView for Catalogue {
    fn card_ids(&self) -> Vec<i64> {
        self.cover_list.lock_ref().iter().map(|cover| cover.id()).collect()
    }

    fn set_favorited(&self, id: i64, favorited: bool) {
        if let Some(cover) = self.cover_list.lock_ref().iter().find(|cover| cover.id() == id) {
            cover.set_favorite(favorited);
        }
    }

    fn set_badge_count(&self, count: usize) {
        self.session.badge.set_neq(count);
    }
}
