use std::rc::Rc;

use dominator::{clone, html, Dom};
use futures_signals::signal::{Mutable, SignalExt};
use gutenshelf_lib::{catalog::Catalog, error::Error, view::BookDetail};

use crate::{common::Spinner, session::Session, utils::AsyncLoader};

/// Detail page of a single book
pub struct Book {
    session: Rc<Session>,
    id: Option<i64>,
    detail: Mutable<Option<BookDetail>>,
    loader: AsyncLoader,
}

impl Book {
    pub fn new(session: Rc<Session>, id: Option<i64>) -> Rc<Self> {
        Rc::new(Self {
            session,
            id,
            detail: Mutable::new(None),
            loader: AsyncLoader::new(),
        })
    }

    pub fn fetch_detail(book: Rc<Self>) {
        let Some(id) = book.id else {
            error!("{}", Error::MissingIdentifier);
            return;
        };

        book.loader.load(clone!(book => async move {
            match book.session.catalog.fetch_book(id).await {
                Ok(record) => {
                    book.detail.set(Some(BookDetail::from(&record)));
                }
                Err(e) => {
                    error!("error fetching book details: {}", e);
                }
            }
        }));
    }

    fn field(label: &str, value: String) -> Dom {
        html!("p", {
            .children(&mut [
                html!("strong", {
                    .text(&format!("{}: ", label))
                }),
                html!("span", {
                    .text(&value)
                })
            ])
        })
    }

    pub fn render_detail(detail: BookDetail) -> Dom {
        html!("div", {
            .class("book-details-container")
            .children(&mut [
                html!("div", {
                    .class("book-image")
                    .children(&mut [
                        html!("img", {
                            .attr("src", &detail.cover_url)
                            .attr("alt", &detail.title)
                        })
                    ])
                }),
                html!("div", {
                    .class("book-info")
                    .children(&mut [
                        html!("h1", {
                            .text(&detail.title)
                        }),
                        Self::field("Authors", detail.authors.clone()),
                        Self::field("Subjects", detail.subjects.clone()),
                        Self::field("Download Count", detail.download_count.to_string()),
                        Self::field("Language", detail.languages.clone()),
                        Self::field("Media Type", detail.media_type.clone()),
                    ])
                    .apply_if(detail.read_url.is_some(), |dom| dom.child(html!("a", {
                        .attr("href", detail.read_url.as_deref().unwrap_or_default())
                        .attr("target", "_blank")
                        .attr("rel", "noopener")
                        .text("Read Book Online")
                    })))
                })
            ])
        })
    }

    pub fn render(book: Rc<Self>) -> Dom {
        Self::fetch_detail(book.clone());

        html!("div", {
            .class("page")
            .children(&mut [
                Spinner::render(book.loader.is_loading()),
            ])
            .child_signal(book.detail.signal_cloned().map(|detail| detail.map(Self::render_detail)))
        })
    }
}
