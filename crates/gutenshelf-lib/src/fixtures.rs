use std::cell::RefCell;

use crate::{
    catalog::Catalog,
    error::{Error, Result},
    models::{Author, BookPage, BookRecord},
    pagination::PAGE_SIZE,
    query::CatalogQuery,
};

pub fn book(id: i64, subjects: &[&str]) -> BookRecord {
    BookRecord {
        id,
        title: format!("Book {id}"),
        authors: vec![Author {
            name: format!("Author {id}"),
            birth_year: Some(1800),
            death_year: None,
        }],
        subjects: subjects.iter().map(|s| s.to_string()).collect(),
        formats: Default::default(),
        download_count: id,
        languages: vec!["en".to_string()],
        media_type: "Text".to_string(),
    }
}

/// Catalog answering from a fixed list of records, remembering every query.
pub struct StaticCatalog {
    books: Vec<BookRecord>,
    queries: RefCell<Vec<CatalogQuery>>,
    failing: bool,
}

impl StaticCatalog {
    pub fn new(books: Vec<BookRecord>) -> Self {
        Self {
            books,
            queries: RefCell::new(vec![]),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new(vec![])
        }
    }

    pub fn queries(&self) -> Vec<CatalogQuery> {
        self.queries.borrow().clone()
    }
}

impl Catalog for StaticCatalog {
    async fn fetch(&self, query: &CatalogQuery) -> Result<BookPage> {
        self.queries.borrow_mut().push(query.clone());
        if self.failing {
            return Err(Error::Decode(
                serde_json::from_str::<BookPage>("").unwrap_err(),
            ));
        }

        let page = match query {
            CatalogQuery::Page {
                page,
                search,
                topic,
            } => {
                let matching: Vec<_> = self
                    .books
                    .iter()
                    .filter(|b| search.as_ref().is_none_or(|s| b.title.contains(s.as_str())))
                    .filter(|b| topic.as_ref().is_none_or(|t| b.subjects.contains(t)))
                    .cloned()
                    .collect();
                let start = ((page - 1) * PAGE_SIZE) as usize;
                BookPage {
                    count: matching.len() as u64,
                    results: matching
                        .into_iter()
                        .skip(start)
                        .take(PAGE_SIZE as usize)
                        .collect(),
                }
            }
            CatalogQuery::Ids(ids) => {
                let results: Vec<_> = self
                    .books
                    .iter()
                    .filter(|b| ids.contains(&b.id))
                    .cloned()
                    .collect();
                BookPage {
                    count: results.len() as u64,
                    results,
                }
            }
        };

        Ok(page)
    }
}
