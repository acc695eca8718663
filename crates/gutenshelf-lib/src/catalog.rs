use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_API_URL,
    error::{Error, Result},
    models::{BookPage, BookRecord},
    query::CatalogQuery,
};

/// Where the catalog lives
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// A paged book search service.
///
/// Only [`Catalog::fetch`] talks to the outside world, the lookups built on
/// top of it are shared by every implementation.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    async fn fetch(&self, query: &CatalogQuery) -> Result<BookPage>;

    async fn fetch_page(&self, page: u32, search_text: &str, genre: &str) -> Result<BookPage> {
        self.fetch(&CatalogQuery::page(page, search_text, genre))
            .await
    }

    /// Resolves records by id. An empty id list never reaches the catalog.
    async fn fetch_by_ids(&self, ids: &[i64]) -> Result<Vec<BookRecord>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        Ok(self.fetch(&CatalogQuery::ids(ids)).await?.results)
    }

    async fn fetch_book(&self, id: i64) -> Result<BookRecord> {
        self.fetch_by_ids(&[id])
            .await?
            .into_iter()
            .next()
            .ok_or(Error::NotFound(id))
    }
}

pub fn decode_page(body: &str) -> Result<BookPage> {
    Ok(serde_json::from_str(body)?)
}

/// HTTP client for the remote catalog.
///
/// Works the same on native targets and in the browser, where `reqwest`
/// goes through `fetch`.
#[derive(Debug, Clone, Default)]
pub struct CatalogClient {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

impl Catalog for CatalogClient {
    async fn fetch(&self, query: &CatalogQuery) -> Result<BookPage> {
        let url = query.url(&self.config.base_url)?;
        debug!("GET {}", url);

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        decode_page(&body)
    }
}

#[cfg(test)]
mod test {
    use futures::executor::block_on;

    use super::*;
    use crate::fixtures::{StaticCatalog, book};

    const RESPONSE: &str = r#"{
        "count": 2,
        "next": null,
        "previous": null,
        "results": [
            {
                "id": 2701,
                "title": "Moby Dick; Or, The Whale",
                "authors": [{"name": "Melville, Herman", "birth_year": 1819, "death_year": 1891}],
                "translators": [],
                "subjects": ["Whaling -- Fiction", "Sea stories"],
                "bookshelves": ["Best Books Ever Listings"],
                "languages": ["en"],
                "copyright": false,
                "media_type": "Text",
                "formats": {
                    "text/html": "https://www.gutenberg.org/ebooks/2701.html.images",
                    "image/jpeg": "https://www.gutenberg.org/cache/epub/2701/pg2701.cover.medium.jpg"
                },
                "download_count": 80000
            },
            {
                "id": 84,
                "title": "Frankenstein",
                "authors": [{"name": "Shelley, Mary Wollstonecraft", "birth_year": 1797, "death_year": null}],
                "subjects": [],
                "languages": ["en"],
                "media_type": "Text",
                "formats": {},
                "download_count": 1
            }
        ]
    }"#;

    #[test]
    fn test_decode_page() {
        let page = decode_page(RESPONSE).unwrap();

        assert_eq!(page.count, 2);
        assert_eq!(page.results.len(), 2);

        let moby = &page.results[0];
        assert_eq!(moby.id, 2701);
        assert_eq!(moby.authors[0].birth_year, Some(1819));
        assert_eq!(moby.subjects, vec!["Whaling -- Fiction", "Sea stories"]);
        assert_eq!(
            moby.cover_image_url(),
            Some("https://www.gutenberg.org/cache/epub/2701/pg2701.cover.medium.jpg")
        );
        assert_eq!(moby.read_url(), Some("https://www.gutenberg.org/ebooks/2701.html.images"));

        let frankenstein = &page.results[1];
        assert_eq!(frankenstein.authors[0].death_year, None);
        assert_eq!(frankenstein.cover_image_url(), None);
    }

    #[test]
    fn test_decode_error() {
        assert!(matches!(decode_page("<html>"), Err(Error::Decode(_))));
    }

    #[test]
    fn test_fetch_by_ids_empty_skips_request() {
        let catalog = StaticCatalog::new(vec![book(1, &[])]);
        let books = block_on(catalog.fetch_by_ids(&[])).unwrap();

        assert!(books.is_empty());
        assert!(catalog.queries().is_empty());
    }

    #[test]
    fn test_fetch_book() {
        let catalog = StaticCatalog::new(vec![book(1, &[]), book(7, &[])]);

        let found = block_on(catalog.fetch_book(7)).unwrap();
        assert_eq!(found.id, 7);
        assert_eq!(catalog.queries(), vec![CatalogQuery::Ids(vec![7])]);

        assert!(matches!(block_on(catalog.fetch_book(99)), Err(Error::NotFound(99))));
    }

    #[test]
    fn test_default_config() {
        let client = CatalogClient::default();
        assert_eq!(client.config().base_url, DEFAULT_API_URL);
    }
}
