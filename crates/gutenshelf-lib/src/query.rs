use reqwest::Url;

use crate::error::{Error, Result};

/// A request against the catalog's `/books` resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogQuery {
    /// One page of the listing, optionally narrowed by free text and topic.
    Page {
        page: u32,
        search: Option<String>,
        topic: Option<String>,
    },
    /// Explicit lookup of records by id.
    Ids(Vec<i64>),
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl CatalogQuery {
    /// Empty `search_text` or `genre` means the parameter is left out entirely.
    pub fn page(page: u32, search_text: &str, genre: &str) -> Self {
        Self::Page {
            page,
            search: non_empty(search_text),
            topic: non_empty(genre),
        }
    }

    pub fn ids(ids: &[i64]) -> Self {
        Self::Ids(ids.to_vec())
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Page {
                page,
                search,
                topic,
            } => {
                let mut params = vec![("page", page.to_string())];
                if let Some(search) = search {
                    params.push(("search", search.clone()));
                }
                if let Some(topic) = topic {
                    params.push(("topic", topic.clone()));
                }
                params
            }
            Self::Ids(ids) => vec![(
                "ids",
                ids.iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            )],
        }
    }

    /// Full request url with every parameter percent-encoded.
    pub fn url(&self, base_url: &str) -> Result<Url> {
        Url::parse_with_params(base_url, self.params()).map_err(|e| Error::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const BASE: &str = "https://gutendex.com/books";

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_search_without_topic() {
        let url = CatalogQuery::page(1, "moby", "").url(BASE).unwrap();

        assert_eq!(url.path(), "/books");
        assert_eq!(url.query(), Some("page=1&search=moby"));
        assert!(!pairs(&url).iter().any(|(k, _)| k == "topic"));
    }

    #[test]
    fn test_topic_without_search() {
        let url = CatalogQuery::page(3, "", "Fiction").url(BASE).unwrap();

        assert_eq!(url.query(), Some("page=3&topic=Fiction"));
        assert!(!pairs(&url).iter().any(|(k, _)| k == "search"));
    }

    #[test]
    fn test_unfiltered_page() {
        let url = CatalogQuery::page(1, "", "").url(BASE).unwrap();
        assert_eq!(url.query(), Some("page=1"));
    }

    #[test]
    fn test_values_are_encoded() {
        let url = CatalogQuery::page(2, "war & peace", "Science fiction")
            .url(BASE)
            .unwrap();

        assert_eq!(
            pairs(&url),
            vec![
                ("page".to_string(), "2".to_string()),
                ("search".to_string(), "war & peace".to_string()),
                ("topic".to_string(), "Science fiction".to_string()),
            ]
        );
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn test_ids_lookup() {
        let query = CatalogQuery::ids(&[7, 42, 1342]);
        assert_eq!(query.params(), vec![("ids", "7,42,1342".to_string())]);

        let url = query.url(BASE).unwrap();
        assert_eq!(pairs(&url), vec![("ids".to_string(), "7,42,1342".to_string())]);
    }

    #[test]
    fn test_invalid_base_url() {
        let result = CatalogQuery::page(1, "", "").url("not a url");
        assert!(matches!(result, Err(Error::InvalidUrl { .. })));
    }
}
