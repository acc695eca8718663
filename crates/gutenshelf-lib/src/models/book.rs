use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const COVER_FORMAT: &str = "image/jpeg";
pub const HTML_FORMAT: &str = "text/html";

/// A person credited on a book, with life years as the catalog knows them
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub death_year: Option<i32>,
}

/// A type represent a single catalog entry, as returned by the remote catalog.
///
/// Records are immutable once fetched and are never cached across pages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BookRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub formats: HashMap<String, String>,
    #[serde(default)]
    pub download_count: i64,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub media_type: String,
}

impl BookRecord {
    pub fn cover_image_url(&self) -> Option<&str> {
        self.formats.get(COVER_FORMAT).map(String::as_str)
    }

    pub fn read_url(&self) -> Option<&str> {
        self.formats.get(HTML_FORMAT).map(String::as_str)
    }
}
