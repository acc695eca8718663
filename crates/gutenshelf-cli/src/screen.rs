use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
    fmt::Write,
};

use gutenshelf_lib::{
    genre::GenreOption,
    pagination::{PageDescriptor, PageItem},
    sync::FavoriteView,
    view::{BookCard, BookDetail},
};

/// Terminal rendition of the listing, favorites flags included
#[derive(Default)]
pub struct Screen {
    cards: Vec<BookCard>,
    favorited: RefCell<HashSet<i64>>,
    badge: Cell<usize>,
}

impl Screen {
    pub fn new(cards: Vec<BookCard>) -> Self {
        Self {
            cards,
            ..Default::default()
        }
    }

    pub fn badge(&self) -> usize {
        self.badge.get()
    }

    pub fn render_cards(&self) -> String {
        let favorited = self.favorited.borrow();
        let mut out = String::new();
        for card in &self.cards {
            let heart = if favorited.contains(&card.id) { "♥" } else { " " };
            let _ = writeln!(out, "{} {:>6}  {}", heart, card.id, card.title);
            let _ = writeln!(out, "          {}", card.authors);
            let _ = writeln!(out, "          Genre: {}", card.genre);
        }
        out
    }
}

impl FavoriteView for Screen {
    fn card_ids(&self) -> Vec<i64> {
        self.cards.iter().map(|card| card.id).collect()
    }

    fn set_favorited(&self, id: i64, favorited: bool) {
        let mut set = self.favorited.borrow_mut();
        if favorited {
            set.insert(id);
        } else {
            set.remove(&id);
        }
    }

    fn set_badge_count(&self, count: usize) {
        self.badge.set(count);
    }
}

/// `1 … 4 [5] 6 … 10`, current page bracketed
pub fn render_pages(descriptor: &PageDescriptor) -> String {
    let current = descriptor.clamped_page();
    descriptor
        .visible_pages()
        .into_iter()
        .map(|item| match item {
            PageItem::Page(page) if page == current => format!("[{}]", page),
            PageItem::Page(page) => page.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Genres with the selected one starred
pub fn render_genres(options: &[GenreOption]) -> String {
    options
        .iter()
        .map(|option| {
            if option.is_selected {
                format!("*{}", option.label)
            } else {
                option.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn render_detail(detail: &BookDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", detail.title);
    let _ = writeln!(out, "Authors: {}", detail.authors);
    let _ = writeln!(out, "Subjects: {}", detail.subjects);
    let _ = writeln!(out, "Download Count: {}", detail.download_count);
    let _ = writeln!(out, "Language: {}", detail.languages);
    let _ = writeln!(out, "Media Type: {}", detail.media_type);
    let _ = writeln!(out, "Cover: {}", detail.cover_url);
    if let Some(read_url) = &detail.read_url {
        let _ = writeln!(out, "Read online: {}", read_url);
    }
    out
}

#[cfg(test)]
mod test {
    use gutenshelf_lib::{
        favorites::Favorites, genre::ALL_GENRES_LABEL, storage::MemoryStore, sync,
    };

    use super::*;

    fn card(id: i64) -> BookCard {
        BookCard {
            id,
            title: format!("Book {}", id),
            full_title: format!("Book {}", id),
            authors: "Someone (? - Present)".to_string(),
            genre: "Unknown".to_string(),
            cover_url: String::new(),
        }
    }

    #[test]
    fn test_render_pages() {
        assert_eq!(render_pages(&PageDescriptor::new(320, 5)), "1 … 4 [5] 6 … 10");
        assert_eq!(render_pages(&PageDescriptor::new(96, 1)), "[1] 2 3");
        assert_eq!(render_pages(&PageDescriptor::new(0, 1)), "");
    }

    #[test]
    fn test_render_genres() {
        let options = vec![
            GenreOption {
                value: String::new(),
                label: ALL_GENRES_LABEL.to_string(),
                is_selected: false,
            },
            GenreOption {
                value: "Fiction".to_string(),
                label: "Fiction".to_string(),
                is_selected: true,
            },
        ];
        assert_eq!(render_genres(&options), "All Genres | *Fiction");
    }

    #[test]
    fn test_screen_marks_favorites() {
        let favorites = Favorites::new(MemoryStore::new());
        favorites.toggle_favorite(2).unwrap();

        let screen = Screen::new(vec![card(1), card(2)]);
        sync::sync_all(&favorites, &screen);

        assert_eq!(screen.badge(), 1);
        let out = screen.render_cards();
        assert!(out.contains("♥      2  Book 2"));
        assert!(out.contains("       1  Book 1"));
    }
}
