mod route;
pub use route::Route;

mod book_cover;
pub use book_cover::BookCover;

mod spinner;
pub use spinner::Spinner;

mod navbar;
pub use navbar::Navbar;

mod pagination;
pub use pagination::Pagination;

mod genre_select;
pub use genre_select::GenreSelect;

pub mod icons;
