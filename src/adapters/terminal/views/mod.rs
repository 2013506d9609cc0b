//! Stateless views. Each takes props and returns the text to print.

mod error_banner;
mod footer;
mod header;
mod loading;
mod news_card;
mod page;
mod search_form;
mod style;

pub use error_banner::render_error_banner;
pub use footer::render_footer;
pub use header::render_header;
pub use loading::render_loading;
pub use news_card::{render_news_card, NewsCardProps};
pub use page::render_page;
pub use search_form::{render_search_form, SearchFormProps};
pub use style::Style;
