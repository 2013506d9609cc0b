//! Terminal front end: the root component and its views.

mod news_desk;
pub mod views;

pub use news_desk::NewsDesk;
