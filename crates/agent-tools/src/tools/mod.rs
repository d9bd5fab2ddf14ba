//! Built-in tool implementations.

mod calculator;
mod web_search;

pub use calculator::{Calculator, INVALID_EXPRESSION};
pub use web_search::{extract_results, render_results, SearchResultItem, SerpApiSearch};
