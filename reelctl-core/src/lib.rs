pub mod catalog;
pub mod config;
pub mod debounce;
pub mod error;
pub mod paged_list;
pub mod pagination;

pub use catalog::{Comment, Identified, MovieSummary, Titled, UserProfile};
pub use config::ReelConfig;
pub use debounce::{filter_titles, SearchDebouncer, SearchEvent};
pub use error::{ReelError, Result};
pub use paged_list::PagedList;
pub use pagination::{clamp_page, page_window, total_pages, PageSnapshot, Paginator};
