pub mod catalog;
pub mod config;
pub mod error;
pub mod results;
pub mod search;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{LibrisError, Result};
pub use results::{dedup_by_id, order_by_ranking, Keyed, Ranking};
pub use search::{run_search, FetchFailure, ResultList, SearchResults};

pub use book_api_client::{Book, BookApiClient, BookApiError, BookId, BookPage, Person, SearchField, TopBook};
