//! The search bundle behind the search page: three result lists, each with a
//! relevance order and a popularity order.

use book_api_client::{Book, BookApiError, SearchField};
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::results::{dedup_by_id, order_by_ranking, Ranking};

/// Why a result list could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    NotFound,
    Unavailable(String),
}

impl From<&BookApiError> for FetchFailure {
    fn from(err: &BookApiError) -> Self {
        match err {
            BookApiError::NotFound(_) => FetchFailure::NotFound,
            other => FetchFailure::Unavailable(other.to_string()),
        }
    }
}

/// A deduplicated result list in both orders the search page offers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultList {
    /// As ranked by the catalog for the keyword.
    pub relevance: Vec<Book>,
    /// Same books, ordered by closeness centrality.
    pub popularity: Vec<Book>,
}

impl ResultList {
    pub fn build(books: &[Book], ranking: &Ranking) -> Self {
        let relevance = dedup_by_id(books);
        let popularity = order_by_ranking(&relevance, ranking);
        Self {
            relevance,
            popularity,
        }
    }

    pub fn len(&self) -> usize {
        self.relevance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relevance.is_empty()
    }

    pub fn ordered(&self, by_popularity: bool) -> &[Book] {
        if by_popularity {
            &self.popularity
        } else {
            &self.relevance
        }
    }
}

pub type ListOutcome = std::result::Result<ResultList, FetchFailure>;

#[derive(Debug, Clone)]
pub struct SearchResults {
    pub keyword: String,
    pub by_title: ListOutcome,
    pub by_content: ListOutcome,
    pub by_author: ListOutcome,
}

impl SearchResults {
    pub fn get(&self, field: SearchField) -> &ListOutcome {
        match field {
            SearchField::Title => &self.by_title,
            SearchField::Content => &self.by_content,
            SearchField::Author => &self.by_author,
        }
    }
}

/// Run the three searches and the ranking fetch concurrently and build the
/// bundle. A failed search only affects its own list; a failed ranking fetch
/// leaves popularity order equal to relevance order.
pub async fn run_search(catalog: &dyn Catalog, keyword: &str) -> SearchResults {
    let (by_content, by_author, by_title, ranking) = futures::join!(
        catalog.search(SearchField::Content, keyword, false),
        catalog.search(SearchField::Author, keyword, false),
        catalog.search(SearchField::Title, keyword, false),
        catalog.get_ranking(),
    );

    let ranking = match ranking {
        Ok(ids) => Ranking::new(ids),
        Err(e) => {
            warn!(error = %e, "Ranking unavailable, popularity order falls back to relevance");
            Ranking::default()
        }
    };

    let results = SearchResults {
        keyword: keyword.to_string(),
        by_title: build_list(SearchField::Title, by_title, &ranking),
        by_content: build_list(SearchField::Content, by_content, &ranking),
        by_author: build_list(SearchField::Author, by_author, &ranking),
    };

    info!(
        keyword,
        title = list_len(&results.by_title),
        content = list_len(&results.by_content),
        author = list_len(&results.by_author),
        "Search complete"
    );
    results
}

fn build_list(
    field: SearchField,
    fetched: book_api_client::Result<Vec<Book>>,
    ranking: &Ranking,
) -> ListOutcome {
    match fetched {
        Ok(books) => Ok(ResultList::build(&books, ranking)),
        // Nothing matched.
        Err(BookApiError::NotFound(_)) => Ok(ResultList::default()),
        Err(e) => {
            warn!(%field, error = %e, "Search failed");
            Err(FetchFailure::from(&e))
        }
    }
}

fn list_len(outcome: &ListOutcome) -> i64 {
    outcome.as_ref().map_or(-1, |list| list.len() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use book_api_client::{BookId, BookPage, Result, TopBook};
    use std::collections::HashSet;

    fn book(id: BookId, title: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            image: String::new(),
            authors: vec![],
            translators: vec![],
            bookshelves: vec![],
            subjects: vec![],
            languages: vec![],
            formats: Default::default(),
            text: None,
        }
    }

    struct FakeCatalog {
        title_hits: Vec<Book>,
        content_hits: Vec<Book>,
        author_fails: bool,
        ranking: Option<Vec<BookId>>,
    }

    #[async_trait]
    impl Catalog for FakeCatalog {
        async fn list_books(&self, _page: u32) -> Result<BookPage> {
            unimplemented!()
        }
        async fn get_book(&self, _id: BookId) -> Result<Book> {
            unimplemented!()
        }
        async fn get_text(&self, _id: BookId) -> Result<String> {
            unimplemented!()
        }
        async fn search(&self, field: SearchField, _query: &str, _closeness: bool) -> Result<Vec<Book>> {
            match field {
                SearchField::Title => Ok(self.title_hits.clone()),
                SearchField::Content => Ok(self.content_hits.clone()),
                SearchField::Author if self.author_fails => Err(BookApiError::Api {
                    status: 503,
                    message: "down".into(),
                }),
                SearchField::Author => Err(BookApiError::NotFound("author search".into())),
            }
        }
        async fn get_suggestion(&self, _id: BookId) -> Result<Book> {
            unimplemented!()
        }
        async fn get_ranking(&self) -> Result<Vec<BookId>> {
            self.ranking
                .clone()
                .ok_or_else(|| BookApiError::Network("connection refused".into()))
        }
        async fn get_top_books(&self) -> Result<Vec<TopBook>> {
            unimplemented!()
        }
    }

    fn carol_catalog() -> FakeCatalog {
        FakeCatalog {
            title_hits: vec![
                book(46, "A Christmas Carol"),
                book(19337, "A Christmas Carol: The original manuscript"),
                book(46, "A Christmas Carol"),
                book(24022, "A Christmas Carol in Prose"),
                book(19337, "A Christmas Carol: The original manuscript"),
            ],
            content_hits: vec![book(1, "Carol"), book(2, "Carolina")],
            author_fails: false,
            ranking: Some(vec![24022, 2, 46, 1]),
        }
    }

    fn ids(books: &[Book]) -> Vec<BookId> {
        books.iter().map(|b| b.id).collect()
    }

    #[tokio::test]
    async fn carol_title_results_are_unique_and_popularity_is_permutation() {
        let results = run_search(&carol_catalog(), "Carol").await;
        assert_eq!(results.keyword, "Carol");

        let titles = results.by_title.as_ref().unwrap();
        let relevance = ids(&titles.relevance);
        let unique: HashSet<_> = relevance.iter().collect();
        assert_eq!(unique.len(), relevance.len(), "no duplicate ids");
        assert_eq!(relevance, vec![46, 19337, 24022]);

        let mut popularity = ids(&titles.popularity);
        assert_eq!(popularity, vec![19337, 24022, 46]);
        popularity.sort();
        let mut sorted_relevance = relevance.clone();
        sorted_relevance.sort();
        assert_eq!(popularity, sorted_relevance);
    }

    #[tokio::test]
    async fn not_found_search_is_empty_list() {
        let results = run_search(&carol_catalog(), "Carol").await;
        let authors = results.get(SearchField::Author).as_ref().unwrap();
        assert!(authors.is_empty());
    }

    #[tokio::test]
    async fn failed_search_only_affects_its_list() {
        let mut catalog = carol_catalog();
        catalog.author_fails = true;
        let results = run_search(&catalog, "Carol").await;

        assert!(matches!(results.by_author, Err(FetchFailure::Unavailable(_))));
        assert_eq!(results.by_content.as_ref().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_ranking_keeps_relevance_order() {
        let mut catalog = carol_catalog();
        catalog.ranking = None;
        let results = run_search(&catalog, "Carol").await;

        let titles = results.by_title.unwrap();
        assert_eq!(titles.popularity, titles.relevance);
    }

    #[test]
    fn ordered_picks_variant() {
        let list = ResultList::build(&[book(3, "c"), book(1, "a")], &Ranking::new(vec![1, 3]));
        assert_eq!(ids(list.ordered(false)), vec![3, 1]);
        assert_eq!(ids(list.ordered(true)), vec![1, 3]);
    }
}
