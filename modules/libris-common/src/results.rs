//! Post-processing of search result lists: dedup by book id and popularity
//! ordering against the catalog's closeness-centrality ranking.

use std::collections::{HashMap, HashSet};

use book_api_client::{Book, BookId};

/// Anything that carries a book id.
pub trait Keyed {
    fn key(&self) -> BookId;
}

impl Keyed for Book {
    fn key(&self) -> BookId {
        self.id
    }
}

/// Keep the first record for each id, preserving first-seen order.
pub fn dedup_by_id<T: Keyed + Clone>(list: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(list.len());
    list.iter()
        .filter(|record| seen.insert(record.key()))
        .cloned()
        .collect()
}

/// Ranking sequence of book ids, most popular first.
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    positions: HashMap<BookId, usize>,
}

impl Ranking {
    pub fn new(ids: Vec<BookId>) -> Self {
        let mut positions = HashMap::with_capacity(ids.len());
        for (pos, id) in ids.iter().enumerate() {
            positions.entry(*id).or_insert(pos);
        }
        Self { positions }
    }

    /// First index of `id` in the ranking.
    pub fn position(&self, id: BookId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Sort key for `id`. Unranked ids get -1 and therefore sort ahead of
    /// every ranked id.
    pub fn sort_key(&self, id: BookId) -> i64 {
        self.position(id).map_or(-1, |pos| pos as i64)
    }
}

impl From<Vec<BookId>> for Ranking {
    fn from(ids: Vec<BookId>) -> Self {
        Self::new(ids)
    }
}

/// Stable sort of `list` by each record's position in `ranking`.
pub fn order_by_ranking<T: Keyed + Clone>(list: &[T], ranking: &Ranking) -> Vec<T> {
    let mut ordered = list.to_vec();
    ordered.sort_by_key(|record| ranking.sort_key(record.key()));
    ordered
}
