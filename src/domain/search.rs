// src/domain/search.rs

use serde::Serialize;

/// Outcome of a free-text search.
///
/// "No matches" is a normal outcome, kept apart from "nothing typed yet".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum SearchResult<T> {
    /// No search term entered yet (empty or blank input)
    EmptyQuery,

    /// A term was entered but nothing matched; carries the term for display
    Empty { query: String },

    /// Matches in result order
    NotEmpty(Vec<T>),
}

impl<T> SearchResult<T> {
    /// Runs `find` for non-blank terms and classifies the outcome.
    ///
    /// `find` receives the trimmed, lowercased needle.
    pub fn evaluate<F>(term: &str, find: F) -> Self
    where
        F: FnOnce(&str) -> Vec<T>,
    {
        let needle = term.trim();
        if needle.is_empty() {
            return SearchResult::EmptyQuery;
        }

        let matches = find(&needle.to_lowercase());
        if matches.is_empty() {
            SearchResult::Empty {
                query: term.to_string(),
            }
        } else {
            SearchResult::NotEmpty(matches)
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SearchResult::NotEmpty(items) => items.len(),
            SearchResult::EmptyQuery | SearchResult::Empty { .. } => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn map<U, F>(self, f: F) -> SearchResult<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            SearchResult::EmptyQuery => SearchResult::EmptyQuery,
            SearchResult::Empty { query } => SearchResult::Empty { query },
            SearchResult::NotEmpty(items) => {
                SearchResult::NotEmpty(items.into_iter().map(f).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_terms_are_empty_query() {
        let result: SearchResult<u32> = SearchResult::evaluate("   ", |_| vec![1]);
        assert_eq!(result, SearchResult::EmptyQuery);
    }

    #[test]
    fn test_no_match_keeps_original_term() {
        let result: SearchResult<u32> = SearchResult::evaluate(" Nothing ", |_| vec![]);
        assert_eq!(
            result,
            SearchResult::Empty {
                query: " Nothing ".to_string()
            }
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_needle_is_trimmed_and_lowercased() {
        let result = SearchResult::evaluate("  MaNuSia ", |needle| vec![needle.to_string()]);
        assert_eq!(result, SearchResult::NotEmpty(vec!["manusia".to_string()]));
    }

    #[test]
    fn test_map_preserves_variant() {
        let result = SearchResult::NotEmpty(vec![1, 2]).map(|n| n * 10);
        assert_eq!(result, SearchResult::NotEmpty(vec![10, 20]));

        let empty: SearchResult<u32> = SearchResult::Empty {
            query: "x".to_string(),
        };
        assert_eq!(
            empty.map(|n| n + 1),
            SearchResult::Empty {
                query: "x".to_string()
            }
        );
    }
}
