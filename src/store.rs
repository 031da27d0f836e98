/// In-memory film catalog
///
/// This module defines the catalog's domain model and `FilmStore`, an ordered,
/// immutable collection of films seeded once at startup. The store exposes
/// read access only; nothing mutates it after construction.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A film record together with its author and reader comments
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Film {
    pub id: i32,
    pub title: String,
    pub author: Author,
    pub year: i32,
    pub comments: Vec<Comment>,
}

/// The author of a film, with the ids of the films they wrote
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    pub name: String,
    pub films: Vec<i32>,
}

/// A single reader comment on a film
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub author_comment: AuthorComment,
    pub body: String,
    pub time: DateTime<Utc>,
}

/// Identity of the person who left a comment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorComment {
    pub name: String,
    pub email: String,
}

/// Ordered, immutable collection of films
#[derive(Debug, Clone)]
pub struct FilmStore {
    films: Vec<Film>,
}

impl FilmStore {
    /// Build the fixed two-record catalog
    pub fn seed() -> Self {
        let films = vec![
            Film {
                id: 1,
                title: "Go GraphQL Tutorial".to_string(),
                author: Author {
                    name: "Elliot Forbes".to_string(),
                    films: vec![1],
                },
                // the seed data never assigns a release year
                year: 0,
                comments: vec![Comment {
                    author_comment: AuthorComment {
                        name: "Fake user 1".to_string(),
                        email: "fakeuser1@mail.ru".to_string(),
                    },
                    body: "First Comment".to_string(),
                    time: Utc::now(),
                }],
            },
            Film {
                id: 2,
                title: "Go World".to_string(),
                author: Author {
                    name: "Mark Spancer".to_string(),
                    films: vec![2],
                },
                year: 0,
                comments: vec![Comment {
                    author_comment: AuthorComment {
                        name: "Fake user 2".to_string(),
                        email: "fakeuser2@mail.ru".to_string(),
                    },
                    body: "First Comment".to_string(),
                    time: Utc::now(),
                }],
            },
        ];

        Self { films }
    }

    /// All films in insertion order
    pub fn all(&self) -> &[Film] {
        &self.films
    }

    /// Look up a film by id with a linear scan; `None` on a miss
    pub fn find(&self, id: i32) -> Option<&Film> {
        self.films.iter().find(|film| film.id == id)
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_film_count() {
        let store = FilmStore::seed();
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_seed_insertion_order() {
        let store = FilmStore::seed();
        let ids: Vec<i32> = store.all().iter().map(|film| film.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let store = FilmStore::seed();
        let mut ids: Vec<i32> = store.all().iter().map(|film| film.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn test_find_existing_id() {
        let store = FilmStore::seed();
        let film = store.find(1).expect("Film 1 should exist");
        assert_eq!(film.title, "Go GraphQL Tutorial");
        assert_eq!(film.author.name, "Elliot Forbes");
    }

    #[test]
    fn test_find_missing_id() {
        let store = FilmStore::seed();
        assert!(store.find(42).is_none());
    }

    #[test]
    fn test_year_defaults_to_zero() {
        let store = FilmStore::seed();
        for film in store.all() {
            assert_eq!(film.year, 0);
        }
    }

    #[test]
    fn test_seed_comments() {
        let store = FilmStore::seed();
        let film = store.find(2).unwrap();
        assert_eq!(film.comments.len(), 1);
        assert_eq!(film.comments[0].body, "First Comment");
        assert_eq!(film.comments[0].author_comment.email, "fakeuser2@mail.ru");
    }
}
