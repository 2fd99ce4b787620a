//! In-memory record store: people, movies, and the name index derived from people.
//!
//! The store is built once and only read afterwards, so a shared `&RecordStore` can back any
//! number of independent searches.

use std::collections::{BTreeSet, HashMap};

use serde::Deserialize;
use tracing::{info, warn};

/// One row of `people.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonRow {
    pub id: String,
    pub name: String,
    pub birth: Option<String>, // empty field -> None
}

/// One row of `movies.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRow {
    pub id: String,
    pub title: String,
    pub year: String,
}

/// One row of `stars.csv`, linking a person to a movie they appeared in.
#[derive(Debug, Clone, Deserialize)]
pub struct StarRow {
    pub person_id: String,
    pub movie_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub birth: Option<String>,
    pub movies: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub year: String,
    pub stars: BTreeSet<String>,
}

#[derive(Debug, Default)]
pub struct RecordStore {
    people: HashMap<String, Person>,
    movies: HashMap<String, Movie>,
    names: HashMap<String, BTreeSet<String>>, // lowercased name -> person ids
}

impl RecordStore {
    /// Builds a store from already-parsed rows.
    ///
    /// Duplicate ids overwrite earlier rows. Star rows naming an unknown person or movie are
    /// dropped; both cases are logged rather than treated as errors.
    pub fn from_rows(
        people: impl IntoIterator<Item = PersonRow>,
        movies: impl IntoIterator<Item = MovieRow>,
        stars: impl IntoIterator<Item = StarRow>,
    ) -> Self {
        let mut store = Self::default();

        for row in people {
            store.insert_person(row);
        }
        for row in movies {
            store.insert_movie(row);
        }

        let mut dropped = 0usize;
        for row in stars {
            if !store.add_star(&row.person_id, &row.movie_id) {
                dropped += 1;
            }
        }
        if dropped > 0 {
            warn!(dropped, "skipped star rows referencing unknown people or movies");
        }

        info!(
            people = store.people.len(),
            movies = store.movies.len(),
            "records loaded"
        );
        store
    }

    fn insert_person(&mut self, row: PersonRow) {
        let PersonRow { id, name, birth } = row;
        let person = Person {
            name,
            birth,
            movies: BTreeSet::new(),
        };

        if let Some(previous) = self.people.insert(id.clone(), person) {
            warn!(%id, "duplicate person id, keeping the later row");
            self.unindex_name(&previous.name, &id);
        }

        let key = self.people[&id].name.to_lowercase();
        self.names.entry(key).or_default().insert(id);
    }

    // keeps the name index in step with `people` when a row is superseded
    fn unindex_name(&mut self, name: &str, id: &str) {
        let key = name.to_lowercase();
        if let Some(ids) = self.names.get_mut(&key) {
            ids.remove(id);
            if ids.is_empty() {
                self.names.remove(&key);
            }
        }
    }

    fn insert_movie(&mut self, row: MovieRow) {
        let MovieRow { id, title, year } = row;
        let movie = Movie {
            title,
            year,
            stars: BTreeSet::new(),
        };
        if self.movies.insert(id.clone(), movie).is_some() {
            warn!(%id, "duplicate movie id, keeping the later row");
        }
    }

    /// Records that `person_id` appeared in `movie_id`, on both sides.
    /// Returns false (and changes nothing) if either id is unknown.
    fn add_star(&mut self, person_id: &str, movie_id: &str) -> bool {
        let (Some(person), Some(movie)) =
            (self.people.get_mut(person_id), self.movies.get_mut(movie_id))
        else {
            return false;
        };
        person.movies.insert(movie_id.to_string());
        movie.stars.insert(person_id.to_string());
        true
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn movie(&self, id: &str) -> Option<&Movie> {
        self.movies.get(id)
    }

    /// Person ids whose display name matches `name`, ignoring case.
    pub fn ids_for_name(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.names.get(&name.to_lowercase())
    }

    pub fn people_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Every `(movie_id, person_id)` pair for people who share a movie with `person_id`,
    /// the person themself included. Unknown ids have no neighbors.
    pub fn neighbors_for_person(&self, person_id: &str) -> BTreeSet<(&str, &str)> {
        let mut neighbors = BTreeSet::new();
        let Some(person) = self.people.get(person_id) else {
            return neighbors;
        };
        for movie_id in &person.movies {
            if let Some(movie) = self.movies.get(movie_id) {
                for star in &movie.stars {
                    neighbors.insert((movie_id.as_str(), star.as_str()));
                }
            }
        }
        neighbors
    }
}
