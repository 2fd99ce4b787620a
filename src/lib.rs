//! Degrees of separation between people who appeared in the same movies.
//!
//! Records are loaded once into a [`RecordStore`]; names are resolved to person ids with
//! [`person_id_for_name`] and the connection between two ids is found with [`shortest_path`].

pub mod data_loading;
pub mod error;
pub mod frontier;
pub mod graph_search;
pub mod name_resolution;
pub mod records;
pub mod report;

pub use data_loading::{load_data, DEFAULT_DIRECTORY};
pub use error::{Error, Result};
pub use graph_search::{search_path, shortest_path, PathStep};
pub use name_resolution::{person_id_for_name, Candidate, Disambiguator, PromptDisambiguator};
pub use records::{Movie, Person, RecordStore};
pub use report::describe_path;
