//! Path search over the co-star graph.
//!
//! Nodes are people; two people are adjacent when they share a movie. Neighbors are derived
//! on demand from the [`RecordStore`], there is no precomputed adjacency list.

use std::collections::HashSet;

use tracing::debug;

use crate::frontier::{Frontier, QueueFrontier, SearchNode};
use crate::records::RecordStore;

/// One degree of separation: the movie linking the previous person to `person_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    pub movie_id: String,
    pub person_id: String,
}

impl PathStep {
    pub fn new(movie_id: impl Into<String>, person_id: impl Into<String>) -> Self {
        Self {
            movie_id: movie_id.into(),
            person_id: person_id.into(),
        }
    }
}

/// Breadth-first search for the fewest-movies path from `source` to `target`.
///
/// Returns `None` when the two are not connected and an empty path when they are the same
/// person. Among several shortest paths the one returned follows neighbor iteration order
/// (sorted ids); it is not a canonical choice.
pub fn shortest_path<'a>(
    store: &'a RecordStore,
    source: &'a str,
    target: &str,
) -> Option<Vec<PathStep>> {
    search_path::<QueueFrontier<'a>>(store, source, target)
}

/// Frontier-generic search. With [`QueueFrontier`] this is `shortest_path`; with a
/// [`StackFrontier`](crate::frontier::StackFrontier) it is depth-first and only finds *a* path.
pub fn search_path<'a, F: Frontier<'a>>(
    store: &'a RecordStore,
    source: &'a str,
    target: &str,
) -> Option<Vec<PathStep>> {
    let mut frontier = F::default();
    frontier.add(SearchNode::root(source));

    let mut explored: HashSet<&'a str> = HashSet::new();
    let mut expanded: Vec<SearchNode<'a>> = Vec::new(); // arena that `parent` indexes into

    while !frontier.is_empty() {
        let Ok(node) = frontier.remove() else { break };

        if node.state == target {
            let path = reconstruct(&expanded, node);
            debug!(
                expanded = expanded.len(),
                degrees = path.len(),
                "path found"
            );
            return Some(path);
        }

        explored.insert(node.state);
        expanded.push(node);
        let parent = expanded.len() - 1;

        for (movie_id, person_id) in store.neighbors_for_person(node.state) {
            if !frontier.contains_state(person_id) && !explored.contains(person_id) {
                frontier.add(SearchNode {
                    state: person_id,
                    parent: Some(parent),
                    movie: Some(movie_id),
                });
            }
        }
    }

    debug!(expanded = expanded.len(), "frontier exhausted, no path");
    None
}

// walks parent links back to the root, then flips the steps into source -> target order
fn reconstruct<'a>(expanded: &[SearchNode<'a>], mut node: SearchNode<'a>) -> Vec<PathStep> {
    let mut path = Vec::new();
    while let (Some(parent), Some(movie)) = (node.parent, node.movie) {
        path.push(PathStep::new(movie, node.state));
        node = expanded[parent];
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontier::StackFrontier;
    use crate::records::tests::{movie, person, sample_store, star};

    fn steps(pairs: &[(&str, &str)]) -> Vec<PathStep> {
        pairs.iter().map(|(m, p)| PathStep::new(*m, *p)).collect()
    }

    // A-B (1), A-C (2), B-D (3), C-E (4), E-D (5); shortest A->D is A-B-D
    fn diamond_store() -> RecordStore {
        RecordStore::from_rows(
            ["A", "B", "C", "D", "E"].map(|id| person(id, id, "")),
            ["1", "2", "3", "4", "5"].map(|id| movie(id, id)),
            vec![
                star("A", "1"),
                star("B", "1"),
                star("A", "2"),
                star("C", "2"),
                star("B", "3"),
                star("D", "3"),
                star("C", "4"),
                star("E", "4"),
                star("E", "5"),
                star("D", "5"),
            ],
        )
    }

    #[test]
    fn test_shortest_path_through_shared_costar() {
        let store = sample_store();
        let path = shortest_path(&store, "1", "3").unwrap();
        assert_eq!(path, steps(&[("10", "2"), ("11", "3")]));
    }

    #[test]
    fn test_same_person_is_zero_degrees() {
        let store = sample_store();
        assert_eq!(shortest_path(&store, "2", "2"), Some(Vec::new()));
    }

    #[test]
    fn test_direct_costars_are_one_degree() {
        let store = sample_store();
        let path = shortest_path(&store, "3", "2").unwrap();
        assert_eq!(path, steps(&[("11", "2")]));
    }

    #[test]
    fn test_disconnected_people_have_no_path() {
        let store = RecordStore::from_rows(
            vec![
                person("1", "Alice", ""),
                person("2", "Bob", ""),
                person("3", "Carol", ""),
                person("4", "Dan", ""),
            ],
            vec![movie("10", "Movie A"), movie("11", "Movie B")],
            vec![star("1", "10"), star("2", "10"), star("3", "11"), star("4", "11")],
        );
        assert_eq!(shortest_path(&store, "1", "4"), None);
        assert_eq!(shortest_path(&store, "1", "missing"), None);
    }

    #[test]
    fn test_path_length_matches_known_distance() {
        // chain 0-1-2-3-4-5 plus a detour 0-x-y-z-w-v-5 that is one step longer
        let ids = ["0", "1", "2", "3", "4", "5", "x", "y", "z", "w", "v"];
        let chain = ["0", "1", "2", "3", "4", "5"];
        let detour = ["0", "x", "y", "z", "w", "v", "5"];

        let mut movies = Vec::new();
        let mut stars = Vec::new();
        for (prefix, route) in [("c", &chain[..]), ("d", &detour[..])] {
            for (i, pair) in route.windows(2).enumerate() {
                let movie_id = format!("{prefix}{i}");
                movies.push(movie(&movie_id, &movie_id));
                stars.push(star(pair[0], &movie_id));
                stars.push(star(pair[1], &movie_id));
            }
        }
        let store = RecordStore::from_rows(ids.map(|id| person(id, id, "")), movies, stars);

        let path = shortest_path(&store, "0", "5").unwrap();
        assert_eq!(path.len(), 5);
        let people: Vec<_> = path.iter().map(|s| s.person_id.as_str()).collect();
        assert_eq!(people, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_every_step_is_a_real_shared_movie() {
        let store = diamond_store();
        let path = shortest_path(&store, "A", "D").unwrap();

        let mut previous = "A".to_string();
        for step in &path {
            let stars = &store.movie(&step.movie_id).unwrap().stars;
            assert!(stars.contains(&previous));
            assert!(stars.contains(&step.person_id));
            previous = step.person_id.clone();
        }
        assert_eq!(previous, "D");
    }

    #[test]
    fn test_breadth_first_beats_depth_first() {
        let store = diamond_store();

        let bfs = search_path::<QueueFrontier>(&store, "A", "D").unwrap();
        assert_eq!(bfs, steps(&[("1", "B"), ("3", "D")]));

        // the stack expands C before B and walks the long way round
        let dfs = search_path::<StackFrontier>(&store, "A", "D").unwrap();
        assert_eq!(dfs, steps(&[("2", "C"), ("4", "E"), ("5", "D")]));
    }

    #[test]
    fn test_tie_break_is_reproducible() {
        // A-B-D and A-C-D are both two degrees
        let store = RecordStore::from_rows(
            ["A", "B", "C", "D"].map(|id| person(id, id, "")),
            ["1", "2", "3", "4"].map(|id| movie(id, id)),
            vec![
                star("A", "1"),
                star("B", "1"),
                star("A", "2"),
                star("C", "2"),
                star("B", "3"),
                star("D", "3"),
                star("C", "4"),
                star("D", "4"),
            ],
        );
        let first = shortest_path(&store, "A", "D").unwrap();
        assert_eq!(first.len(), 2);
        for _ in 0..5 {
            assert_eq!(shortest_path(&store, "A", "D").unwrap(), first);
        }
    }
}
