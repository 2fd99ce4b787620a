use crate::graph_search::PathStep;
use crate::records::RecordStore;

/// One numbered line per degree: `"1: Alice and Bob starred in Movie A"`.
pub fn describe_path(store: &RecordStore, source: &str, path: &[PathStep]) -> Vec<String> {
    let name_of = |id: &str| store.person(id).map_or(id, |p| p.name.as_str()).to_string();

    let mut previous = source;
    path.iter()
        .enumerate()
        .map(|(i, step)| {
            let title = store
                .movie(&step.movie_id)
                .map_or(step.movie_id.as_str(), |m| m.title.as_str());
            let line = format!(
                "{}: {} and {} starred in {}",
                i + 1,
                name_of(previous),
                name_of(step.person_id.as_str()),
                title
            );
            previous = step.person_id.as_str();
            line
        })
        .collect()
}
