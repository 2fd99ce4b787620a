//! Turning a typed name into a single person id.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::records::RecordStore;

/// One of several people sharing the requested name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub birth: Option<&'a str>,
}

/// Picks one id when a name matches more than one person.
///
/// Returning `None`, or an id that was not offered, resolves the name to nobody.
pub trait Disambiguator {
    fn choose(&mut self, name: &str, candidates: &[Candidate<'_>]) -> Option<String>;
}

/// Looks up `name` case-insensitively.
///
/// No match gives `None`; one match gives its id; several matches are handed to
/// `disambiguator` and its answer is only accepted if it names one of the candidates.
pub fn person_id_for_name<'a>(
    store: &'a RecordStore,
    name: &str,
    disambiguator: &mut dyn Disambiguator,
) -> Option<&'a str> {
    let ids = store.ids_for_name(name.trim())?;

    let mut candidates: Vec<Candidate<'a>> = ids
        .iter()
        .filter_map(|id| {
            store.person(id).map(|p| Candidate {
                id: id.as_str(),
                name: p.name.as_str(),
                birth: p.birth.as_deref(),
            })
        })
        .collect();

    match candidates.len() {
        0 => None,
        1 => candidates.pop().map(|c| c.id),
        n => {
            debug!(name, matches = n, "ambiguous name");
            let choice = disambiguator.choose(name, &candidates)?;
            let choice = choice.trim();
            candidates.iter().find(|c| c.id == choice).map(|c| c.id)
        }
    }
}

/// Asks on a line-oriented console which of the candidates was meant.
pub struct PromptDisambiguator<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptDisambiguator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, name: &str, candidates: &[Candidate<'_>]) -> std::io::Result<String> {
        writeln!(self.output, "Which '{name}'?")?;
        for c in candidates {
            writeln!(
                self.output,
                "ID: {}, Name: {}, Birth: {}",
                c.id,
                c.name,
                c.birth.unwrap_or("")
            )?;
        }
        write!(self.output, "Intended Person ID: ")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Disambiguator for PromptDisambiguator<R, W> {
    fn choose(&mut self, name: &str, candidates: &[Candidate<'_>]) -> Option<String> {
        // an unreadable answer is treated like a wrong one
        self.prompt(name, candidates).ok()
    }
}
