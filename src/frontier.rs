//! Search nodes and the frontiers that hold them between discovery and expansion.

use std::collections::{HashMap, VecDeque};

use crate::error::{Error, Result};

/// A person reached during one search.
///
/// `parent` indexes the search's arena of expanded nodes; the root has no parent and no movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode<'a> {
    pub state: &'a str,
    pub parent: Option<usize>,
    pub movie: Option<&'a str>,
}

impl<'a> SearchNode<'a> {
    pub fn root(state: &'a str) -> Self {
        Self {
            state,
            parent: None,
            movie: None,
        }
    }
}

/// Nodes that have been discovered but not yet expanded.
///
/// The removal order decides the search: first-in-first-out is breadth-first,
/// last-in-first-out is depth-first.
pub trait Frontier<'a>: Default {
    fn add(&mut self, node: SearchNode<'a>);

    /// Takes the next node, or `Error::EmptyFrontier` when there is none.
    fn remove(&mut self) -> Result<SearchNode<'a>>;

    fn contains_state(&self, state: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// queued states with multiplicity, so membership stays O(1)
#[derive(Debug, Default)]
struct QueuedStates<'a>(HashMap<&'a str, usize>);

impl<'a> QueuedStates<'a> {
    fn insert(&mut self, state: &'a str) {
        *self.0.entry(state).or_insert(0) += 1;
    }

    fn remove(&mut self, state: &str) {
        if let Some(count) = self.0.get_mut(state) {
            *count -= 1;
            if *count == 0 {
                self.0.remove(state);
            }
        }
    }

    fn contains(&self, state: &str) -> bool {
        self.0.contains_key(state)
    }
}

/// FIFO frontier. Gives breadth-first order and therefore shortest paths.
#[derive(Debug, Default)]
pub struct QueueFrontier<'a> {
    nodes: VecDeque<SearchNode<'a>>,
    states: QueuedStates<'a>,
}

impl<'a> Frontier<'a> for QueueFrontier<'a> {
    fn add(&mut self, node: SearchNode<'a>) {
        self.states.insert(node.state);
        self.nodes.push_back(node);
    }

    fn remove(&mut self) -> Result<SearchNode<'a>> {
        let node = self.nodes.pop_front().ok_or(Error::EmptyFrontier)?;
        self.states.remove(node.state);
        Ok(node)
    }

    fn contains_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// LIFO frontier. Gives depth-first order: a path, not necessarily a shortest one.
#[derive(Debug, Default)]
pub struct StackFrontier<'a> {
    nodes: Vec<SearchNode<'a>>,
    states: QueuedStates<'a>,
}

impl<'a> Frontier<'a> for StackFrontier<'a> {
    fn add(&mut self, node: SearchNode<'a>) {
        self.states.insert(node.state);
        self.nodes.push(node);
    }

    fn remove(&mut self) -> Result<SearchNode<'a>> {
        let node = self.nodes.pop().ok_or(Error::EmptyFrontier)?;
        self.states.remove(node.state);
        Ok(node)
    }

    fn contains_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}
