//! Transition graph: source state to the set of allowed target states.

use super::state::{State, StateCatalog};
use std::collections::{BTreeMap, BTreeSet};

/// Canonical adjacency map of a machine type.
///
/// Every catalog state is a key; states without configured edges map to an
/// empty set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionGraph {
    edges: BTreeMap<State, BTreeSet<State>>,
}

impl TransitionGraph {
    /// Targets reachable from `from`, or `None` if `from` is not a key.
    pub fn targets(&self, from: &State) -> Option<&BTreeSet<State>> {
        self.edges.get(from)
    }

    pub fn allows(&self, from: &State, to: &State) -> bool {
        self.edges
            .get(from)
            .is_some_and(|targets| targets.contains(to))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&State, &BTreeSet<State>)> {
        self.edges.iter()
    }

    /// Number of source states (always the catalog size once built).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }
}

/// Accumulates edges from several configuration sources.
///
/// Contributions to the same source are unioned, never overwritten. Only
/// translated states should be passed in.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    edges: BTreeMap<State, BTreeSet<State>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `from` as a source without adding an edge.
    pub fn touch(&mut self, from: State) -> &mut Self {
        self.edges.entry(from).or_default();
        self
    }

    pub fn add_edge(&mut self, from: State, to: State) -> &mut Self {
        self.edges.entry(from).or_default().insert(to);
        self
    }

    /// Finish the graph, giving every catalog state at least an empty set.
    pub fn build(mut self, catalog: &StateCatalog) -> TransitionGraph {
        for state in catalog {
            self.edges.entry(state.clone()).or_default();
        }
        TransitionGraph { edges: self.edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StateCatalog {
        StateCatalog::from_pairs([("A", "a"), ("B", "b"), ("C", "c")])
    }

    fn state(value: &str) -> State {
        State::new(value.to_uppercase(), value)
    }

    #[test]
    fn build_fills_missing_sources() {
        let graph = GraphBuilder::new().build(&catalog());

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.targets(&state("a")).unwrap().is_empty());
    }

    #[test]
    fn edges_into_same_source_are_unioned() {
        let mut builder = GraphBuilder::new();
        builder
            .add_edge(state("a"), state("b"))
            .add_edge(state("a"), state("c"))
            .add_edge(state("a"), state("b"));
        let graph = builder.build(&catalog());

        let targets = graph.targets(&state("a")).unwrap();
        assert_eq!(targets.len(), 2);
        assert!(graph.allows(&state("a"), &state("b")));
        assert!(graph.allows(&state("a"), &state("c")));
        assert!(!graph.allows(&state("b"), &state("a")));
    }

    #[test]
    fn touch_keeps_existing_edges() {
        let mut builder = GraphBuilder::new();
        builder.add_edge(state("a"), state("b")).touch(state("a"));
        let graph = builder.build(&catalog());

        assert!(graph.allows(&state("a"), &state("b")));
    }
}
