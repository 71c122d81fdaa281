//! Configuration validation.
//!
//! [`validate`] turns a raw [`MachineConfig`] into a [`MachineDefinition`]:
//! the canonical, immutable model shared by every instance of a machine
//! type. Validation runs once per machine type and is all-or-nothing.

use crate::builder::config::{MachineConfig, NamedChecker, NamedTransition};
use crate::builder::error::BuildError;
use crate::builder::methods::{is_method, Behavior, MethodTable};
use crate::core::{GraphBuilder, State, StateCatalog, TransitionGraph, Translator};
use std::collections::{BTreeSet, HashSet};

/// Validated machine model.
#[derive(Clone, Debug)]
pub struct MachineDefinition {
    catalog: StateCatalog,
    translator: Translator,
    initial: State,
    graph: TransitionGraph,
    complete: bool,
    methods: MethodTable,
}

impl MachineDefinition {
    pub fn catalog(&self) -> &StateCatalog {
        &self.catalog
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn initial_state(&self) -> &State {
        &self.initial
    }

    pub fn graph(&self) -> &TransitionGraph {
        &self.graph
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn methods(&self) -> &MethodTable {
        &self.methods
    }

    /// Whether moving from `from` to `to` is legal under the completeness
    /// flag and the graph. Both states must be canonical.
    pub fn allows(&self, from: &State, to: &State) -> bool {
        self.complete || self.graph.allows(from, to)
    }
}

/// Default completeness policy.
///
/// An explicit `complete` always wins. Otherwise a machine is complete
/// (every state may move to every state) unless a non-empty transition map
/// or at least one named transition was supplied. Named checkers do not
/// affect the result.
pub fn resolve_completeness(config: &MachineConfig) -> bool {
    config
        .complete
        .unwrap_or_else(|| !config.has_transition_constraints())
}

/// Validate a configuration and produce the canonical model.
pub fn validate(config: &MachineConfig) -> Result<MachineDefinition, BuildError> {
    check_catalog(&config.states)?;

    let mut builder = DefinitionBuilder::new(&config.states);
    let initial = builder.resolve_initial(config.initial_state.as_deref())?;
    builder.add_transition_map(config)?;

    let named_transitions = config
        .named_transitions
        .iter()
        .map(|named| builder.add_named_transition(named))
        .collect::<Result<Vec<_>, _>>()?;
    let named_checkers = config
        .named_checkers
        .iter()
        .map(|named| builder.resolve_named_checker(named))
        .collect::<Result<Vec<_>, _>>()?;

    let methods = build_method_table(&config.states, named_checkers, named_transitions)?;
    let complete = resolve_completeness(config);
    let graph = builder.graph.build(&config.states);

    tracing::debug!(
        states = config.states.len(),
        edges = graph.edge_count(),
        methods = methods.len(),
        complete,
        initial = %initial,
        "Validated machine definition"
    );

    Ok(MachineDefinition {
        catalog: config.states.clone(),
        translator: builder.translator,
        initial,
        graph,
        complete,
        methods,
    })
}

/// Catalog must be non-empty with unique names and unique, non-empty
/// values. A repeated value is reported as the `is_<value>` collision it
/// would cause.
fn check_catalog(catalog: &StateCatalog) -> Result<(), BuildError> {
    if catalog.is_empty() {
        return Err(BuildError::InvalidCatalog {
            reason: "no states given".to_string(),
        });
    }

    let mut names = HashSet::new();
    let mut values = HashSet::new();
    for state in catalog {
        if state.name().is_empty() {
            return Err(BuildError::InvalidCatalog {
                reason: format!("state with value '{}' has an empty name", state.value()),
            });
        }
        if state.value().is_empty() {
            return Err(BuildError::InvalidCatalog {
                reason: format!("state '{}' has an empty value", state.name()),
            });
        }
        if !names.insert(state.name()) {
            return Err(BuildError::InvalidCatalog {
                reason: format!("state name '{}' is declared twice", state.name()),
            });
        }
        if !values.insert(state.value()) {
            return Err(BuildError::NameCollision {
                name: is_method(state.value()),
            });
        }
    }
    Ok(())
}

/// Per-state methods, then fixed methods, then named checkers, then named
/// transitions.
fn build_method_table(
    catalog: &StateCatalog,
    named_checkers: Vec<(String, State)>,
    named_transitions: Vec<(String, Behavior)>,
) -> Result<MethodTable, BuildError> {
    let mut methods = MethodTable::new();
    for state in catalog {
        methods.insert_state(state)?;
    }
    methods.insert_fixed()?;
    for (name, state) in named_checkers {
        methods.insert(name, Behavior::NamedChecker(state))?;
    }
    for (name, behavior) in named_transitions {
        methods.insert(name, behavior)?;
    }
    Ok(methods)
}

/// Transient state carried through validation, dropped once the
/// definition is assembled.
struct DefinitionBuilder<'a> {
    catalog: &'a StateCatalog,
    translator: Translator,
    graph: GraphBuilder,
}

impl<'a> DefinitionBuilder<'a> {
    fn new(catalog: &'a StateCatalog) -> Self {
        Self {
            catalog,
            translator: Translator::new(catalog),
            graph: GraphBuilder::new(),
        }
    }

    fn resolve_initial(&self, initial: Option<&str>) -> Result<State, BuildError> {
        match initial {
            None | Some("") => Err(BuildError::MissingInitialState),
            Some(value) => Ok(self.translator.translate(value)?),
        }
    }

    fn add_transition_map(&mut self, config: &MachineConfig) -> Result<(), BuildError> {
        for (source, targets) in &config.transitions {
            let source = self.translator.translate(source)?;
            self.graph.touch(source.clone());
            for target in targets {
                let target = self.translator.translate(target)?;
                self.graph.add_edge(source.clone(), target);
            }
        }
        Ok(())
    }

    /// Resolve a named transition and add its edges to the graph.
    fn add_named_transition(
        &mut self,
        named: &NamedTransition,
    ) -> Result<(String, Behavior), BuildError> {
        let target = self.translator.translate(&named.target)?;

        let sources: BTreeSet<State> = match &named.from {
            None => self.catalog.iter().cloned().collect(),
            Some(from) => from
                .values()
                .into_iter()
                .map(|value| self.translator.translate(value))
                .collect::<Result<_, _>>()?,
        };

        for source in &sources {
            self.graph.add_edge(source.clone(), target.clone());
        }

        Ok((
            named.method.clone(),
            Behavior::NamedTransition { target, sources },
        ))
    }

    fn resolve_named_checker(&self, named: &NamedChecker) -> Result<(String, State), BuildError> {
        let state = self.translator.translate(&named.state)?;
        Ok((named.method.clone(), state))
    }
}
