//! Per-dataset preprocessing hooks.
//!
//! Some source datasets need a transform before any key extraction happens
//! (renaming a column, dropping bogus features, and so on). Hooks are
//! registered per `(slug, phase)`; a missing hook is the identity.

use crate::record::RecordSet;
use std::collections::HashMap;

/// Pipeline phase a hook attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Runs right after ingest, before column selection.
    Before,
}

type Hook = Box<dyn Fn(RecordSet) -> RecordSet>;

/// Registry of per-dataset transforms.
#[derive(Default)]
pub struct HookRegistry {
    hooks: HashMap<(String, Phase), Hook>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, slug: impl Into<String>, phase: Phase, hook: F)
    where
        F: Fn(RecordSet) -> RecordSet + 'static,
    {
        self.hooks.insert((slug.into(), phase), Box::new(hook));
    }

    /// Applies the hook registered for `(slug, phase)`, or returns the set
    /// unchanged when none is registered.
    pub fn run(&self, slug: &str, phase: Phase, set: RecordSet) -> RecordSet {
        match self.hooks.get(&(slug.to_string(), phase)) {
            Some(hook) => hook(set),
            None => set,
        }
    }
}
