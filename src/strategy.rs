//! Strategies that choose plays, and a registry to build them by name.
//!
//! Any randomness a strategy needs comes from a seed handed to its
//! constructor, so games are reproducible.

mod greedy;
mod human;
mod random;

use std::fmt;
use std::sync::Arc;

use crate::game::Player;

pub use greedy::Greedy;
pub use human::Human;
pub use random::Random;

/// Builds a strategy from a seed.
pub type Constructor = fn(u64) -> Arc<dyn Player>;

/// A registered strategy.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    /// Name the strategy is built by.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    constructor: Constructor,
}

impl Entry {
    /// Build the strategy with the seed.
    #[must_use]
    pub fn build(&self, seed: u64) -> Arc<dyn Player> {
        (self.constructor)(seed)
    }
}

/// Strategies by name.
#[derive(Clone, Default)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every strategy in this crate.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(
            "random",
            "chooses uniformly among the legal plays",
            |seed| Arc::new(Random::new(seed)),
        );
        registry.register(
            "greedy",
            "chooses the play leaving the best position one turn ahead",
            |seed| Arc::new(Greedy::new(seed)),
        );
        registry.register(
            "search",
            "chooses the play leading to the best position within a radius of one turn",
            |seed| Arc::new(Greedy::search(seed)),
        );
        registry.register("human", "makes the play it was told to make", |_| {
            Arc::new(Human::new())
        });
        registry
    }

    /// Register a strategy, replacing any with the same name.
    pub fn register(
        &mut self,
        name: &'static str,
        description: &'static str,
        constructor: Constructor,
    ) {
        let entry = Entry {
            name,
            description,
            constructor,
        };
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Registered strategies in registration order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up a strategy by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Build the named strategy with the seed.
    #[must_use]
    pub fn create(&self, name: &str, seed: u64) -> Option<Arc<dyn Player>> {
        self.get(name).map(|entry| entry.build(seed))
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| e.name))
            .finish()
    }
}
