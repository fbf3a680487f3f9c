//! Host capability behind `GETNODE` and `GETLINK`.

use rustc_hash::FxHashMap;

use crate::Value;

/// Lookup of domain objects by id.
///
/// The engine calls this with whatever value the rule passed; `None` becomes
/// `Absent` in the rule.
pub trait DomainModel {
    fn node(&self, id: &Value) -> Option<Value>;

    fn link(&self, id: &Value) -> Option<Value>;
}

/// Model backed by two in-memory tables keyed by the id's display text.
///
/// `GETNODE(3)` and `GETNODE('3')` find the same entry.
#[derive(Clone, Debug, Default)]
pub struct InMemoryModel {
    nodes: FxHashMap<String, Value>,
    links: FxHashMap<String, Value>,
}

impl InMemoryModel {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_node(mut self, id: impl Into<Value>, node: impl Into<Value>) -> Self {
        self.nodes.insert(id.into().to_string(), node.into());
        self
    }

    #[must_use]
    pub fn with_link(mut self, id: impl Into<Value>, link: impl Into<Value>) -> Self {
        self.links.insert(id.into().to_string(), link.into());
        self
    }
}

impl DomainModel for InMemoryModel {
    fn node(&self, id: &Value) -> Option<Value> {
        self.nodes.get(&id.to_string()).cloned()
    }

    fn link(&self, id: &Value) -> Option<Value> {
        self.links.get(&id.to_string()).cloned()
    }
}
