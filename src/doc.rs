//! Document model: placed component instances and the ordered store.
//!
//! This module defines the runtime instance type (`ComponentInstance`), a typed
//! accessor for its property map (`Props`), and the store that owns all placed
//! instances (`Document`).
//!
//! Insertion order is render order. The store is append-only apart from
//! deletion, which removes exactly one element and keeps the relative order of
//! the rest.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::registry::{ComponentDef, ComponentKind, PropMap, PropValue};

/// Unique identifier for a placed instance.
pub type InstanceId = Uuid;

/// A placed occurrence of a component type with its own property values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInstance {
    /// Identifier allocated at placement; never reused or changed.
    pub id: InstanceId,
    /// Component type, fixed at placement.
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// Current property values.
    pub props: PropMap,
}

impl ComponentInstance {
    /// Build a new instance of `def` with a fresh id and a copy of its defaults.
    #[must_use]
    pub fn from_def(def: &ComponentDef) -> Self {
        Self { id: Uuid::new_v4(), kind: def.kind, props: def.default_props.clone() }
    }
}

/// Typed access to an instance's property map with literal fallbacks.
pub struct Props<'a> {
    map: &'a PropMap,
}

impl<'a> Props<'a> {
    /// Wrap a property map for typed access.
    #[must_use]
    pub fn new(map: &'a PropMap) -> Self {
        Self { map }
    }

    /// Raw value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a PropValue> {
        self.map.get(key)
    }

    /// Display form of `key`, or `fallback` when absent or empty.
    #[must_use]
    pub fn str_or(&self, key: &str, fallback: &str) -> String {
        match self.map.get(key) {
            Some(PropValue::Text(s)) if !s.is_empty() => s.clone(),
            Some(PropValue::Int(n)) => n.to_string(),
            _ => fallback.to_owned(),
        }
    }

    /// Display form of `key`, empty when absent.
    #[must_use]
    pub fn str(&self, key: &str) -> String {
        self.str_or(key, "")
    }

    /// Integer reading of `key`. Text values are parsed; unparseable or absent
    /// values yield `None`.
    #[must_use]
    pub fn int(&self, key: &str) -> Option<i64> {
        match self.map.get(key)? {
            PropValue::Int(n) => Some(*n),
            PropValue::Text(s) => match s.trim().parse::<i64>() {
                Ok(n) => Some(n),
                Err(_) => None,
            },
        }
    }
}

/// Ordered store of placed instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    instances: Vec<ComponentInstance>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new instance of `def` at the end of the document.
    pub fn place(&mut self, def: &ComponentDef) -> &ComponentInstance {
        let index = self.instances.len();
        self.instances.push(ComponentInstance::from_def(def));
        &self.instances[index]
    }

    /// Shallow-merge `partial` into the instance's properties. Returns false if
    /// the instance doesn't exist.
    pub fn update(&mut self, id: &InstanceId, partial: &PropMap) -> bool {
        let Some(inst) = self.instances.iter_mut().find(|i| i.id == *id) else {
            return false;
        };
        for (k, v) in partial {
            inst.props.insert(k.clone(), v.clone());
        }
        true
    }

    /// Remove an instance by id, returning it if it was present.
    pub fn remove(&mut self, id: &InstanceId) -> Option<ComponentInstance> {
        let index = self.position(id)?;
        Some(self.instances.remove(index))
    }

    /// Return a reference to an instance by id.
    #[must_use]
    pub fn find(&self, id: &InstanceId) -> Option<&ComponentInstance> {
        self.instances.iter().find(|i| i.id == *id)
    }

    /// Render-order index of an instance.
    #[must_use]
    pub fn position(&self, id: &InstanceId) -> Option<usize> {
        self.instances.iter().position(|i| i.id == *id)
    }

    /// Whether an instance with `id` is present.
    #[must_use]
    pub fn contains(&self, id: &InstanceId) -> bool {
        self.position(id).is_some()
    }

    /// Instances in render order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentInstance> {
        self.instances.iter()
    }

    /// Instance ids in render order.
    #[must_use]
    pub fn ids(&self) -> Vec<InstanceId> {
        self.instances.iter().map(|i| i.id).collect()
    }

    /// Number of placed instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` if nothing has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
