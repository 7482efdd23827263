//! Component registry
//!
//! Components are registered once at configuration time. The ordered list
//! drives the palette menu; the key index resolves blocks to their renderer.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::errors::{EditorError, Result};

/// Produces a fresh element each time it is called.
pub type RenderFn<R> = Arc<dyn Fn() -> R>;

/// Registered metadata for a palette component.
pub struct ComponentDescriptor<R> {
    pub key: String,
    pub label: String,
    /// Palette thumbnail
    pub preview: RenderFn<R>,
    /// Live block content
    pub render: RenderFn<R>,
}

impl<R> ComponentDescriptor<R> {
    pub fn preview(&self) -> R {
        (self.preview)()
    }

    pub fn render(&self) -> R {
        (self.render)()
    }
}

impl<R> fmt::Debug for ComponentDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

pub struct ComponentRegistry<R> {
    list: Vec<Arc<ComponentDescriptor<R>>>,
    map: HashMap<String, Arc<ComponentDescriptor<R>>>,
}

impl<R> ComponentRegistry<R> {
    pub fn new() -> Self {
        Self {
            list: Vec::new(),
            map: HashMap::new(),
        }
    }

    /// Register a component under `key`.
    ///
    /// Re-registering a key replaces the earlier descriptor, keeping its place
    /// in the menu.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        preview: impl Fn() -> R + 'static,
        render: impl Fn() -> R + 'static,
    ) -> &mut Self {
        let descriptor = Arc::new(ComponentDescriptor {
            key: key.into(),
            label: label.into(),
            preview: Arc::new(preview),
            render: Arc::new(render),
        });

        match self.list.iter().position(|c| c.key == descriptor.key) {
            Some(ix) => {
                tracing::warn!(key = %descriptor.key, "component re-registered, replacing earlier descriptor");
                self.list[ix] = descriptor.clone();
            }
            None => {
                tracing::debug!(key = %descriptor.key, label = %descriptor.label, "component registered");
                self.list.push(descriptor.clone());
            }
        }
        self.map.insert(descriptor.key.clone(), descriptor);
        self
    }

    /// Look up a component by key.
    pub fn get(&self, key: &str) -> Result<&Arc<ComponentDescriptor<R>>> {
        self.map
            .get(key)
            .ok_or_else(|| EditorError::ComponentNotRegistered(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Components in registration order.
    pub fn components(&self) -> &[Arc<ComponentDescriptor<R>>] {
        &self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<R> Default for ComponentRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}
