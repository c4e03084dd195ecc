//! One controller per buffer, looked up by key or by document name.

use crate::kernel::controller::SearchController;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

new_key_type! { pub struct BufferId; }

#[derive(Debug, Default)]
pub struct ControllerRegistry {
    controllers: SlotMap<BufferId, SearchController>,
    by_name: FxHashMap<String, BufferId>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `controller` to `name`, dropping any controller previously bound to it.
    pub fn register(&mut self, name: impl Into<String>, controller: SearchController) -> BufferId {
        let name = name.into();
        if let Some(old) = self.by_name.remove(&name) {
            self.controllers.remove(old);
            tracing::debug!(name = %name, "controller replaced");
        }
        let id = self.controllers.insert(controller);
        self.by_name.insert(name, id);
        id
    }

    pub fn find(&self, name: &str) -> Option<BufferId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: BufferId) -> Option<&SearchController> {
        self.controllers.get(id)
    }

    pub fn get_mut(&mut self, id: BufferId) -> Option<&mut SearchController> {
        self.controllers.get_mut(id)
    }

    pub fn remove(&mut self, id: BufferId) -> Option<SearchController> {
        let controller = self.controllers.remove(id)?;
        self.by_name.retain(|_, bound| *bound != id);
        Some(controller)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/registry.rs"]
mod tests;
