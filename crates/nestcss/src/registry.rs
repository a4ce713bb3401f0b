//! Explicit ownership of live runtime instances.
//!
//! Whatever manages instance lifetimes (a page or session controller) holds a
//! [`RuntimeRegistry`] and registers instances as it creates them. Instances
//! are removed with [`RuntimeRegistry::unregister`], which hands the instance
//! back so its sink can be disposed.

use crate::error::RenderError;
use crate::runtime::RuntimeInstance;
use crate::sink::RuleSink;
use crate::variables::Variables;
use std::collections::BTreeMap;

/// Handle returned by [`RuntimeRegistry::register`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

/// Live instances in registration order.
#[derive(Debug)]
pub struct RuntimeRegistry<S: RuleSink> {
    next_id: u64,
    instances: BTreeMap<InstanceId, RuntimeInstance<S>>,
}

impl<S: RuleSink> Default for RuntimeRegistry<S> {
    fn default() -> Self {
        Self {
            next_id: 0,
            instances: BTreeMap::new(),
        }
    }
}

impl<S: RuleSink> RuntimeRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, instance: RuntimeInstance<S>) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id += 1;
        self.instances.insert(id, instance);
        log::debug!("REGISTRY: registered {:?} ({} live)", id, self.instances.len());
        id
    }

    /// Removes an instance. Ids are never reused.
    pub fn unregister(&mut self, id: InstanceId) -> Option<RuntimeInstance<S>> {
        let removed = self.instances.remove(&id);
        if removed.is_some() {
            log::debug!("REGISTRY: unregistered {:?} ({} live)", id, self.instances.len());
        }
        removed
    }

    pub fn get(&self, id: InstanceId) -> Option<&RuntimeInstance<S>> {
        self.instances.get(&id)
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut RuntimeInstance<S>> {
        self.instances.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (InstanceId, &RuntimeInstance<S>)> {
        self.instances.iter().map(|(id, instance)| (*id, instance))
    }

    /// Re-renders every live instance with the same overrides.
    ///
    /// A failing instance does not stop the others; failures are returned
    /// with the id of the instance they came from.
    pub fn render_all_with_variables(
        &mut self,
        overrides: &Variables,
    ) -> Vec<(InstanceId, RenderError)> {
        self.instances
            .iter_mut()
            .filter_map(|(id, instance)| {
                instance
                    .render_with_variables(overrides)
                    .err()
                    .map(|err| (*id, err))
            })
            .collect()
    }

    /// Unregisters and disposes every instance, returning their sinks.
    pub fn dispose_all(&mut self) -> Vec<S> {
        std::mem::take(&mut self.instances)
            .into_values()
            .map(RuntimeInstance::dispose)
            .collect()
    }
}
