//! # Prism View Registry
//!
//! Process-wide mapping from symbolic view-type names to component
//! factories, grouped by category. Factories are eager or deferred; deferred
//! loaders run on first instantiation and the result is cached.

pub mod component;
pub mod factory;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;

pub use component::{StaticComponent, ViewComponent};
pub use factory::{ComponentFactory, ComponentLoader, FnLoader};

/// Registry error
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistryError {
    #[error("Component not found: {0}")]
    NotFound(String),
    #[error("Component load failed: {0}")]
    LoadFailed(String),
}

/// Registry change notification
#[derive(Debug, Clone)]
pub enum RegistryEvent {
    Registered { category: String, name: String },
}

/// Component registry
///
/// Registration never fails and later registrations silently override
/// earlier ones. Resolution of an unknown name is the only error path and is
/// recoverable; callers pick their own fallback.
pub struct ComponentRegistry {
    /// Factories by category, then by type name
    categories: RwLock<HashMap<String, HashMap<String, ComponentFactory>>>,
    /// Components already produced by deferred loaders
    loaded: RwLock<HashMap<(String, String), Arc<dyn ViewComponent>>>,
    /// Event sender
    event_tx: broadcast::Sender<RegistryEvent>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(64);
        Self {
            categories: RwLock::new(HashMap::new()),
            loaded: RwLock::new(HashMap::new()),
            event_tx,
        }
    }

    /// Subscribe to registry events
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.event_tx.subscribe()
    }

    /// Register a factory, overriding any previous entry with the same name
    pub fn register(&self, category: &str, name: &str, factory: ComponentFactory) {
        self.categories
            .write()
            .entry(category.to_string())
            .or_default()
            .insert(name.to_string(), factory);

        // A replaced entry must not serve a stale loaded component
        self.loaded
            .write()
            .remove(&(category.to_string(), name.to_string()));

        tracing::debug!("Registered component: {}/{}", category, name);

        let _ = self.event_tx.send(RegistryEvent::Registered {
            category: category.to_string(),
            name: name.to_string(),
        });
    }

    /// Register a whole name-to-factory table in one call
    pub fn register_components(&self, category: &str, entries: Vec<(&str, ComponentFactory)>) {
        for (name, factory) in entries {
            self.register(category, name, factory);
        }
    }

    /// Look up the factory for a type name
    pub fn resolve(&self, category: &str, name: &str) -> Result<ComponentFactory, RegistryError> {
        self.categories
            .read()
            .get(category)
            .and_then(|entries| entries.get(name))
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(format!("{}/{}", category, name)))
    }

    /// Look up a type name, falling back to another on a miss
    pub fn resolve_or(
        &self,
        category: &str,
        name: &str,
        fallback: &str,
    ) -> Result<ComponentFactory, RegistryError> {
        match self.resolve(category, name) {
            Ok(factory) => Ok(factory),
            Err(_) => self.resolve(category, fallback),
        }
    }

    /// Produce the component for a type name
    ///
    /// Eager factories return immediately; deferred loaders run once and the
    /// loaded component is served from cache afterwards. A failed load is not
    /// cached, so a later call retries the loader.
    pub async fn instantiate(
        &self,
        category: &str,
        name: &str,
    ) -> Result<Arc<dyn ViewComponent>, RegistryError> {
        let key = (category.to_string(), name.to_string());
        if let Some(component) = self.loaded.read().get(&key) {
            return Ok(Arc::clone(component));
        }

        match self.resolve(category, name)? {
            ComponentFactory::Eager(component) => Ok(component),
            ComponentFactory::Deferred(loader) => {
                let component = loader.load().await?;
                tracing::debug!("Loaded deferred component: {}/{}", category, name);
                self.loaded.write().insert(key, Arc::clone(&component));
                Ok(component)
            }
        }
    }

    /// Check if a type name is registered
    pub fn contains(&self, category: &str, name: &str) -> bool {
        self.categories
            .read()
            .get(category)
            .is_some_and(|entries| entries.contains_key(name))
    }

    /// All registered type names in a category
    pub fn names(&self, category: &str) -> Vec<String> {
        self.categories
            .read()
            .get(category)
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Count of entries in a category
    pub fn count(&self, category: &str) -> usize {
        self.categories
            .read()
            .get(category)
            .map(|entries| entries.len())
            .unwrap_or(0)
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn eager(name: &str) -> ComponentFactory {
        ComponentFactory::eager(StaticComponent::new(name))
    }

    #[test]
    fn test_register_and_resolve() {
        let registry = ComponentRegistry::new();
        registry.register("View", "FormView", eager("FormView"));

        let factory = registry.resolve("View", "FormView").unwrap();
        assert!(!factory.is_deferred());
        assert!(registry.contains("View", "FormView"));
        assert_eq!(registry.count("View"), 1);
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        let registry = ComponentRegistry::new();
        let err = registry.resolve("View", "FormView").unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
    }

    #[test]
    fn test_last_registration_wins() {
        let registry = ComponentRegistry::new();
        registry.register("View", "A", eager("componentA"));
        registry.register_components("View", vec![("A", eager("componentB")), ("B", eager("componentC"))]);

        let factory = registry.resolve("View", "A").unwrap();
        match factory {
            ComponentFactory::Eager(c) => assert_eq!(c.type_name(), "componentB"),
            _ => panic!("expected eager"),
        }
        assert!(registry.contains("View", "B"));
        assert!(registry.resolve("View", "C").is_err());
    }

    #[test]
    fn test_resolve_or_falls_back() {
        let registry = ComponentRegistry::new();
        registry.register("View", "AnyView", eager("AnyView"));

        let factory = registry.resolve_or("View", "UnknownView", "AnyView").unwrap();
        match factory {
            ComponentFactory::Eager(c) => assert_eq!(c.type_name(), "AnyView"),
            _ => panic!("expected eager"),
        }
    }

    #[tokio::test]
    async fn test_instantiate_deferred_loads_once() {
        let registry = ComponentRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        registry.register(
            "View",
            "ChatView",
            ComponentFactory::deferred(FnLoader::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Arc::new(StaticComponent::new("ChatView")) as Arc<dyn ViewComponent>)
            })),
        );

        let first = registry.instantiate("View", "ChatView").await.unwrap();
        let second = registry.instantiate("View", "ChatView").await.unwrap();

        assert_eq!(first.type_name(), "ChatView");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1); // loader ran once
    }

    #[tokio::test]
    async fn test_override_invalidates_loaded_cache() {
        let registry = ComponentRegistry::new();
        registry.register(
            "View",
            "ChatView",
            ComponentFactory::deferred(FnLoader::new(|| {
                Ok(Arc::new(StaticComponent::new("old")) as Arc<dyn ViewComponent>)
            })),
        );
        let old = registry.instantiate("View", "ChatView").await.unwrap();
        assert_eq!(old.type_name(), "old");

        registry.register("View", "ChatView", eager("new"));
        let new = registry.instantiate("View", "ChatView").await.unwrap();
        assert_eq!(new.type_name(), "new");
    }

    #[tokio::test]
    async fn test_failed_load_is_retried() {
        let registry = ComponentRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        registry.register(
            "View",
            "FlakyView",
            ComponentFactory::deferred(FnLoader::new(move || {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(RegistryError::LoadFailed("transient".to_string()))
                } else {
                    Ok(Arc::new(StaticComponent::new("FlakyView")) as Arc<dyn ViewComponent>)
                }
            })),
        );

        assert!(registry.instantiate("View", "FlakyView").await.is_err());
        let component = registry.instantiate("View", "FlakyView").await.unwrap();
        assert_eq!(component.type_name(), "FlakyView");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_registration_emits_event() {
        let registry = ComponentRegistry::new();
        let mut events = registry.subscribe();

        registry.register("View", "TreeView", eager("TreeView"));

        match events.try_recv().unwrap() {
            RegistryEvent::Registered { category, name } => {
                assert_eq!(category, "View");
                assert_eq!(name, "TreeView");
            }
        }
    }
}
