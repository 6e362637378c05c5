//! Component factories

use std::sync::Arc;

use async_trait::async_trait;

use crate::component::ViewComponent;
use crate::RegistryError;

/// Loader for a component that is fetched on first use
#[async_trait]
pub trait ComponentLoader: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn ViewComponent>, RegistryError>;
}

/// Produces a component, either already loaded or on demand
///
/// Consumers treat both variants uniformly through [`ComponentFactory::load`];
/// deferred loaders run only when instantiation is requested.
#[derive(Clone)]
pub enum ComponentFactory {
    /// Component available immediately
    Eager(Arc<dyn ViewComponent>),
    /// Component produced by a loader on first request
    Deferred(Arc<dyn ComponentLoader>),
}

impl ComponentFactory {
    pub fn eager<C: ViewComponent + 'static>(component: C) -> Self {
        ComponentFactory::Eager(Arc::new(component))
    }

    pub fn deferred<L: ComponentLoader + 'static>(loader: L) -> Self {
        ComponentFactory::Deferred(Arc::new(loader))
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, ComponentFactory::Deferred(_))
    }

    /// Produce the component, awaiting the loader for deferred factories
    pub async fn load(&self) -> Result<Arc<dyn ViewComponent>, RegistryError> {
        match self {
            ComponentFactory::Eager(component) => Ok(Arc::clone(component)),
            ComponentFactory::Deferred(loader) => loader.load().await,
        }
    }
}

impl std::fmt::Debug for ComponentFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentFactory::Eager(component) => f
                .debug_tuple("Eager")
                .field(&component.type_name())
                .finish(),
            ComponentFactory::Deferred(_) => f.debug_tuple("Deferred").field(&"<loader>").finish(),
        }
    }
}

/// Simple function-based loader
pub struct FnLoader<F>
where
    F: Fn() -> Result<Arc<dyn ViewComponent>, RegistryError> + Send + Sync,
{
    loader: F,
}

impl<F> FnLoader<F>
where
    F: Fn() -> Result<Arc<dyn ViewComponent>, RegistryError> + Send + Sync,
{
    pub fn new(loader: F) -> Self {
        Self { loader }
    }
}

#[async_trait]
impl<F> ComponentLoader for FnLoader<F>
where
    F: Fn() -> Result<Arc<dyn ViewComponent>, RegistryError> + Send + Sync,
{
    async fn load(&self) -> Result<Arc<dyn ViewComponent>, RegistryError> {
        (self.loader)()
    }
}
