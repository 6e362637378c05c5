//! Data-view service contract

use std::sync::Arc;

use view_model::{ModelService, ViewModel, ViewServiceId};

/// Initialization parameters shared by all data-view services
///
/// Bundles the service identity, the bound view-model, and the injected
/// model service; adapters carry these through without interpreting them.
#[derive(Clone)]
pub struct ViewServiceParams {
    /// Service identity
    pub id: ViewServiceId,
    /// Bound view-model (non-owning: the model layer owns it)
    pub model: Arc<ViewModel>,
    /// Model service used to resolve indirect references
    pub models: Arc<dyn ModelService>,
}

impl ViewServiceParams {
    pub fn new(model: Arc<ViewModel>, models: Arc<dyn ModelService>) -> Self {
        Self {
            id: ViewServiceId::from_string(uuid::Uuid::new_v4().to_string()),
            model,
            models,
        }
    }

    pub fn with_id(mut self, id: ViewServiceId) -> Self {
        self.id = id;
        self
    }
}

/// A data-view service bound to one view-model
pub trait DataViewService: Send + Sync {
    /// Declared view type, matched against the component registry
    fn view_type(&self) -> &str;

    /// Service identity
    fn id(&self) -> &ViewServiceId;

    /// Bound view-model
    fn model(&self) -> &Arc<ViewModel>;

    /// Handle the view entering the rendering tree
    fn on_attach(&mut self) {}

    /// Handle the view leaving the rendering tree
    fn on_detach(&mut self) {}
}
