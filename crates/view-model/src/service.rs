//! Model service

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::{ViewModel, ViewModelId};

/// Resolves view-model identifiers to live view-models
///
/// Behavior on unknown identifiers is this service's contract; callers
/// surface whatever it returns.
pub trait ModelService: Send + Sync {
    fn get_view(&self, id: &ViewModelId) -> Option<Arc<ViewModel>>;
}

/// In-memory model store
pub struct InMemoryModelService {
    models: RwLock<HashMap<ViewModelId, Arc<ViewModel>>>,
}

impl InMemoryModelService {
    pub fn new() -> Self {
        Self {
            models: RwLock::new(HashMap::new()),
        }
    }

    /// Insert a model, replacing any previous one with the same id
    pub fn insert(&self, model: Arc<ViewModel>) {
        self.models.write().insert(model.id().clone(), model);
    }

    pub fn remove(&self, id: &ViewModelId) -> Option<Arc<ViewModel>> {
        self.models.write().remove(id)
    }

    pub fn len(&self) -> usize {
        self.models.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.read().is_empty()
    }
}

impl Default for InMemoryModelService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelService for InMemoryModelService {
    fn get_view(&self, id: &ViewModelId) -> Option<Arc<ViewModel>> {
        self.models.read().get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let models = InMemoryModelService::new();
        let model = Arc::new(ViewModel::new("m1", "AnyView"));
        models.insert(Arc::clone(&model));

        let found = models.get_view(&ViewModelId::from("m1")).unwrap();
        assert!(Arc::ptr_eq(&found, &model));
    }

    #[test]
    fn test_unknown_id_is_none() {
        let models = InMemoryModelService::new();
        assert!(models.get_view(&ViewModelId::from("m1")).is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let models = InMemoryModelService::new();
        models.insert(Arc::new(ViewModel::new("m1", "AnyView")));
        models.insert(Arc::new(ViewModel::new("m1", "FormView")));

        let found = models.get_view(&ViewModelId::from("m1")).unwrap();
        assert_eq!(found.view_type(), "FormView");
        assert_eq!(models.len(), 1);
    }
}
