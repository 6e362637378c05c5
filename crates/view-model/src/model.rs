//! View-model data object

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::children::ChildRef;
use crate::props::{PropContext, PropValue, PropertyResolvable};

/// View-model identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewModelId(String);

impl ViewModelId {
    pub fn from_string(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ViewModelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for ViewModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A computed property resolver attached to a view-model
pub type ComputedProp =
    Arc<dyn Fn(&ViewModel, &PropContext) -> Option<PropValue> + Send + Sync>;

/// Data object describing what should be displayed
///
/// Owned by the application's model layer; views hold non-owning references.
/// Properties live in a plain bag, with optional computed resolvers layered
/// on top. Property resolution never mutates the model.
pub struct ViewModel {
    /// Unique id within the model layer
    id: ViewModelId,
    /// Declared view type, matched against the component registry
    view_type: String,
    /// Stored properties
    props: HashMap<String, serde_json::Value>,
    /// Child entries, present only on container-like models
    children: Option<Vec<ChildRef>>,
    /// Computed property resolvers, checked before stored properties
    computed: HashMap<String, ComputedProp>,
}

impl ViewModel {
    pub fn new(id: &str, view_type: &str) -> Self {
        Self {
            id: ViewModelId::from(id),
            view_type: view_type.to_string(),
            props: HashMap::new(),
            children: None,
            computed: HashMap::new(),
        }
    }

    pub fn with_prop<T: Serialize>(mut self, key: &str, value: T) -> Self {
        self.props
            .insert(key.to_string(), serde_json::to_value(value).unwrap());
        self
    }

    pub fn with_children(mut self, children: Vec<ChildRef>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn with_computed<F>(mut self, name: &str, resolver: F) -> Self
    where
        F: Fn(&ViewModel, &PropContext) -> Option<PropValue> + Send + Sync + 'static,
    {
        self.computed.insert(name.to_string(), Arc::new(resolver));
        self
    }

    pub fn id(&self) -> &ViewModelId {
        &self.id
    }

    pub fn view_type(&self) -> &str {
        &self.view_type
    }

    /// Stored property, deserialized to the requested type
    pub fn prop<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        self.props
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Raw children entries, if this model is a container
    pub fn children(&self) -> Option<&[ChildRef]> {
        self.children.as_deref()
    }
}

impl PropertyResolvable for ViewModel {
    fn resolve_property(&self, name: &str, ctx: &PropContext) -> Option<PropValue> {
        if let Some(resolver) = self.computed.get(name) {
            return resolver(self, ctx);
        }

        if name == "children" {
            return self.children.clone().map(PropValue::Children);
        }

        self.props.get(name).cloned().map(PropValue::Json)
    }
}

impl std::fmt::Debug for ViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewModel")
            .field("id", &self.id)
            .field("view_type", &self.view_type)
            .field("props", &self.props)
            .field("children", &self.children)
            .field("computed", &self.computed.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::call_prop;

    fn ctx() -> PropContext {
        PropContext::new("svc-1".into(), "ContainerView")
    }

    #[test]
    fn test_stored_prop_resolves() {
        let model = ViewModel::new("m1", "FormView").with_prop("title", "Settings");

        match call_prop(&model, "title", &ctx()) {
            Some(PropValue::Json(v)) => assert_eq!(v, serde_json::json!("Settings")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_children_prop_resolves_as_children() {
        let model = ViewModel::new("m1", "ContainerView")
            .with_children(vec![ChildRef::from("c1")]);

        let children = call_prop(&model, "children", &ctx())
            .and_then(PropValue::into_children)
            .unwrap();
        assert_eq!(children.len(), 1);
        assert!(children[0].is_reference());
    }

    #[test]
    fn test_computed_wins_over_stored() {
        let model = ViewModel::new("m1", "FormView")
            .with_prop("title", "stored")
            .with_computed("title", |_, _| {
                Some(PropValue::Json(serde_json::json!("computed")))
            });

        match call_prop(&model, "title", &ctx()) {
            Some(PropValue::Json(v)) => assert_eq!(v, serde_json::json!("computed")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_missing_children_is_none() {
        let model = ViewModel::new("m1", "FormView");
        assert!(call_prop(&model, "children", &ctx()).is_none());
    }

    #[test]
    fn test_typed_prop_accessor() {
        let model = ViewModel::new("m1", "FormView").with_prop("columns", 3);
        assert_eq!(model.prop::<i64>("columns"), Some(3));
        assert_eq!(model.prop::<i64>("rows"), None);
    }
}
