//! View component trait and types

/// A renderable view component
///
/// What a component renders is the rendering layer's business; the registry
/// only cares about its declared type name.
pub trait ViewComponent: Send + Sync {
    /// Symbolic type name, matched against view-model `view_type` tags
    fn type_name(&self) -> &str;

    /// Human-readable description
    fn description(&self) -> &str {
        ""
    }
}

/// Component defined by its name alone
///
/// Used for the built-in view set and as a stand-in in tests.
#[derive(Debug, Clone)]
pub struct StaticComponent {
    name: String,
    description: String,
}

impl StaticComponent {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

impl ViewComponent for StaticComponent {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_component() {
        let component = StaticComponent::new("FormView").with_description("form layout");
        assert_eq!(component.type_name(), "FormView");
        assert_eq!(component.description(), "form layout");
    }
}
