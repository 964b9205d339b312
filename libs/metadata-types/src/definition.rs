//! Structured service definitions and the implementation models they
//! are derived from.

use crate::url::ServiceUrl;
use serde::{Deserialize, Serialize};

/// Signature of one method on an exposed interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDefinition {
    pub name: String,
    #[serde(default)]
    pub parameter_types: Vec<String>,
    #[serde(default)]
    pub return_type: String,
}

/// Structured description of one exposed interface: where it lives
/// and what can be called on it. Built on demand from the registered
/// implementation; never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub canonical_name: String,
    /// Address the definition was derived from.
    pub code_source: String,
    #[serde(default)]
    pub methods: Vec<MethodDefinition>,
}

/// Shape of a registered service implementation as resolved from the
/// service directory: the implementation's name and its callable
/// methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceModel {
    pub name: String,
    pub methods: Vec<MethodDefinition>,
}

/// Derive the published definition of `model` as exposed through
/// `url`.
pub fn build_service_definition(model: &ServiceModel, url: &ServiceUrl) -> ServiceDefinition {
    ServiceDefinition {
        canonical_name: url.interface().to_owned(),
        code_source: format!("{}://{}:{}/{}", url.protocol, url.host, url.port, url.path),
        methods: model.methods.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::INTERFACE_KEY;

    #[test]
    fn definition_carries_interface_and_exposing_address() {
        let model = ServiceModel {
            name: "FooImpl".to_owned(),
            methods: vec![MethodDefinition {
                name: "echo".to_owned(),
                parameter_types: vec!["string".to_owned()],
                return_type: "string".to_owned(),
            }],
        };
        let url = ServiceUrl::new("tri", "10.0.0.7", 20880)
            .with_path("com.x.Foo")
            .with_param(INTERFACE_KEY, "com.x.Foo");

        let definition = build_service_definition(&model, &url);
        assert_eq!(definition.canonical_name, "com.x.Foo");
        assert_eq!(definition.code_source, "tri://10.0.0.7:20880/com.x.Foo");
        assert_eq!(definition.methods.len(), 1);
        assert_eq!(definition.methods[0].name, "echo");
    }
}
