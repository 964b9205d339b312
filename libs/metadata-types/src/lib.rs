//! Shared value types for service metadata synchronization.
//!
//! Everything in this crate is plain data plus deterministic
//! computation (key construction, revision hashing). No I/O and no
//! global state; the synchronization module composes these types with
//! its cache, store and directory collaborators.

pub mod definition;
pub mod identifier;
pub mod instance;
pub mod invocation;
pub mod model;
pub mod url;

pub use definition::{build_service_definition, MethodDefinition, ServiceDefinition, ServiceModel};
pub use identifier::{MetadataIdentifier, Side, SubscriberMetadataIdentifier, DEFAULT_GROUP};
pub use instance::ServiceInstance;
pub use invocation::{Invocation, InvocationResult};
pub use model::{MetadataInfo, ServiceDescriptor, EXPORTED_SERVICES_REVISION_KEY};
pub use url::ServiceUrl;
