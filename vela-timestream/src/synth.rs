//! Synthesis - The seam between declared resources and template output
//!
//! Factories hand a `Declaration` to a `Synthesizer` and build descriptors
//! from the attributes it returns. `StackSynthesizer` is the in-memory
//! implementation backed by an `AccountContext`; turning the recorded
//! template into a deployment is a later phase outside this crate.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use vela_core::context::{AccountContext, ContextError};
use vela_core::token::Pending;

use crate::resources::ResourceConfig;

/// Errors raised while registering a declaration
#[derive(Debug, Error)]
pub enum SynthError {
    /// Ambient context could not produce an ARN
    #[error("Invalid context: {0}")]
    Context(#[from] ContextError),

    /// A resource with this logical id is already declared
    #[error("Duplicate logical id '{0}': each logical resource is registered once")]
    DuplicateLogicalId(String),

    /// The declaration lacks an attribute the resource type requires
    #[error("Missing required attribute '{0}'")]
    MissingAttribute(&'static str),

    /// The synthesizer deferred an attribute the descriptor requires
    #[error("Attribute '{0}' was not resolved by the synthesizer")]
    Unresolved(&'static str),
}

/// One declared resource, as handed to a synthesizer
#[derive(Debug, Clone)]
pub struct Declaration {
    /// Logical id within the declaring scope
    pub logical_id: String,
    /// Effective name resolved by the factory (explicit or scope-generated)
    pub name: String,
    /// Declared properties, keyed by library attribute name
    pub attributes: HashMap<String, serde_json::Value>,
}

impl Declaration {
    pub fn new(logical_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            logical_id: logical_id.into(),
            name: name.into(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

/// Attributes handed back for a registered declaration
///
/// Both values are two-phase: the backend may resolve them immediately or
/// stand them in with tokens for a later phase.
#[derive(Debug, Clone)]
pub struct Registration {
    /// The resource ARN
    pub arn: Pending<String>,
    /// Canonical name; the backend may have normalized the requested one
    pub name: Pending<String>,
}

/// Sink for resource declarations
///
/// Implementations turn declarations into template artifacts; callers only
/// consume the returned attributes.
pub trait Synthesizer {
    fn register(
        &mut self,
        config: &'static ResourceConfig,
        declaration: Declaration,
    ) -> Result<Registration, SynthError>;
}

/// One entry in the synthesized resource map
#[derive(Debug, Clone, Serialize)]
pub struct TemplateResource {
    #[serde(rename = "Type")]
    pub resource_type: String,
    #[serde(rename = "Properties")]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// In-memory synthesizer for a single stack
pub struct StackSynthesizer {
    context: AccountContext,
    resources: HashMap<String, TemplateResource>,
}

impl StackSynthesizer {
    pub fn new(context: AccountContext) -> Self {
        Self {
            context,
            resources: HashMap::new(),
        }
    }

    pub fn context(&self) -> &AccountContext {
        &self.context
    }

    /// A recorded resource by logical id
    pub fn resource(&self, logical_id: &str) -> Option<&TemplateResource> {
        self.resources.get(logical_id)
    }

    /// The recorded resource map as a template document
    pub fn template(&self) -> serde_json::Value {
        serde_json::json!({ "Resources": &self.resources })
    }
}

impl Synthesizer for StackSynthesizer {
    fn register(
        &mut self,
        config: &'static ResourceConfig,
        declaration: Declaration,
    ) -> Result<Registration, SynthError> {
        if self.resources.contains_key(&declaration.logical_id) {
            return Err(SynthError::DuplicateLogicalId(declaration.logical_id));
        }

        for &(lib_name, _, required) in config.attributes {
            if required && !declaration.attributes.contains_key(lib_name) {
                return Err(SynthError::MissingAttribute(lib_name));
            }
        }

        let name = normalize_name(&declaration.name);
        let arn = self
            .context
            .arn_for(config.service_namespace, config.resource_segment, &name)?;

        // Map library attributes to CloudFormation property names
        let mut properties = serde_json::Map::new();
        for &(lib_name, cfn_name, _) in config.attributes {
            if let Some(value) = declaration.attributes.get(lib_name) {
                properties.insert(cfn_name.to_string(), value.clone());
            }
        }

        tracing::debug!(
            logical_id = %declaration.logical_id,
            name = %name,
            arn = %arn,
            "registered resource declaration"
        );

        self.resources.insert(
            declaration.logical_id,
            TemplateResource {
                resource_type: config.aws_type_name.to_string(),
                properties,
            },
        );

        Ok(Registration {
            arn: Pending::resolved(arn.to_string()),
            name: Pending::resolved(name),
        })
    }
}

static NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("valid pattern"));

/// Restrict a requested name to the Timestream database character set
pub fn normalize_name(requested: &str) -> String {
    NAME_CHARS.replace_all(requested, "_").into_owned()
}
