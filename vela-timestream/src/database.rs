//! Timestream database resource
//!
//! Declares `AWS::Timestream::Database` resources and imports references to
//! databases that already exist. Declaring registers exactly one resource
//! with the synthesizer; importing builds a descriptor from identifying
//! attributes without declaring anything.

use serde_json::json;
use vela_core::arn::{Arn, ArnError};
use vela_core::naming::{self, Scope};

use crate::key::KeyRef;
use crate::resources::DATABASE_CONFIG;
use crate::synth::{Declaration, SynthError, Synthesizer};

/// Properties for declaring a database
#[derive(Debug, Clone, Default)]
pub struct DatabaseProps {
    /// A name for the database. Defaults to a scope-qualified generated name.
    pub database_name: Option<String>,
    /// KMS key to encrypt the database with. Defaults to unencrypted.
    pub kms_key: Option<KeyRef>,
}

/// Reference to an existing database
#[derive(Debug, Clone)]
pub struct DatabaseAttributes {
    /// The ARN of the database
    pub database_arn: String,
    /// The name of the database; derived from the ARN when absent
    pub database_name: Option<String>,
}

/// Immutable public-facing attributes of one database
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseDescriptor {
    database_arn: String,
    database_name: Option<String>,
    kms_key: Option<KeyRef>,
}

impl DatabaseDescriptor {
    /// The database ARN
    pub fn database_arn(&self) -> &str {
        &self.database_arn
    }

    /// The database name, if resolved
    pub fn database_name(&self) -> Option<&str> {
        self.database_name.as_deref()
    }

    /// The encryption key reference, if any
    pub fn kms_key(&self) -> Option<&KeyRef> {
        self.kms_key.as_ref()
    }
}

/// Factory surface for database resources
pub struct Database;

impl Database {
    /// Declare a new database in `scope` and produce its descriptor.
    ///
    /// The effective name is the explicit one when supplied, otherwise a
    /// scope-qualified default. The synthesizer may normalize the name; the
    /// descriptor carries whatever it resolved. Explicitly supplied
    /// properties only are emitted into the declaration.
    pub fn create(
        scope: &Scope,
        id: &str,
        synthesizer: &mut dyn Synthesizer,
        props: DatabaseProps,
    ) -> Result<DatabaseDescriptor, SynthError> {
        let effective_name =
            naming::resolve_name(props.database_name.as_deref(), || scope.qualified_name(id));

        let mut declaration = Declaration::new(id, effective_name);
        if let Some(name) = &props.database_name {
            declaration = declaration.with_attribute("database_name", json!(name));
        }
        if let Some(key) = &props.kms_key {
            declaration = declaration.with_attribute("kms_key_id", json!(key.key_id()));
        }

        let registration = synthesizer.register(&DATABASE_CONFIG, declaration)?;

        // Descriptors guarantee a concrete ARN; a name the backend has not
        // resolved yet stays absent.
        let database_arn = registration
            .arn
            .into_value()
            .ok_or(SynthError::Unresolved("arn"))?;
        let database_name = registration.name.into_value();

        tracing::debug!(id, arn = %database_arn, "declared timestream database");

        Ok(DatabaseDescriptor {
            database_arn,
            database_name,
            kms_key: props.kms_key,
        })
    }

    /// Import an existing database by ARN.
    pub fn from_arn(database_arn: impl Into<String>) -> Result<DatabaseDescriptor, ArnError> {
        Self::from_attributes(DatabaseAttributes {
            database_arn: database_arn.into(),
            database_name: None,
        })
    }

    /// Import an existing database from identifying attributes.
    ///
    /// An explicit name wins and leaves the ARN un-parsed; with no name the
    /// ARN's resource-name segment is used. Imported references never carry
    /// key material.
    pub fn from_attributes(attrs: DatabaseAttributes) -> Result<DatabaseDescriptor, ArnError> {
        let database_name = match attrs.database_name {
            Some(name) => name,
            None => Arn::parse(&attrs.database_arn)?.resource_name,
        };

        Ok(DatabaseDescriptor {
            database_arn: attrs.database_arn,
            database_name: Some(database_name),
            kms_key: None,
        })
    }
}
