//! Resource type configuration for AWS Timestream
//!
//! This module defines:
//! - The mapping between library attribute names and CloudFormation
//!   property names
//! - The ARN namespace used when deriving identifiers

/// Attribute mapping: (library_name, cloudformation_name, is_required_for_create)
pub type AttrMapping = (&'static str, &'static str, bool);

/// Resource type configuration
pub struct ResourceConfig {
    /// CloudFormation type name (e.g., "AWS::Timestream::Database")
    pub aws_type_name: &'static str,
    /// ARN service namespace (first ARN segment)
    pub service_namespace: &'static str,
    /// ARN resource-type segment (e.g., "database")
    pub resource_segment: &'static str,
    /// Standard attribute mappings (library name -> CloudFormation name)
    pub attributes: &'static [AttrMapping],
}

pub const DATABASE_CONFIG: ResourceConfig = ResourceConfig {
    aws_type_name: "AWS::Timestream::Database",
    service_namespace: "timestream",
    resource_segment: "database",
    attributes: &[
        ("database_name", "DatabaseName", false),
        ("kms_key_id", "KmsKeyId", false),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_aws_type() {
        assert_eq!(DATABASE_CONFIG.aws_type_name, "AWS::Timestream::Database");
        assert_eq!(DATABASE_CONFIG.service_namespace, "timestream");
        assert_eq!(DATABASE_CONFIG.resource_segment, "database");
    }

    #[test]
    fn test_database_config_attribute_mapping() {
        let cfn_name = |lib: &str| {
            DATABASE_CONFIG
                .attributes
                .iter()
                .find(|(name, _, _)| *name == lib)
                .map(|(_, cfn, _)| *cfn)
        };
        assert_eq!(cfn_name("database_name"), Some("DatabaseName"));
        assert_eq!(cfn_name("kms_key_id"), Some("KmsKeyId"));
        assert_eq!(cfn_name("unknown"), None);
    }
}
