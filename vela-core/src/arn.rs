//! ARN - Structured resource identifiers
//!
//! An ARN has four `:`-delimited segments:
//!
//! ```text
//! service:partition:account:resource-type/resource-name
//! ```
//!
//! The resource-name part may itself contain `/`; everything after the
//! first `/` of the resource segment belongs to the name.

use std::fmt;

use thiserror::Error;

/// Errors raised while parsing an ARN
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArnError {
    /// Fewer `:`-delimited segments than the grammar requires
    #[error("Malformed ARN '{arn}': expected {expected} ':'-delimited segments, got {got}")]
    SegmentCount {
        arn: String,
        expected: usize,
        got: usize,
    },

    /// A segment is present but empty
    #[error("Malformed ARN '{arn}': empty {segment} segment")]
    EmptySegment { arn: String, segment: &'static str },

    /// The resource segment is not of the form `type/name`
    #[error("Malformed ARN '{arn}': resource segment must have the form 'type/name'")]
    MissingResource { arn: String },
}

/// A parsed resource identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arn {
    /// Service namespace (e.g., "timestream")
    pub service: String,
    /// Partition (e.g., "aws")
    pub partition: String,
    /// Account id
    pub account: String,
    /// Resource type segment (e.g., "database")
    pub resource_type: String,
    /// Resource name segment
    pub resource_name: String,
}

impl Arn {
    /// Number of `:`-delimited segments in a well-formed ARN
    pub const SEGMENT_COUNT: usize = 4;

    pub fn new(
        service: impl Into<String>,
        partition: impl Into<String>,
        account: impl Into<String>,
        resource_type: impl Into<String>,
        resource_name: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            partition: partition.into(),
            account: account.into(),
            resource_type: resource_type.into(),
            resource_name: resource_name.into(),
        }
    }

    /// Parse an ARN string into its segments
    pub fn parse(input: &str) -> Result<Self, ArnError> {
        let segments: Vec<&str> = input.splitn(Self::SEGMENT_COUNT, ':').collect();
        if segments.len() < Self::SEGMENT_COUNT {
            return Err(ArnError::SegmentCount {
                arn: input.to_string(),
                expected: Self::SEGMENT_COUNT,
                got: segments.len(),
            });
        }

        for (segment, name) in segments
            .iter()
            .zip(["service", "partition", "account", "resource"])
        {
            if segment.is_empty() {
                return Err(ArnError::EmptySegment {
                    arn: input.to_string(),
                    segment: name,
                });
            }
        }

        let (resource_type, resource_name) =
            segments[3].split_once('/').ok_or_else(|| ArnError::MissingResource {
                arn: input.to_string(),
            })?;
        if resource_type.is_empty() || resource_name.is_empty() {
            return Err(ArnError::MissingResource {
                arn: input.to_string(),
            });
        }

        Ok(Self::new(
            segments[0],
            segments[1],
            segments[2],
            resource_type,
            resource_name,
        ))
    }
}

impl fmt::Display for Arn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}/{}",
            self.service, self.partition, self.account, self.resource_type, self.resource_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_arn() {
        let arn = Arn::parse("timestream:aws:123456789012:database/custom").unwrap();
        assert_eq!(arn.service, "timestream");
        assert_eq!(arn.partition, "aws");
        assert_eq!(arn.account, "123456789012");
        assert_eq!(arn.resource_type, "database");
        assert_eq!(arn.resource_name, "custom");
    }

    #[test]
    fn display_round_trips() {
        let input = "timestream:aws:123456789012:database/custom";
        let arn = Arn::parse(input).unwrap();
        assert_eq!(arn.to_string(), input);
    }

    #[test]
    fn too_few_segments() {
        assert!(matches!(
            Arn::parse("not-an-arn"),
            Err(ArnError::SegmentCount { got: 1, .. })
        ));
        assert!(matches!(
            Arn::parse("timestream:aws:database/custom"),
            Err(ArnError::SegmentCount { got: 3, .. })
        ));
    }

    #[test]
    fn empty_segment_rejected() {
        assert!(matches!(
            Arn::parse("timestream::123456789012:database/custom"),
            Err(ArnError::EmptySegment {
                segment: "partition",
                ..
            })
        ));
        assert!(matches!(
            Arn::parse(":aws:123456789012:database/custom"),
            Err(ArnError::EmptySegment {
                segment: "service",
                ..
            })
        ));
    }

    #[test]
    fn missing_resource_name_rejected() {
        assert!(matches!(
            Arn::parse("timestream:aws:123456789012:database"),
            Err(ArnError::MissingResource { .. })
        ));
        assert!(matches!(
            Arn::parse("timestream:aws:123456789012:database/"),
            Err(ArnError::MissingResource { .. })
        ));
        assert!(matches!(
            Arn::parse("timestream:aws:123456789012:/custom"),
            Err(ArnError::MissingResource { .. })
        ));
    }

    #[test]
    fn resource_name_may_contain_slashes() {
        let arn = Arn::parse("timestream:aws:123456789012:database/team/prod").unwrap();
        assert_eq!(arn.resource_type, "database");
        assert_eq!(arn.resource_name, "team/prod");
    }
}
