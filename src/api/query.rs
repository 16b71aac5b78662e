//! Read-target classification.
//!
//! A read request is classified into an explicit target before any store
//! dispatch, instead of inferring the lookup kind by inspecting parameter
//! keys mid-flight.

/// Which lookup a read request asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadTarget {
    /// No query parameters: the full table
    All,
    /// Parameters include the primary key name: point lookup
    ByPrimaryKey(String),
    /// Any other parameters: equality lookup on a secondary attribute
    BySecondaryKey { attribute: String, value: String },
}

impl ReadTarget {
    /// Classify ordered query parameters for a table keyed by `primary_key`.
    ///
    /// The primary key takes precedence wherever it appears; otherwise the
    /// first parameter in request order names the index attribute.
    pub fn classify(primary_key: &str, params: &[(String, String)]) -> Self {
        if params.is_empty() {
            return ReadTarget::All;
        }

        if let Some((_, value)) = params.iter().find(|(key, _)| key == primary_key) {
            return ReadTarget::ByPrimaryKey(value.clone());
        }

        let (attribute, value) = params[0].clone();
        ReadTarget::BySecondaryKey { attribute, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_no_params_is_all() {
        assert_eq!(ReadTarget::classify("spaceId", &[]), ReadTarget::All);
    }

    #[test]
    fn test_primary_key_param() {
        let target = ReadTarget::classify("spaceId", &params(&[("spaceId", "s1")]));
        assert_eq!(target, ReadTarget::ByPrimaryKey("s1".to_string()));
    }

    #[test]
    fn test_primary_key_wins_regardless_of_position() {
        let target = ReadTarget::classify(
            "spaceId",
            &params(&[("location", "London"), ("spaceId", "s1")]),
        );
        assert_eq!(target, ReadTarget::ByPrimaryKey("s1".to_string()));
    }

    #[test]
    fn test_first_other_param_names_the_index() {
        let target = ReadTarget::classify(
            "spaceId",
            &params(&[("location", "London"), ("name", "Office A")]),
        );
        assert_eq!(
            target,
            ReadTarget::BySecondaryKey {
                attribute: "location".to_string(),
                value: "London".to_string(),
            }
        );
    }
}
