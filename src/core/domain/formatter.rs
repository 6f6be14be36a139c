//! Builds ARK URLs from repository resource identifiers (spec.md §4.E).
//!
//! Two flavors: `from_resource_iri` for the native (Knora/DSP) identifier
//! shape, and `from_legacy_numeric_id` for the legacy PHP backend's small
//! integer identifiers, padded through the fixed constant `K`.

use regex::Regex;

use crate::core::domain::check_digit;
use crate::core::domain::grammar::{escape_hyphens, ArkGrammar};
use crate::core::errors::grammar::{ArkGrammarError, ArkGrammarResult};

/// `K`, the fixed large prime used to pad a legacy numeric id into the
/// base64url alphabet. Part of the external wire contract; must not change
/// (spec.md §4.E, §9).
pub const LEGACY_ID_FACTOR: u64 = 982_451_653;

/// Parses `http://rdfh.ch/<ProjectId>/<ResourceId>` into `(ProjectId, ResourceId)`.
fn parse_resource_iri(iri: &str) -> Option<(String, String)> {
    let re = Regex::new(r"^http://rdfh\.ch/([0-9A-Fa-f]+)/([A-Za-z0-9_-]+)$").unwrap();
    re.captures(iri).map(|captures| {
        (
            captures.get(1).unwrap().as_str().to_string(),
            captures.get(2).unwrap().as_str().to_string(),
        )
    })
}

fn tail_with_check_digit(resource_id: &str) -> ArkGrammarResult<String> {
    let digit = check_digit::calculate_check_digit(resource_id)?;
    Ok(escape_hyphens(&format!("{resource_id}{digit}")))
}

/// `fromResourceIri(iri, timestamp?) -> ArkUrl` (spec.md §4.E).
pub fn from_resource_iri(
    grammar: &ArkGrammar,
    version: u8,
    iri: &str,
    timestamp: Option<&str>,
) -> ArkGrammarResult<String> {
    let (project_id, resource_id) =
        parse_resource_iri(iri).ok_or_else(|| ArkGrammarError::MalformedUrl(iri.to_string()))?;
    let escaped_tail = tail_with_check_digit(&resource_id)?;
    Ok(grammar.format(version, Some(&project_id), Some(&escaped_tail), timestamp))
}

/// `fromLegacyNumericId(n, projectId, timestamp?) -> ArkUrl` (spec.md §4.E).
pub fn from_legacy_numeric_id(
    grammar: &ArkGrammar,
    version: u8,
    n: u64,
    project_id: &str,
    timestamp: Option<&str>,
) -> ArkGrammarResult<String> {
    let pseudo_resource_id = format!("{:x}", (n + 1) * LEGACY_ID_FACTOR);
    let escaped_tail = tail_with_check_digit(&pseudo_resource_id)?;
    Ok(grammar.format(
        version,
        Some(project_id),
        Some(&escaped_tail),
        timestamp,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar() -> ArkGrammar {
        ArkGrammar::new("ark.dasch.swiss", "72163").unwrap()
    }

    #[test]
    fn test_from_resource_iri() {
        let url = from_resource_iri(
            &grammar(),
            1,
            "http://rdfh.ch/0001/cmfk1DMHRBiR4-_6HXpEFA",
            None,
        )
        .unwrap();
        assert_eq!(
            url,
            "http://ark.dasch.swiss/ark:/72163/1/0001/cmfk1DMHRBiR4=_6HXpEFAn"
        );
    }

    #[test]
    fn test_from_resource_iri_with_timestamp() {
        let url = from_resource_iri(
            &grammar(),
            1,
            "http://rdfh.ch/0001/cmfk1DMHRBiR4-_6HXpEFA",
            Some("20190118T102919000031660Z"),
        )
        .unwrap();
        assert_eq!(
            url,
            "http://ark.dasch.swiss/ark:/72163/1/0001/cmfk1DMHRBiR4=_6HXpEFAn.20190118T102919000031660Z"
        );
    }

    #[test]
    fn test_from_resource_iri_rejects_malformed_iri() {
        let result = from_resource_iri(&grammar(), 1, "not-an-iri", None);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_legacy_numeric_id() {
        let url = from_legacy_numeric_id(&grammar(), 1, 1, "0803", None).unwrap();
        assert_eq!(url, "http://ark.dasch.swiss/ark:/72163/1/0803/751e0b8am");
    }
}
