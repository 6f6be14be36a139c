//! ARK URL grammar: parsing and rendering (spec.md §4.B).
//!
//! The grammar is anchored to a specific `ResolverHost` and `NAAN`, so a
//! compiled [`ArkGrammar`] is built once from `Settings` at startup and
//! reused for every request, mirroring the "compile regex once" pattern the
//! teacher uses for its `CompiledRegexes`.

use regex::Regex;

use crate::core::domain::check_digit;
use crate::core::domain::url_info::UrlInfo;
use crate::core::errors::grammar::{ArkGrammarError, ArkGrammarResult};

/// Escapes every `-` in a resource tail to `=`, the wire transliteration
/// required because `-` carries information in base64url (spec.md §9).
pub fn escape_hyphens(s: &str) -> String {
    s.replace('-', "=")
}

/// Inverse of [`escape_hyphens`]; total over any escaped tail.
pub fn unescape_hyphens(s: &str) -> String {
    s.replace('=', "-")
}

#[derive(Debug, Clone)]
pub struct ArkGrammar {
    resolver_host: String,
    naan: String,
    path_regex: Regex,
}

impl ArkGrammar {
    /// Builds the grammar for one `(ResolverHost, NAAN)` pair.
    pub fn new(resolver_host: &str, naan: &str) -> ArkGrammarResult<Self> {
        let pattern = format!(
            r"^http://{}/ark:/{}/([0-9]+)(?:/([0-9A-F]+)(?:/([A-Za-z0-9_=]+)(?:\.([0-9]{{8}}T[0-9]{{6}}[0-9]*Z))?)?)?$",
            regex::escape(resolver_host),
            regex::escape(naan),
        );
        let path_regex = Regex::new(&pattern)
            .map_err(|e| ArkGrammarError::TemplateError(format!("invalid grammar regex: {e}")))?;
        Ok(Self {
            resolver_host: resolver_host.to_string(),
            naan: naan.to_string(),
            path_regex,
        })
    }

    pub fn resolver_host(&self) -> &str {
        &self.resolver_host
    }

    pub fn naan(&self) -> &str {
        &self.naan
    }

    /// Parses a full ARK URL into a [`UrlInfo`], per spec.md §4.B.
    ///
    /// `expected_version` is the single `UrlVersion` this deployment accepts
    /// (`Settings.dsp_ark_version`); any other version is rejected as
    /// malformed, matching the client-facing error surface in spec.md §7
    /// (version mismatches are reported as `MalformedUrl`, not a distinct
    /// error kind).
    pub fn parse(&self, url_text: &str, expected_version: u8) -> ArkGrammarResult<UrlInfo> {
        let captures = self
            .path_regex
            .captures(url_text)
            .ok_or_else(|| ArkGrammarError::MalformedUrl(url_text.to_string()))?;

        let version: u8 = captures
            .get(1)
            .unwrap()
            .as_str()
            .parse()
            .map_err(|_| ArkGrammarError::MalformedUrl(url_text.to_string()))?;

        if version != expected_version {
            return Err(ArkGrammarError::MalformedUrl(url_text.to_string()));
        }

        let project_id = captures.get(2).map(|m| m.as_str().to_string());

        let resource_id = match captures.get(3) {
            Some(tail) => {
                let unescaped = unescape_hyphens(tail.as_str());
                let valid = check_digit::is_valid(&unescaped).unwrap_or(false);
                if !valid || unescaped.is_empty() {
                    return Err(ArkGrammarError::BadCheckDigit(url_text.to_string()));
                }
                Some(unescaped[..unescaped.len() - 1].to_string())
            }
            None => None,
        };

        let timestamp = captures.get(4).map(|m| m.as_str().to_string());

        Ok(UrlInfo::new(version, project_id, resource_id, timestamp))
    }

    /// Renders an ARK URL from its components. `escaped_tail` must already
    /// have its hyphens escaped to `=` (spec.md §4.B `format`).
    pub fn format(
        &self,
        version: u8,
        project_id: Option<&str>,
        escaped_tail: Option<&str>,
        timestamp: Option<&str>,
    ) -> String {
        let mut url = format!("http://{}/ark:/{}/{}", self.resolver_host, self.naan, version);
        if let Some(project_id) = project_id {
            url.push('/');
            url.push_str(project_id);
            if let Some(tail) = escaped_tail {
                url.push('/');
                url.push_str(tail);
                if let Some(ts) = timestamp {
                    url.push('.');
                    url.push_str(ts);
                }
            }
        }
        url
    }
}
