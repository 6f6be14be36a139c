//! Runs the end-to-end vectors of spec.md §8 against the stock
//! configuration, independent of any file on disk or network I/O
//! (spec.md §4.I). Used both as ordinary `#[test]`s and as the `--test`
//! CLI mode.

use std::collections::HashMap;

use crate::core::domain::check_digit;
use crate::core::domain::formatter;
use crate::core::domain::grammar::ArkGrammar;
use crate::core::domain::settings::{ArkConfig, ProjectConfig, Settings, SettingsRegistry};
use crate::core::domain::url_info::UrlInfo;
use crate::core::errors::grammar::{ArkGrammarError, ArkGrammarResult};
use crate::core::use_cases::redirector;

fn stock_settings() -> Settings {
    let ark_config = ArkConfig::new(
        "ark.dasch.swiss".to_string(),
        "72163".to_string(),
        "http://dasch.swiss".to_string(),
        "0.0.0.0".to_string(),
        3336,
    );

    let mut project_0001 = HashMap::new();
    project_0001.insert("Host".to_string(), "0.0.0.0:3333".to_string());
    project_0001.insert("UsePhp".to_string(), "false".to_string());
    project_0001.insert(
        "KnoraProjectIri".to_string(),
        "http://rdfh.ch/projects/$project_id".to_string(),
    );
    project_0001.insert(
        "KnoraResourceIri".to_string(),
        "http://rdfh.ch/$project_id/$resource_id".to_string(),
    );
    project_0001.insert(
        "KnoraProjectRedirectUrl".to_string(),
        "http://$host/admin/projects/$project_iri".to_string(),
    );
    project_0001.insert(
        "KnoraResourceRedirectUrl".to_string(),
        "http://$host/v2/resources/$resource_iri".to_string(),
    );
    project_0001.insert(
        "KnoraResourceVersionRedirectUrl".to_string(),
        "http://$host/v2/resources/$resource_iri?version=$timestamp".to_string(),
    );

    let mut project_0803 = HashMap::new();
    project_0803.insert("Host".to_string(), "data.dasch.swiss".to_string());
    project_0803.insert("UsePhp".to_string(), "true".to_string());
    project_0803.insert(
        "PhpResourceRedirectUrl".to_string(),
        "http://$host/resources/$resource_int_id".to_string(),
    );
    project_0803.insert(
        "PhpResourceVersionRedirectUrl".to_string(),
        "http://$host/resources/$resource_int_id?citdate=$timestamp".to_string(),
    );

    let mut projects = HashMap::new();
    projects.insert("0001".to_string(), ProjectConfig::new(project_0001));
    projects.insert("0803".to_string(), ProjectConfig::new(project_0803));

    let registry = SettingsRegistry::new(projects, HashMap::new());
    Settings::new(ark_config, registry, 1)
}

fn check(condition: bool, message: impl Into<String>) -> ArkGrammarResult<()> {
    if condition {
        Ok(())
    } else {
        Err(ArkGrammarError::MalformedUrl(message.into()))
    }
}

/// Runs every vector in spec.md §8, returning the first mismatch as an
/// error. The CLI `--test` mode reports this as a one-line failure and a
/// non-zero exit code (spec.md §4.H, §4.I).
pub fn run() -> ArkGrammarResult<()> {
    let settings = stock_settings();
    let grammar = ArkGrammar::new(
        &settings.ark_config.resolver_host,
        &settings.ark_config.naan,
    )?;

    // T1
    let digit = check_digit::calculate_check_digit("cmfk1DMHRBiR4-_6HXpEFA")?;
    check(digit == 'n', "T1: check digit mismatch")?;

    // T2
    let t2 = formatter::from_resource_iri(
        &grammar,
        1,
        "http://rdfh.ch/0001/cmfk1DMHRBiR4-_6HXpEFA",
        None,
    )?;
    check(
        t2 == "http://ark.dasch.swiss/ark:/72163/1/0001/cmfk1DMHRBiR4=_6HXpEFAn",
        "T2: fromResourceIri mismatch",
    )?;

    // T3
    let t3 = formatter::from_resource_iri(
        &grammar,
        1,
        "http://rdfh.ch/0001/cmfk1DMHRBiR4-_6HXpEFA",
        Some("20190118T102919000031660Z"),
    )?;
    check(
        t3 == format!("{t2}.20190118T102919000031660Z"),
        "T3: fromResourceIri with timestamp mismatch",
    )?;

    // T4
    let t4 = formatter::from_legacy_numeric_id(&grammar, 1, 1, "0803", None)?;
    check(
        t4 == "http://ark.dasch.swiss/ark:/72163/1/0803/751e0b8am",
        "T4: fromLegacyNumericId mismatch",
    )?;

    // T5
    let info_t5 = grammar.parse("http://ark.dasch.swiss/ark:/72163/1", 1)?;
    check(
        redirector::redirect(&settings, &info_t5)? == "http://dasch.swiss",
        "T5: top-level redirect mismatch",
    )?;

    // T6
    let info_t6 = grammar.parse("http://ark.dasch.swiss/ark:/72163/1/0001", 1)?;
    check(
        redirector::redirect(&settings, &info_t6)?
            == "http://0.0.0.0:3333/admin/projects/http%3A%2F%2Frdfh.ch%2Fprojects%2F0001",
        "T6: project-level redirect mismatch",
    )?;

    // T7
    let info_t7 = grammar.parse(
        "http://ark.dasch.swiss/ark:/72163/1/0001/cmfk1DMHRBiR4=_6HXpEFAn",
        1,
    )?;
    let redirect_t7 = redirector::redirect(&settings, &info_t7)?;
    check(
        redirect_t7
            == "http://0.0.0.0:3333/v2/resources/http%3A%2F%2Frdfh.ch%2F0001%2Fcmfk1DMHRBiR4-_6HXpEFA",
        "T7: resource-level redirect mismatch",
    )?;

    // T8
    let info_t8 = grammar.parse(
        "http://ark.dasch.swiss/ark:/72163/1/0001/cmfk1DMHRBiR4=_6HXpEFAn.20190118T102919000031660Z",
        1,
    )?;
    check(
        redirector::redirect(&settings, &info_t8)?
            == format!("{redirect_t7}?version=20190118T102919000031660Z"),
        "T8: resource-level redirect with timestamp mismatch",
    )?;

    // T9
    let info_t9 = grammar.parse(
        "http://ark.dasch.swiss/ark:/72163/1/0803/751e0b8am.20190118T102919000031660Z",
        1,
    )?;
    check(
        redirector::redirect(&settings, &info_t9)?
            == "http://data.dasch.swiss/resources/1?citdate=20190118",
        "T9: legacy redirect mismatch",
    )?;

    // T10
    let t10 = grammar.parse(
        "http://ark.dasch.swiss/ark:/72163/1/0001/cmfk1DMHRBir4=_6HXpEFAn",
        1,
    );
    check(
        matches!(t10, Err(ArkGrammarError::BadCheckDigit(_))),
        "T10: bad check digit should be rejected",
    )?;

    let info_project_only: UrlInfo = UrlInfo::new(1, None, None, None);
    check(
        !info_project_only.is_resource_level(),
        "sanity: bare UrlInfo is not resource level",
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_selftest_vectors_pass() {
        super::run().unwrap();
    }
}
