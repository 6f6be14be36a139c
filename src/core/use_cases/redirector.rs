//! Redirector: given a parsed ARK URL and Settings, produces the redirect
//! target URL (spec.md §4.F). This is the largest component of the
//! resolver and the one most directly grounded in the original Python
//! `ArkUrlInfo.to_redirect_url` / `to_knora_redirect_url` / `to_php_redirect_url`.

use std::collections::HashMap;

use urlencoding::encode;

use crate::core::domain::formatter::LEGACY_ID_FACTOR;
use crate::core::domain::settings::{ProjectConfig, Settings};
use crate::core::domain::url_info::UrlInfo;
use crate::core::errors::grammar::{ArkGrammarError, ArkGrammarResult};

/// Single-pass `$name` substitution over a fixed template vocabulary
/// (spec.md §4.F, §9 "Template engine"). An undefined variable is a
/// configuration error, never a 400.
fn substitute(template: &str, values: &HashMap<String, String>) -> ArkGrammarResult<String> {
    let mut result = String::with_capacity(template.len());
    let bytes = template.as_bytes();

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'$' {
            let rest = &template[i + 1..];
            let name_len = rest
                .char_indices()
                .take_while(|(_, c)| c.is_ascii_alphanumeric() || *c == '_')
                .count();
            if name_len == 0 {
                return Err(ArkGrammarError::TemplateError(format!(
                    "stray '$' in template: {template}"
                )));
            }
            let name = &rest[..name_len];
            let value = values.get(name).ok_or_else(|| {
                ArkGrammarError::TemplateError(format!("undefined template variable: ${name}"))
            })?;
            result.push_str(value);
            i += 1 + name_len;
        } else {
            let ch = template[i..].chars().next().unwrap();
            result.push(ch);
            i += ch.len_utf8();
        }
    }
    Ok(result)
}

fn project_template(config: &ProjectConfig, name: &str) -> ArkGrammarResult<String> {
    config
        .get(name)
        .cloned()
        .ok_or_else(|| ArkGrammarError::TemplateError(format!("missing template: {name}")))
}

/// Redirects a parsed ARK URL through the project's configured templates.
pub fn redirect(settings: &Settings, url_info: &UrlInfo) -> ArkGrammarResult<String> {
    let Some(project_id) = &url_info.project_id else {
        return Ok(settings.ark_config.top_level_object_url.clone());
    };

    let project_config = settings.registry.get_project_config(project_id)?;
    let use_php = project_config.get_boolean("UsePhp")?;

    if use_php {
        redirect_php(&project_config, url_info)
    } else {
        redirect_native(&project_config, url_info)
    }
}

fn base_template_dict(config: &ProjectConfig, url_info: &UrlInfo) -> ArkGrammarResult<HashMap<String, String>> {
    let mut dict = url_info.to_template_dict();
    dict.insert("host".to_string(), project_template(config, "Host")?);
    Ok(dict)
}

fn redirect_native(config: &ProjectConfig, url_info: &UrlInfo) -> ArkGrammarResult<String> {
    let mut dict = base_template_dict(config, url_info)?;

    let resource_iri_template = project_template(config, "KnoraResourceIri")?;
    let project_iri_template = project_template(config, "KnoraProjectIri")?;
    let resource_iri = substitute(&resource_iri_template, &dict)?;
    let project_iri = substitute(&project_iri_template, &dict)?;
    dict.insert("resource_iri".to_string(), encode(&resource_iri).into_owned());
    dict.insert("project_iri".to_string(), encode(&project_iri).into_owned());

    let template_name = match (url_info.resource_id.is_some(), url_info.has_timestamp()) {
        (false, _) => "KnoraProjectRedirectUrl",
        (true, false) => "KnoraResourceRedirectUrl",
        (true, true) => "KnoraResourceVersionRedirectUrl",
    };
    let template = project_template(config, template_name)?;
    substitute(&template, &dict)
}

fn redirect_php(config: &ProjectConfig, url_info: &UrlInfo) -> ArkGrammarResult<String> {
    let mut dict = base_template_dict(config, url_info)?;

    let resource_id = url_info
        .resource_id
        .as_ref()
        .ok_or_else(|| ArkGrammarError::MalformedUrl("legacy redirect without resource id".to_string()))?;
    let resource_int_id_raw = i64::from_str_radix(resource_id, 16).map_err(|_| {
        ArkGrammarError::MalformedUrl(format!("resource id is not valid hex: {resource_id}"))
    })?;
    let resource_int_id = (resource_int_id_raw / LEGACY_ID_FACTOR as i64) - 1;
    dict.insert("resource_int_id".to_string(), resource_int_id.to_string());

    if url_info.has_timestamp() {
        let full_timestamp = url_info.timestamp.as_ref().unwrap();
        let date_only = &full_timestamp[..full_timestamp.len().min(8)];
        dict.insert("timestamp".to_string(), date_only.to_string());
        let template = project_template(config, "PhpResourceVersionRedirectUrl")?;
        substitute(&template, &dict)
    } else {
        let template = project_template(config, "PhpResourceRedirectUrl")?;
        substitute(&template, &dict)
    }
}
