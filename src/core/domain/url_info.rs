use std::collections::HashMap;

/// Semantic object produced by parsing an ARK URL (spec.md §4.D).
///
/// Unlike the upstream DSP resolver this one serves, this grammar has no
/// value-level segment: an ARK URL names at most a project and a single
/// resource, never a third "value" component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlInfo {
    pub url_version: u8,
    pub project_id: Option<String>,
    pub resource_id: Option<String>,
    pub timestamp: Option<String>,
}

impl UrlInfo {
    pub fn new(
        url_version: u8,
        project_id: Option<String>,
        resource_id: Option<String>,
        timestamp: Option<String>,
    ) -> Self {
        Self {
            url_version,
            project_id,
            resource_id,
            timestamp,
        }
    }

    pub fn is_project_level(&self) -> bool {
        self.project_id.is_some() && self.resource_id.is_none()
    }

    pub fn is_resource_level(&self) -> bool {
        self.resource_id.is_some()
    }

    pub fn has_timestamp(&self) -> bool {
        self.timestamp.is_some()
    }

    /// The substitution environment exposed to Redirector (spec.md §4.D, §4.F).
    pub fn to_template_dict(&self) -> HashMap<String, String> {
        let mut dict = HashMap::new();
        dict.insert("url_version".to_string(), self.url_version.to_string());
        if let Some(project_id) = &self.project_id {
            dict.insert("project_id".to_string(), project_id.clone());
        }
        if let Some(resource_id) = &self.resource_id {
            dict.insert("resource_id".to_string(), resource_id.clone());
        }
        if let Some(timestamp) = &self.timestamp {
            dict.insert("timestamp".to_string(), timestamp.clone());
        }
        dict
    }
}
