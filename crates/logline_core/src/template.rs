// template.rs: template identity and the hash-keyed index
use std::collections::HashMap;
use tracing::debug;

use crate::config::LogTypeConfig;
use crate::error::ExtractError;
use crate::hash::template_hash;
use crate::normalize::{clean_content, clean_uri_content};
use crate::record::{Header, Record};

/// Canonical, parameter-free skeleton of a log message, identified by the
/// content hash of its cleaned text.
#[derive(Debug, Clone)]
pub struct Template {
    pub hash: String,
    pub event_id: String,
    pub text: String,
}

impl Template {
    /// Build a template from an existing record: the template-text column is
    /// cleaned, hashed, and carried alongside the upstream event id.
    pub fn parse_existing(
        record: &Record,
        header: &Header,
        config: &LogTypeConfig,
    ) -> Result<Self, ExtractError> {
        let raw = record
            .get(header, &config.template_column)
            .ok_or_else(|| ExtractError::MissingColumn(config.template_column.clone()))?;
        let text = clean_content(raw);
        let event_id = record
            .get(header, &config.event_id_column)
            .ok_or_else(|| ExtractError::MissingColumn(config.event_id_column.clone()))?
            .to_string();
        let hash = template_hash(&text);
        Ok(Self { hash, event_id, text })
    }

    /// URI-safe fragment derived from the cleaned text, for callers that name
    /// artifacts after the template rather than its hash.
    pub fn id_fragment(&self) -> String {
        clean_uri_content(&self.text)
    }
}

/// Build the hash -> template lookup from existing records. A later record
/// with the same hash overwrites the earlier one: one canonical template per
/// distinct hash, deterministic in input order.
pub fn load_templates<'a, I>(
    records: I,
    header: &Header,
    config: &LogTypeConfig,
) -> Result<HashMap<String, Template>, ExtractError>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut templates = HashMap::new();
    for record in records {
        let template = Template::parse_existing(record, header, config)?;
        if let Some(previous) = templates.insert(template.hash.clone(), template) {
            debug!(hash = %previous.hash, "duplicate template hash, later record wins");
        }
    }
    Ok(templates)
}
