// logline.rs: the parsed log line record shape and its builders
use indexmap::IndexMap;
use tracing::trace;

use crate::config::LogTypeConfig;
use crate::error::ExtractError;
use crate::hash::template_hash;
use crate::normalize::clean_content;
use crate::params::parse_parameter_list;
use crate::record::{Header, Record};

/// One structured log event: the cleaned message text, the template identity
/// it instantiates, the variable tokens substituted into that template, and
/// the configured special columns.
#[derive(Debug, Clone, Default)]
pub struct LogLine {
    counter: u64,
    device: String,
    date_time: String,
    content: String,
    parameters: Vec<String>,
    special_parameters: IndexMap<String, String>,
    logpai_event_id: String,
    template_hash: Option<String>,
}

impl LogLine {
    /// Shared construction step for every source variant: read each
    /// configured component column, in config order, through
    /// [`clean_content`]. A configured column absent from the record means
    /// config and data disagree, which fails construction.
    pub fn from_record(
        record: &Record,
        header: &Header,
        config: &LogTypeConfig,
    ) -> Result<Self, ExtractError> {
        let mut special_parameters = IndexMap::with_capacity(config.components.len());
        for component in &config.components {
            let value = record
                .get(header, &component.column)
                .ok_or_else(|| ExtractError::MissingColumn(component.column.clone()))?;
            special_parameters.insert(component.column.clone(), clean_content(value));
        }
        Ok(Self {
            special_parameters,
            ..Self::default()
        })
    }

    /// Replace the parameter list from its serialized encoding. Prior
    /// contents are cleared first, so repeated calls keep only the last
    /// input. Construction does not call this; population is an explicit
    /// second phase.
    pub fn set_parameters(&mut self, parameter_string: &str) {
        self.parameters.clear();
        self.parameters.extend(parse_parameter_list(parameter_string));
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn date_time(&self) -> &str {
        &self.date_time
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Variable tokens in their original left-to-right order.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Configured extra columns, insertion order = config order.
    pub fn special_parameters(&self) -> &IndexMap<String, String> {
        &self.special_parameters
    }

    pub fn logpai_event_id(&self) -> &str {
        &self.logpai_event_id
    }

    /// 64-char lowercase hex digest of the instantiated template, when known.
    pub fn template_hash(&self) -> Option<&str> {
        self.template_hash.as_deref()
    }
}

/// Device-specific construction capability: maps one source row onto the
/// shared [`LogLine`] shape.
pub trait LineBuilder {
    fn build(
        &self,
        record: &Record,
        header: &Header,
        config: &LogTypeConfig,
    ) -> Result<LogLine, ExtractError>;
}

/// Builder for sources whose rows follow the configured column mapping
/// (logpai structured output and anything shaped like it). Sources with
/// construction logic that a column mapping cannot express implement
/// [`LineBuilder`] themselves.
#[derive(Debug, Clone, Default)]
pub struct StandardLineBuilder;

impl LineBuilder for StandardLineBuilder {
    fn build(
        &self,
        record: &Record,
        header: &Header,
        config: &LogTypeConfig,
    ) -> Result<LogLine, ExtractError> {
        let mut line = LogLine::from_record(record, header, config)?;

        let counter_raw = require(record, header, &config.counter_column)?;
        line.counter = counter_raw.trim().parse().unwrap_or(0);
        line.content = clean_content(require(record, header, &config.content_column)?);
        line.logpai_event_id = require(record, header, &config.event_id_column)?.to_string();

        let template_text = clean_content(require(record, header, &config.template_column)?);
        line.template_hash = Some(template_hash(&template_text));

        let raw_params = require(record, header, &config.parameter_list_column)?;
        line.set_parameters(raw_params);

        // per-record device and timestamp columns are optional
        if let Some(column) = &config.device_column {
            line.device = record.get(header, column).unwrap_or_default().to_string();
        }
        if let Some(column) = &config.date_time_column {
            line.date_time = record.get(header, column).unwrap_or_default().to_string();
        }

        trace!(counter = line.counter, event = %line.logpai_event_id, "built log line");
        Ok(line)
    }
}

fn require<'a>(
    record: &'a Record,
    header: &Header,
    column: &str,
) -> Result<&'a str, ExtractError> {
    record
        .get(header, column)
        .ok_or_else(|| ExtractError::MissingColumn(column.to_string()))
}
