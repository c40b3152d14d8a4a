// logline_core: parameter extraction and template identity for structured log
// records. Converts rows of a delimited log file into LogLine values carrying
// a content-hash template identity and the ordered variable tokens recovered
// from the serialized parameter-list encoding.
pub mod config;
pub mod error;
pub mod hash;
pub mod io;
pub mod logline;
pub mod normalize;
pub mod params;
pub mod record;
pub mod template;

pub use config::{ensure_config_loaded, load_config, Component, LoadedConfig, LogTypeConfig};
pub use error::ExtractError;
pub use hash::template_hash;
pub use io::write_to_file;
pub use logline::{LineBuilder, LogLine, StandardLineBuilder};
pub use normalize::{clean_content, clean_uri_content};
pub use params::parse_parameter_list;
pub use record::{read_records, split_fields, Header, Record};
pub use template::{load_templates, Template};
