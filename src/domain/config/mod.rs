pub mod parse;
pub mod scaffold_config;

pub use parse::{parse_config_content, parse_project_json_name};
pub use scaffold_config::{ProjectConfig, ScaffoldConfig, TemplatesConfig};
