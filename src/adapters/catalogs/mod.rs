pub mod embedded_templates;

pub use self::embedded_templates::{EmbeddedTemplate, embedded_templates, find_embedded_template};
