pub mod template_folders;

pub use template_folders::template_folders;
