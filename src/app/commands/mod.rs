pub mod controller;
pub mod templates;
pub mod view;
