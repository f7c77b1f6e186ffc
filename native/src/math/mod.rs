pub mod checker;
pub mod color_parse;
pub mod composite;
pub mod generate;
pub mod hex;
pub mod vision;
pub mod wcag;
