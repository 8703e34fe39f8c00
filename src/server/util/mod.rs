pub mod extract;
pub mod json_field;
pub mod parse;
