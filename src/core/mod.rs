pub mod component;
pub mod input;
pub mod text;
