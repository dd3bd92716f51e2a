pub mod parse;
pub mod response;
