pub mod inline;
pub mod stream;
