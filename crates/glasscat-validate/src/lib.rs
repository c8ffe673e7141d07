pub mod validator;

pub use validator::Validator;
