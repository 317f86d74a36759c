pub mod error;
pub mod question;
pub mod quiz_session;
pub mod wrapped;
