pub mod budget;
pub mod expense;
pub mod message;
pub mod note;
pub mod session;
pub mod user;
