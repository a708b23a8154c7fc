pub mod forms;
pub mod health;
pub mod message;
pub mod response;
pub mod validation;
