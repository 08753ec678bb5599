pub mod appointments;
pub mod contact_messages;
pub mod doctors;
pub mod services;
