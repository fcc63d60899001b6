pub mod client_factory;
pub mod error;
pub mod event_handler;
pub mod image_type;
pub mod object_url;
pub mod objects;
