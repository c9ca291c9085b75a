pub mod create_topic;
pub mod home;
pub mod topics;
