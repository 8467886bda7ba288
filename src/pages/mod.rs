pub mod home;
pub mod project;
