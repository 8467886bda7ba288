pub mod about_me;
pub mod carousel;
pub mod contact;
pub mod hero;
pub mod menu;
pub mod projects;
