pub mod health;
pub mod helpers;
pub mod home;
pub mod layout;
