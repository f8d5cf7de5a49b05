pub mod clubs;
pub mod health;
pub mod home;
