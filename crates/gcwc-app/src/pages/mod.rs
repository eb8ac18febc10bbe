pub mod calculations;
pub mod login;
pub mod profile;
pub mod register;
