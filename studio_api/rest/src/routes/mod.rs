pub mod catalog;
pub mod contact;
pub mod gallery;
pub mod health;
pub mod site;
