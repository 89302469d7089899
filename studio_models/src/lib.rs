pub mod catalog;
pub mod contact;
pub mod email_address;
pub mod gallery;
pub mod sanitize;
pub mod site;
