pub mod gallery;
pub mod http;
pub mod resend;
