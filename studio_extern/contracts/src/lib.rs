pub mod gallery;
pub mod resend;
