//! Client side of the website contact form.
//!
//! [`ContactForm`] holds the form state, validates it with the same rules as
//! the server and submits it through a [`ContactApi`].

pub use api::{ContactApi, ContactApiResponse, ContactRequest, HttpContactApi};
pub use form::{ContactForm, ContactFormFields, FormStatus, DEFAULT_TIMEOUT};

mod api;
mod form;
