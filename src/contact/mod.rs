//! Contact form submission: reCAPTCHA check, then an SES email

pub mod compose;
pub mod handler;
pub mod mailer;
pub mod submission;
pub mod verification;

pub use handler::ContactHandler;
pub use mailer::{Mailer, SesMailer};
pub use verification::{RecaptchaVerifier, Verifier};
