use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::core::models::{OutboundEmail, SubmissionRequest};

pub const SUBJECT: &str = "New Contact Form Submission";

// Everything but ALPHA / DIGIT / "_" / "." / "-" / "~".
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// Form-URL-encode `message`, then turn every `+` back into a space.
///
/// Spaces survive as spaces, a typed `+` becomes `%2B`, and every other
/// reserved or non-ASCII byte stays percent-encoded, e.g. `"a+b c\n"`
/// becomes `"a%2Bb c%0A"`.
#[must_use]
pub fn encode_html_message(message: &str) -> String {
    message
        .split(' ')
        .map(|part| utf8_percent_encode(part, FORM_ENCODE_SET).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn text_body(submission: &SubmissionRequest) -> String {
    format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}\n",
        submission.name, submission.email, submission.message
    )
}

#[must_use]
pub fn html_body(submission: &SubmissionRequest) -> String {
    format!(
        "\n<h3>{SUBJECT}</h3>\n\
         <p><strong>Name:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Message:</strong><br/>{}</p>\n",
        submission.name,
        submission.email,
        encode_html_message(&submission.message)
    )
}

#[must_use]
pub fn build_email(submission: &SubmissionRequest, from: &str, to: &str) -> OutboundEmail {
    OutboundEmail {
        source: from.to_string(),
        to_addresses: vec![to.to_string()],
        subject: SUBJECT.to_string(),
        text_body: text_body(submission),
        html_body: html_body(submission),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(message: &str) -> SubmissionRequest {
        SubmissionRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: message.to_string(),
            verification_token: "t".to_string(),
        }
    }

    #[test]
    fn html_encoding_quirk() {
        assert_eq!(encode_html_message("hello world"), "hello world");
        assert_eq!(encode_html_message("a+b c"), "a%2Bb c");
        assert_eq!(encode_html_message("line1\nline2"), "line1%0Aline2");
        assert_eq!(encode_html_message("<b>&"), "%3Cb%3E%26");
        assert_eq!(encode_html_message("keep_.-~ *"), "keep_.-~ %2A");
        assert_eq!(encode_html_message("café"), "caf%C3%A9");
    }

    #[test]
    fn text_layout() {
        assert_eq!(
            text_body(&submission("hi there")),
            "Name: Ada\nEmail: ada@example.com\n\nMessage:\nhi there\n"
        );
    }

    #[test]
    fn html_embeds_encoded_message() {
        let html = html_body(&submission("1+1 = 2"));
        assert!(html.contains("<h3>New Contact Form Submission</h3>"));
        assert!(html.contains("<p><strong>Name:</strong> Ada</p>"));
        assert!(html.contains("<br/>1%2B1 %3D 2</p>"));
    }

    #[test]
    fn single_recipient() {
        let email = build_email(&submission("hi"), "from@example.com", "to@example.com");
        assert_eq!(email.source, "from@example.com");
        assert_eq!(email.to_addresses, vec!["to@example.com".to_string()]);
        assert_eq!(email.subject, SUBJECT);
    }
}
