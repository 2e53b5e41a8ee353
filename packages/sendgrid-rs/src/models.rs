use serde::Serialize;

/// A single outbound plain-text email.
#[derive(Debug, Clone)]
pub struct Mail {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub text: String,
}

/// Wire shape of the SendGrid v3 `/mail/send` request body.
#[derive(Debug, Serialize)]
pub(crate) struct MailSendRequest {
    pub personalizations: Vec<Personalization>,
    pub from: EmailAddress,
    pub subject: String,
    pub content: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Personalization {
    pub to: Vec<EmailAddress>,
}

#[derive(Debug, Serialize)]
pub(crate) struct EmailAddress {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content {
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String,
}

impl From<&Mail> for MailSendRequest {
    fn from(mail: &Mail) -> Self {
        MailSendRequest {
            personalizations: vec![Personalization {
                to: vec![EmailAddress {
                    email: mail.to.clone(),
                }],
            }],
            from: EmailAddress {
                email: mail.from.clone(),
            },
            subject: mail.subject.clone(),
            content: vec![Content {
                content_type: "text/plain".to_string(),
                value: mail.text.clone(),
            }],
        }
    }
}
