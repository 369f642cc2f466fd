//! Building and delivering the reminder email.

use crate::config::{Config, ConfigError, DraftAddresses, EmailSettings};
use crate::core::{extract_body, render, render_plain, HolidayRecord};
use chrono::NaiveDate;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid address '{address}': {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },
    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("failed to set up SMTP transport: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A rendered reminder, ready to be previewed, saved or sent.
#[derive(Debug, Clone)]
pub struct Reminder {
    pub subject: String,
    /// Full HTML document, for browser preview
    pub document: String,
    pub text: String,
}

impl Reminder {
    pub fn render(holidays: &[HolidayRecord], reference: NaiveDate, config: &Config) -> Self {
        let content = &config.content;
        Self {
            subject: config.subject(),
            document: render(
                holidays,
                reference,
                &content.company_footer,
                &content.signature,
            ),
            text: render_plain(holidays, reference, &content.signature),
        }
    }

    /// The document body, which is what goes into the mail's HTML part.
    pub fn html_body(&self) -> &str {
        extract_body(&self.document)
    }

    pub fn message(&self, from: &str, to: &str) -> Result<Message, MailError> {
        let message = Message::builder()
            .from(mailbox(from)?)
            .to(mailbox(to)?)
            .subject(self.subject.as_str())
            .multipart(MultiPart::alternative_plain_html(
                self.text.clone(),
                self.html_body().to_string(),
            ))?;
        Ok(message)
    }

    /// Serialized draft for opening in a desktop mail client
    pub fn draft_eml(&self, draft: &DraftAddresses) -> Result<Vec<u8>, MailError> {
        Ok(self.message(&draft.from, &draft.to)?.formatted())
    }
}

fn mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|source| MailError::Address {
        address: address.to_string(),
        source,
    })
}

/// STARTTLS relay with login credentials for the configured provider
pub fn smtp_transport(settings: &EmailSettings) -> Result<SmtpTransport, MailError> {
    let (host, port) = settings.relay()?;
    log::debug!("Using SMTP relay {}:{}", host, port);
    let transport = SmtpTransport::starttls_relay(host)?
        .port(port)
        .credentials(Credentials::new(
            settings.sender.clone(),
            settings.password.clone(),
        ))
        .build();
    Ok(transport)
}

/// Outcome of a send-to-all run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendReport {
    pub sent: usize,
    pub failed: Vec<String>,
}

/// Send one message per recipient. A failure is logged and the run moves on
/// to the next recipient; nothing is retried.
pub fn send_all<T>(
    transport: &T,
    reminder: &Reminder,
    from: &str,
    recipients: &[String],
) -> SendReport
where
    T: Transport,
    T::Error: std::fmt::Display,
{
    let mut report = SendReport::default();
    for recipient in recipients {
        let result = reminder
            .message(from, recipient)
            .map_err(|err| err.to_string())
            .and_then(|message| transport.send(&message).map_err(|err| err.to_string()));
        match result {
            Ok(_) => {
                log::info!("Email sent successfully to {}", recipient);
                report.sent += 1;
            }
            Err(err) => {
                log::error!("Failed to send email to {}: {}", recipient, err);
                report.failed.push(recipient.clone());
            }
        }
    }
    report
}
