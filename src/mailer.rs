use crate::{
    config::SmtpConfig,
    models::{appointments::NewAppointment, contact_messages::NewContactMessage},
};
use anyhow::Context;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Outgoing mail. Implementations block, so callers run them inside `web::block`.
pub trait Mailer: Send + Sync {
    fn send(&self, email: &Email) -> anyhow::Result<()>;
}

pub struct SmtpMailer {
    transport: SmtpTransport,
    sender: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let sender = config
            .sender
            .parse::<Mailbox>()
            .with_context(|| format!("Invalid sender address '{}'", config.sender))?;
        let transport = SmtpTransport::starttls_relay(&config.server)
            .with_context(|| format!("Invalid SMTP relay '{}'", config.server))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport, sender })
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, email: &Email) -> anyhow::Result<()> {
        let to = email
            .to
            .parse::<Mailbox>()
            .with_context(|| format!("Invalid recipient address '{}'", email.to))?;
        let message = Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .context("Failed to build email")?;

        self.transport
            .send(&message)
            .context("Failed to send email")?;
        Ok(())
    }
}

/// Used when no SMTP credentials are configured.
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, email: &Email) -> anyhow::Result<()> {
        log::info!(
            "Mail delivery disabled, dropping '{}' to {}:\n{}",
            email.subject,
            email.to,
            email.body
        );
        Ok(())
    }
}

pub fn appointment_confirmation(appointment: &NewAppointment) -> Email {
    let body = format!(
        "Dear {name},

Thank you for booking an appointment with MediCare.

Appointment Details:
- Doctor: {doctor}
- Date: {date}
- Time: {time}

We will contact you shortly to confirm your appointment.

Best regards,
MediCare Team
",
        name = appointment.name,
        doctor = appointment.doctor,
        date = appointment.date.format("%Y-%m-%d"),
        time = appointment.time,
    );

    Email {
        to: appointment.email.clone(),
        subject: "Appointment Confirmation - MediCare".to_string(),
        body,
    }
}

pub fn contact_notification(message: &NewContactMessage, admin_email: &str) -> Email {
    let body = format!(
        "New contact message received:

From: {name} ({email})
Department: {department}
Subject: {subject}
Urgent: {urgent}

Message:
{message}
",
        name = message.name,
        email = message.email,
        department = message.department,
        subject = message.subject,
        urgent = if message.is_urgent { "Yes" } else { "No" },
        message = message.message,
    );

    Email {
        to: admin_email.to_string(),
        subject: format!("New Contact Message: {}", message.subject),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn confirmation_goes_to_the_patient() {
        let appointment = NewAppointment {
            name: "Rahul Sharma".to_string(),
            email: "rahul@example.com".to_string(),
            phone: "555-0100".to_string(),
            doctor: "Dr. Sarah Smith".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 11, 3).unwrap(),
            time: "10:00 AM".to_string(),
            message: String::new(),
            created_at: Utc::now().naive_utc(),
        };

        let email = appointment_confirmation(&appointment);
        assert_eq!(email.to, "rahul@example.com");
        assert_eq!(email.subject, "Appointment Confirmation - MediCare");
        assert!(email.body.starts_with("Dear Rahul Sharma,"));
        assert!(email.body.contains("- Doctor: Dr. Sarah Smith"));
        assert!(email.body.contains("- Date: 2026-11-03"));
        assert!(email.body.contains("- Time: 10:00 AM"));
    }

    #[test]
    fn notification_goes_to_the_admin() {
        let message = NewContactMessage {
            name: "Priya Patel".to_string(),
            email: "priya@example.com".to_string(),
            subject: "Billing question".to_string(),
            message: "Was I charged twice?".to_string(),
            department: "Billing".to_string(),
            is_urgent: true,
            created_at: Utc::now().naive_utc(),
        };

        let email = contact_notification(&message, "desk@medicare.com");
        assert_eq!(email.to, "desk@medicare.com");
        assert_eq!(email.subject, "New Contact Message: Billing question");
        assert!(email.body.contains("From: Priya Patel (priya@example.com)"));
        assert!(email.body.contains("Department: Billing"));
        assert!(email.body.contains("Urgent: Yes"));
        assert!(email.body.ends_with("Was I charged twice?\n"));
    }
}
