use anyhow::{Error, Result, anyhow};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    clients::webhook::WebhookClient,
    config::Config,
    error::DispatchError,
    models::{
        forms::{AdmissionApplication, ContactSubmission},
        message::{Embed, EmbedField, EmbedFooter, WebhookMessage},
    },
};

/// Placeholders for optional display fields that arrived blank. The
/// chat endpoint rejects embed fields with empty values, so blanks are
/// never sent through.
pub const NOT_PROVIDED: &str = "Not provided";
pub const NOT_SPECIFIED: &str = "Not specified";

const CONTACT_COLOR: u32 = 0x3B82F6;
const ADMISSION_COLOR: u32 = 0x22C55E;

#[derive(Debug)]
pub enum ProcessError {
    Validation(Error),
    Dispatch(DispatchError),
}

pub fn contact_message(
    submission: &ContactSubmission,
    config: &Config,
    reference_id: &Uuid,
) -> WebhookMessage {
    let embed = Embed {
        title: Some("New contact form submission".to_string()),
        color: Some(CONTACT_COLOR),
        fields: vec![
            EmbedField::new("Name", submission.name.trim(), true),
            EmbedField::new("Email", submission.email.trim(), true),
            EmbedField::required("Phone", submission.phone.as_deref(), NOT_PROVIDED, true),
            EmbedField::required(
                "Subject",
                submission.subject.as_deref(),
                NOT_SPECIFIED,
                false,
            ),
            EmbedField::new("Message", submission.message.trim(), false),
        ],
        footer: Some(EmbedFooter {
            text: format!("Ref {}", reference_id),
            icon_url: None,
        }),
        timestamp: Some(Utc::now().to_rfc3339()),
        ..Default::default()
    };

    message_with_identity(embed, config)
}

pub fn admission_message(
    application: &AdmissionApplication,
    config: &Config,
    reference_id: &Uuid,
) -> WebhookMessage {
    let embed = Embed {
        title: Some("New admission application".to_string()),
        color: Some(ADMISSION_COLOR),
        fields: vec![
            EmbedField::new("Student Name", application.student_name.trim(), true),
            EmbedField::new("Date of Birth", application.date_of_birth.trim(), true),
            EmbedField::new("Grade", application.grade_applying_for.trim(), true),
            EmbedField::new("Parent Name", application.parent_name.trim(), true),
            EmbedField::new("Email", application.email.trim(), true),
            EmbedField::new("Phone", application.phone.trim(), true),
            EmbedField::required(
                "Alternate Phone",
                application.alternate_phone.as_deref(),
                NOT_PROVIDED,
                true,
            ),
            EmbedField::required(
                "Previous School",
                application.previous_school.as_deref(),
                NOT_SPECIFIED,
                true,
            ),
            EmbedField::new("Address", application.address.trim(), false),
        ],
        footer: Some(EmbedFooter {
            text: format!("Ref {}", reference_id),
            icon_url: None,
        }),
        timestamp: Some(Utc::now().to_rfc3339()),
        ..Default::default()
    };

    message_with_identity(embed, config)
}

fn message_with_identity(embed: Embed, config: &Config) -> WebhookMessage {
    WebhookMessage {
        content: config.webhook_mention.clone(),
        username: config.webhook_username.clone(),
        avatar_url: config.webhook_avatar_url.clone(),
        tts: None,
        embeds: vec![embed],
    }
}

pub async fn process_contact(
    submission: &ContactSubmission,
    config: &Config,
    webhook_client: &WebhookClient,
) -> Result<Uuid, ProcessError> {
    let reference_id = Uuid::new_v4();

    info!(
        reference_id = %reference_id,
        name = %submission.name,
        "Processing contact submission"
    );

    submission.validate().map_err(ProcessError::Validation)?;

    let message = contact_message(submission, config, &reference_id);

    dispatch(&message, webhook_client, &reference_id).await?;

    Ok(reference_id)
}

pub async fn process_admission(
    application: &AdmissionApplication,
    config: &Config,
    webhook_client: &WebhookClient,
) -> Result<Uuid, ProcessError> {
    let reference_id = Uuid::new_v4();

    info!(
        reference_id = %reference_id,
        student = %application.student_name,
        "Processing admission application"
    );

    application.validate().map_err(ProcessError::Validation)?;

    let message = admission_message(application, config, &reference_id);

    dispatch(&message, webhook_client, &reference_id).await?;

    Ok(reference_id)
}

async fn dispatch(
    message: &WebhookMessage,
    webhook_client: &WebhookClient,
    reference_id: &Uuid,
) -> Result<(), ProcessError> {
    if message.is_empty() {
        return Err(ProcessError::Validation(anyhow!(
            "Refusing to send an empty message"
        )));
    }

    match webhook_client.execute(message).await {
        Ok(()) => {
            info!(reference_id = %reference_id, "Notification delivered");
            Ok(())
        }
        Err(e) => {
            warn!(reference_id = %reference_id, error = %e, "Notification failed");
            Err(ProcessError::Dispatch(e))
        }
    }
}
