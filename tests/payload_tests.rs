use anyhow::Result;
use school_notify::{
    config::Config,
    models::{
        forms::{AdmissionApplication, ContactSubmission},
        message::{Embed, EmbedField, WebhookMessage},
    },
    utils::{NOT_PROVIDED, NOT_SPECIFIED, admission_message, contact_message},
};
use uuid::Uuid;

fn test_config() -> Config {
    Config {
        webhook_url: Some("https://chat.example.com/hook".to_string()),
        webhook_username: Some("School Office".to_string()),
        webhook_avatar_url: None,
        webhook_mention: None,
        request_timeout_seconds: 5,
        server_port: 0,
    }
}

fn contact_fixture() -> ContactSubmission {
    ContactSubmission {
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
        phone: None,
        subject: None,
        message: "Hello".to_string(),
    }
}

/// Test: Absent optional keys are omitted from the serialized document
#[test]
fn test_absent_optionals_are_omitted() -> Result<()> {
    let message = WebhookMessage {
        content: Some("hello".to_string()),
        ..Default::default()
    };

    let value = serde_json::to_value(&message)?;
    let keys = value.as_object().unwrap();

    assert_eq!(keys.len(), 1, "Only `content` should be present: {:?}", keys);
    assert_eq!(value["content"], "hello");

    Ok(())
}

/// Test: Blank or absent source values serialize as placeholders,
/// never as empty strings or null
#[test]
fn test_blank_field_values_get_placeholders() -> Result<()> {
    let cases = [
        (None, NOT_PROVIDED),
        (Some(""), NOT_PROVIDED),
        (Some("   "), NOT_PROVIDED),
        (Some("0712 345 678"), "0712 345 678"),
    ];

    for (source, expected) in cases {
        let field = EmbedField::required("Alternate Phone", source, NOT_PROVIDED, true);
        assert_eq!(field.value, expected);

        let value = serde_json::to_value(&field)?;
        assert_ne!(value["value"], "", "Field value must never be empty");
        assert!(!value["value"].is_null(), "Field value must never be null");
    }

    Ok(())
}

/// Test: Contact embed carries the expected fields in order, with
/// placeholders for blank phone and subject
#[test]
fn test_contact_embed_field_layout() {
    let config = test_config();
    let reference_id = Uuid::new_v4();

    let message = contact_message(&contact_fixture(), &config, &reference_id);

    assert_eq!(message.embeds.len(), 1);
    let embed = &message.embeds[0];

    let fields: Vec<(&str, &str)> = embed
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.value.as_str()))
        .collect();

    assert_eq!(
        fields,
        vec![
            ("Name", "Asha"),
            ("Email", "asha@example.com"),
            ("Phone", NOT_PROVIDED),
            ("Subject", NOT_SPECIFIED),
            ("Message", "Hello"),
        ]
    );

    assert!(embed.timestamp.is_some(), "Embed should carry a timestamp");
    assert!(
        embed
            .footer
            .as_ref()
            .is_some_and(|f| f.text.contains(&reference_id.to_string())),
        "Footer should carry the reference id"
    );
}

/// Test: Posting identity and mention from configuration flow into the
/// message envelope
#[test]
fn test_identity_override_applied() {
    let mut config = test_config();
    config.webhook_mention = Some("@admissions".to_string());

    let message = contact_message(&contact_fixture(), &config, &Uuid::new_v4());

    assert_eq!(message.username.as_deref(), Some("School Office"));
    assert_eq!(message.content.as_deref(), Some("@admissions"));
    assert!(message.avatar_url.is_none());
}

/// Test: Admission embed substitutes placeholders for the optional
/// alternate phone and previous school
#[test]
fn test_admission_embed_placeholders() {
    let application = AdmissionApplication {
        student_name: "Ravi Kumar".to_string(),
        date_of_birth: "2015-06-01".to_string(),
        grade_applying_for: "Grade 4".to_string(),
        parent_name: "Meena Kumar".to_string(),
        email: "meena@example.com".to_string(),
        phone: "+91 98765 43210".to_string(),
        alternate_phone: Some("".to_string()),
        address: "12 Lake Road, Pune".to_string(),
        previous_school: None,
    };

    let message = admission_message(&application, &test_config(), &Uuid::new_v4());
    let embed = &message.embeds[0];

    let lookup = |name: &str| {
        embed
            .fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    };

    assert_eq!(lookup("Alternate Phone"), Some(NOT_PROVIDED));
    assert_eq!(lookup("Previous School"), Some(NOT_SPECIFIED));
    assert_eq!(lookup("Student Name"), Some("Ravi Kumar"));
}

/// Test: Embed sub-objects serialize under their wire names with
/// absent keys omitted
#[test]
fn test_embed_sub_object_serialization() -> Result<()> {
    use school_notify::models::message::{EmbedAuthor, EmbedFooter, EmbedMedia};

    let embed = Embed {
        title: Some("Gallery update".to_string()),
        url: Some("https://school.example.com/gallery".to_string()),
        author: Some(EmbedAuthor {
            name: "Website".to_string(),
            icon_url: None,
        }),
        thumbnail: Some(EmbedMedia {
            url: "https://school.example.com/logo.png".to_string(),
        }),
        footer: Some(EmbedFooter {
            text: "Ref 1234".to_string(),
            icon_url: None,
        }),
        ..Default::default()
    };

    let value = serde_json::to_value(&embed)?;

    assert_eq!(value["author"]["name"], "Website");
    assert!(value["author"].get("icon_url").is_none());
    assert_eq!(value["thumbnail"]["url"], "https://school.example.com/logo.png");
    assert_eq!(value["footer"]["text"], "Ref 1234");
    assert!(value.get("image").is_none());
    assert!(value.get("color").is_none());
    assert!(value.get("fields").is_none());

    Ok(())
}

/// Test: The empty-message invariant catches blank content and no embeds
#[test]
fn test_empty_message_detection() {
    assert!(WebhookMessage::default().is_empty());

    let blank_content = WebhookMessage {
        content: Some("".to_string()),
        ..Default::default()
    };
    assert!(blank_content.is_empty());

    let with_embed = WebhookMessage {
        embeds: vec![Embed::default()],
        ..Default::default()
    };
    assert!(!with_embed.is_empty());

    let with_content = WebhookMessage {
        content: Some("hi".to_string()),
        ..Default::default()
    };
    assert!(!with_content.is_empty());
}
