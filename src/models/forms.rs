use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::models::validation::{
    validate_email, validate_message, validate_name, validate_phone,
};

/// Contact-page submission as posted by the site form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub subject: Option<String>,

    pub message: String,
}

impl ContactSubmission {
    pub fn validate(&self) -> Result<(), Error> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        if let Some(phone) = non_blank(&self.phone) {
            validate_phone(phone)?;
        }
        validate_message(&self.message)?;
        Ok(())
    }
}

/// Admission application, collected step by step on the client and
/// submitted here as one flat record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdmissionApplication {
    pub student_name: String,
    pub date_of_birth: String,
    pub grade_applying_for: String,
    pub parent_name: String,
    pub email: String,
    pub phone: String,

    #[serde(default)]
    pub alternate_phone: Option<String>,

    pub address: String,

    #[serde(default)]
    pub previous_school: Option<String>,
}

impl AdmissionApplication {
    pub fn validate(&self) -> Result<(), Error> {
        validate_name(&self.student_name)?;
        validate_name(&self.parent_name)?;
        validate_email(&self.email)?;
        validate_phone(&self.phone)?;
        if let Some(alternate) = non_blank(&self.alternate_phone) {
            validate_phone(alternate)?;
        }
        validate_message(&self.address)?;
        validate_message(&self.grade_applying_for)?;
        validate_message(&self.date_of_birth)?;
        Ok(())
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
