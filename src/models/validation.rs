use anyhow::{Result, anyhow};

pub fn validate_name(name: &str) -> Result<()> {
    let name = name.trim();

    if name.len() < 2 {
        return Err(anyhow!("Name too short (minimum 2 characters)"));
    }

    if name.len() > 100 {
        return Err(anyhow!("Name too long (maximum 100 characters)"));
    }

    let valid_chars = name
        .chars()
        .all(|c| c.is_alphabetic() || c == ' ' || c == '\'' || c == '-' || c == '.');

    if !valid_chars {
        return Err(anyhow!("Name contains invalid characters"));
    }

    Ok(())
}

pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(anyhow!("Email cannot be empty"));
    }

    if email.len() > 254 {
        return Err(anyhow!("Email too long (maximum 254 characters)"));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(anyhow!("Email must contain '@'"));
    };

    if local.is_empty() || domain.is_empty() {
        return Err(anyhow!("Email is missing local part or domain"));
    }

    if domain.contains('@') {
        return Err(anyhow!("Email must contain exactly one '@'"));
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(anyhow!("Email domain is malformed"));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(anyhow!("Email cannot contain whitespace"));
    }

    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(anyhow!("Phone number cannot be empty"));
    }

    let valid_chars = phone
        .chars()
        .all(|c| c.is_ascii_digit() || c == '+' || c == '-' || c == ' ' || c == '(' || c == ')');

    if !valid_chars {
        return Err(anyhow!("Phone number contains invalid characters"));
    }

    let digits = phone.chars().filter(char::is_ascii_digit).count();

    if digits < 7 {
        return Err(anyhow!("Phone number too short (minimum 7 digits)"));
    }

    if digits > 15 {
        return Err(anyhow!("Phone number too long (maximum 15 digits)"));
    }

    Ok(())
}

pub fn validate_message(text: &str) -> Result<()> {
    let text = text.trim();

    if text.is_empty() {
        return Err(anyhow!("Field cannot be empty"));
    }

    if text.len() > 2000 {
        return Err(anyhow!("Field too long (maximum 2000 characters)"));
    }

    Ok(())
}
