use thiserror::Error;

/// Age limits the registration form accepts
const MIN_AGE: u32 = 13;
const MAX_AGE: u32 = 120;
/// Uzbek phone numbers only
const PHONE_PREFIX: &str = "+998";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("first name is required")]
    MissingFirstName,
    #[error("last name is required")]
    MissingLastName,
    #[error("age must be between {MIN_AGE} and {MAX_AGE}, got {0}")]
    AgeOutOfRange(u32),
    #[error("phone number must start with {PHONE_PREFIX}")]
    BadPhonePrefix,
}

/// Raw registration form input, untrimmed
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub phone: String,
}

/// A form that passed validation, fields trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub phone: String,
}

/// Validate the registration form.
///
/// Collects every failing field rather than stopping at the first, so the
/// UI can mark all of them in one pass.
pub fn validate(form: &RegistrationForm) -> Result<Registration, Vec<FieldError>> {
    let mut errors = Vec::new();

    let first_name = form.first_name.trim();
    if first_name.is_empty() {
        errors.push(FieldError::MissingFirstName);
    }

    let last_name = form.last_name.trim();
    if last_name.is_empty() {
        errors.push(FieldError::MissingLastName);
    }

    if !(MIN_AGE..=MAX_AGE).contains(&form.age) {
        errors.push(FieldError::AgeOutOfRange(form.age));
    }

    let phone = form.phone.trim();
    if !phone.starts_with(PHONE_PREFIX) {
        errors.push(FieldError::BadPhonePrefix);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Registration {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        age: form.age,
        phone: phone.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            first_name: "  Aziz ".to_string(),
            last_name: "Karimov".to_string(),
            age: 25,
            phone: "+998901234567".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes_and_trims() {
        let reg = validate(&valid_form()).unwrap();
        assert_eq!(reg.first_name, "Aziz");
        assert_eq!(reg.phone, "+998901234567");
    }

    #[test]
    fn test_age_bounds() {
        let mut form = valid_form();
        form.age = 12;
        assert_eq!(validate(&form).unwrap_err(), vec![FieldError::AgeOutOfRange(12)]);

        form.age = 13;
        assert!(validate(&form).is_ok());

        form.age = 120;
        assert!(validate(&form).is_ok());

        form.age = 121;
        assert_eq!(validate(&form).unwrap_err(), vec![FieldError::AgeOutOfRange(121)]);
    }

    #[test]
    fn test_phone_prefix() {
        let mut form = valid_form();
        form.phone = "+79001234567".to_string();
        assert_eq!(validate(&form).unwrap_err(), vec![FieldError::BadPhonePrefix]);
    }

    #[test]
    fn test_all_errors_collected() {
        let form = RegistrationForm {
            first_name: "   ".to_string(),
            last_name: String::new(),
            age: 7,
            phone: "901234567".to_string(),
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::MissingFirstName,
                FieldError::MissingLastName,
                FieldError::AgeOutOfRange(7),
                FieldError::BadPhonePrefix,
            ]
        );
    }
}
