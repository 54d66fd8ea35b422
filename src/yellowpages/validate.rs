//! Field validators shared by record construction, edits and the interactive prompts.
//!
//! Both validators normalize on success: names get `ё` folded to `е` (the `А-Я` range does not
//! include it), phones are reformatted to `+7-XXX-XXX-XXXX`.

use crate::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-zА-Яа-я]+(?:-[A-Za-zА-Яа-я]+)?$").expect("name pattern is valid")
});

/// Validates a surname, name or patronymic.
///
/// `Ё` folds to uppercase `Е` so capitalized names keep their capital. Older files may hold
/// names where `Ё` was folded to lowercase `е`; those still validate and load unchanged.
pub fn validate_name(text: &str) -> Result<String, ValidationError> {
    let normalized = text.replace('Ё', "Е").replace('ё', "е");
    if NAME_PATTERN.is_match(&normalized) {
        Ok(normalized)
    } else {
        Err(ValidationError::InvalidName(text.to_string()))
    }
}

/// Validates a phone number and returns it as `+7-XXX-XXX-XXXX`.
///
/// Everything but digits is ignored, so `8 (912) 345-67-89`, `+7 912 3456789` and
/// `9123456789` all normalize to the same string.
pub fn validate_phone(phone: &str) -> Result<String, ValidationError> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    let local = match digits.len() {
        10 => digits.as_str(),
        11 if digits.starts_with('7') || digits.starts_with('8') => &digits[1..],
        11 => return Err(ValidationError::InvalidPhonePrefix(phone.to_string())),
        _ => return Err(ValidationError::InvalidPhoneLength(phone.to_string())),
    };

    Ok(format!(
        "+7-{}-{}-{}",
        &local[..3],
        &local[3..6],
        &local[6..]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names_in_both_alphabets() {
        assert_eq!(validate_name("Иванов").unwrap(), "Иванов");
        assert_eq!(validate_name("Smith").unwrap(), "Smith");
    }

    #[test]
    fn accepts_a_single_hyphen() {
        assert_eq!(
            validate_name("Римский-Корсаков").unwrap(),
            "Римский-Корсаков"
        );
        assert_eq!(validate_name("Jean-Luc").unwrap(), "Jean-Luc");
    }

    #[test]
    fn folds_yo_into_ye() {
        assert_eq!(validate_name("Фёдор").unwrap(), "Федор");
        assert_eq!(validate_name("Ёлкин").unwrap(), "Елкин");
    }

    #[test]
    fn rejects_digits_spaces_and_extra_hyphens() {
        for bad in [
            "Ivan0v",
            "Ivan Petrov",
            "A-B-C",
            "-Ivan",
            "Ivan-",
            "",
            "O'Neil",
            "Иван.",
        ] {
            let err = validate_name(bad).unwrap_err();
            assert_eq!(err, ValidationError::InvalidName(bad.to_string()));
        }
    }

    #[test]
    fn formats_ten_digit_numbers() {
        assert_eq!(validate_phone("9123456789").unwrap(), "+7-912-345-6789");
        assert_eq!(validate_phone("(912) 345-67-89").unwrap(), "+7-912-345-6789");
    }

    #[test]
    fn drops_leading_seven_or_eight() {
        assert_eq!(validate_phone("89123456789").unwrap(), "+7-912-345-6789");
        assert_eq!(
            validate_phone("+7 (912) 345-67-89").unwrap(),
            "+7-912-345-6789"
        );
    }

    #[test]
    fn normalized_output_validates_to_itself() {
        assert_eq!(validate_phone("+7-912-345-6789").unwrap(), "+7-912-345-6789");
    }

    #[test]
    fn rejects_eleven_digits_with_other_prefix() {
        assert_eq!(
            validate_phone("59123456789").unwrap_err(),
            ValidationError::InvalidPhonePrefix("59123456789".to_string())
        );
    }

    #[test]
    fn rejects_other_lengths() {
        for bad in ["", "12345", "912345678", "891234567890", "phone"] {
            assert_eq!(
                validate_phone(bad).unwrap_err(),
                ValidationError::InvalidPhoneLength(bad.to_string())
            );
        }
    }
}
