//! Syntactic checks applied to request payloads before they reach the workflow.

use acme_shared::Passenger;
use crate::{CoreError, CoreResult};

/// Returns the value when it has at least one non-whitespace character.
pub fn require_non_blank<'a>(field: &str, value: &'a str) -> CoreResult<&'a str> {
    if value.trim().is_empty() {
        return Err(CoreError::ValidationError(format!("{} must not be blank", field)));
    }
    Ok(value)
}

const LOCAL_PART_MAX: usize = 64;
const DOMAIN_LABEL_MAX: usize = 63;

/// RFC 5322 `atext`, plus any non-ASCII character.
fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || !c.is_ascii() || "!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.chars().count() <= DOMAIN_LABEL_MAX
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_alphanumeric() || c == '-')
}

/// Syntactic address check: dot-separated atoms before a single `@`, then one or more
/// hostname labels. Single-label hosts such as `localhost` pass.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.chars().count() > LOCAL_PART_MAX || domain.contains('@') {
        return false;
    }

    local.split('.').all(|atom| !atom.is_empty() && atom.chars().all(is_atext))
        && domain.split('.').all(is_domain_label)
}

pub fn validate_passenger(passenger: &Passenger) -> CoreResult<()> {
    require_non_blank("passenger.name", &passenger.name)?;
    require_non_blank("passenger.email", &passenger.email)?;
    require_non_blank("passenger.phone", &passenger.phone)?;
    if !is_valid_email(&passenger.email) {
        return Err(CoreError::ValidationError(
            "passenger.email must be a well-formed email address".to_string(),
        ));
    }
    Ok(())
}
