//! Field validators for the login form.
//!
//! Both predicates return `true` when the value is INVALID, matching how the
//! form tracks per-field error flags.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use email_address::{EmailAddress, Options};

/// `true` unless `value` is a bare `local@domain` address with a real top-level domain.
///
/// Display-name forms (`Name <a@b.com>`) and IP or bracketed hosts are rejected,
/// as are domains containing `_` and TLDs that are not two or more letters.
pub fn email_is_invalid(value: &str) -> bool {
    let options = Options::default().with_required_tld().without_display_text().without_domain_literal();
    match EmailAddress::parse_with_options(value, options) {
        Ok(address) => domain_is_invalid(address.domain()),
        Err(_) => true,
    }
}

fn domain_is_invalid(domain: &str) -> bool {
    if domain.contains('_') {
        return true;
    }
    let Some(tld) = domain.rsplit('.').next() else {
        return true;
    };
    let punycode = tld.len() > 4 && tld.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("xn--"));
    !(punycode || (tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic)))
}

/// `true` iff the password is empty after trimming whitespace.
pub fn password_is_invalid(value: &str) -> bool {
    value.trim().is_empty()
}
