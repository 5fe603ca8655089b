/// Minimum password length accepted by the signup and login forms.
/// Matches the backend's own constraint; checked locally so bad input
/// never reaches the network layer.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Check the email shape the forms accept: one `@`, non-empty local
/// part, a dot in the domain with something on both sides, and no
/// whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() => match domain.rsplit_once('.') {
            Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
            None => false,
        },
        _ => false,
    }
}

pub fn is_valid_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LEN
}
