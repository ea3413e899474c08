use crate::error::HostnameErrorKind;

/// Maximum hostname length in bytes, trailing dot included
pub const MAX_HOSTNAME_LEN: usize = 254;

/// Maximum label length in bytes
pub const MAX_LABEL_LEN: usize = 63;

/// Check that `host` is a lexically valid DNS name.
///
/// Labels are 1-63 bytes of `[A-Za-z0-9_-]`, never start or end with a
/// hyphen, and are separated by single dots. A single trailing dot is
/// allowed and only a name ending in one may reach 254 bytes. At least one
/// character must be non-numeric, which rules out dotted IPv4 addresses.
pub fn validate_hostname(host: &str) -> Result<(), HostnameErrorKind> {
    let len = host.len();
    if len == 0 {
        return Err(HostnameErrorKind::Empty);
    }
    if len > MAX_HOSTNAME_LEN || (len == MAX_HOSTNAME_LEN && !host.ends_with('.')) {
        return Err(HostnameErrorKind::TooLong);
    }

    let mut last = '.';
    let mut non_numeric = false;
    let mut label_len = 0;

    for c in host.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '_' => {
                non_numeric = true;
                label_len += 1;
            }
            '0'..='9' => label_len += 1,
            '-' => {
                if last == '.' {
                    return Err(HostnameErrorKind::LeadingHyphen);
                }
                non_numeric = true;
                label_len += 1;
            }
            '.' => {
                if last == '.' {
                    return Err(HostnameErrorKind::EmptyLabel);
                }
                if last == '-' {
                    return Err(HostnameErrorKind::TrailingHyphen);
                }
                if label_len > MAX_LABEL_LEN {
                    return Err(HostnameErrorKind::LabelTooLong);
                }
                label_len = 0;
            }
            _ => return Err(HostnameErrorKind::InvalidCharacter),
        }
        last = c;
    }

    if last == '-' {
        return Err(HostnameErrorKind::TrailingHyphen);
    }
    if label_len > MAX_LABEL_LEN {
        return Err(HostnameErrorKind::LabelTooLong);
    }
    if !non_numeric {
        return Err(HostnameErrorKind::AllNumeric);
    }

    Ok(())
}
