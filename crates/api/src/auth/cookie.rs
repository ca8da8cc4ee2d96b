//! The `salle_session` cookie.
//!
//! Browsers authenticate with this HttpOnly cookie, which carries the same
//! access token API clients send as `Authorization: Bearer`.

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "salle_session";

/// `Set-Cookie` value storing `token` for `max_age_secs`.
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age_secs}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that removes the session cookie.
pub fn clear_session_cookie(secure: bool) -> String {
    session_cookie("", 0, secure)
}

/// Extract the session token from a `Cookie` request header.
///
/// Blank values are treated as absent.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_has_session_attributes() {
        let cookie = session_cookie("abc", 3600, false);
        assert_eq!(
            cookie,
            "salle_session=abc; HttpOnly; SameSite=Lax; Path=/; Max-Age=3600"
        );
    }

    #[test]
    fn secure_flag_is_appended() {
        assert!(session_cookie("abc", 60, true).ends_with("; Secure"));
    }

    #[test]
    fn clearing_expires_immediately() {
        let cookie = clear_session_cookie(false);
        assert!(cookie.starts_with("salle_session=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn token_found_among_other_cookies() {
        let header = "theme=dark; salle_session=tok.en.value; lang=cs";
        assert_eq!(token_from_cookie_header(header), Some("tok.en.value"));
    }

    #[test]
    fn missing_or_blank_cookie_is_none() {
        assert_eq!(token_from_cookie_header("theme=dark"), None);
        assert_eq!(token_from_cookie_header("salle_session="), None);
        assert_eq!(token_from_cookie_header(""), None);
    }

    #[test]
    fn similarly_named_cookie_is_ignored() {
        assert_eq!(token_from_cookie_header("salle_session_old=x"), None);
    }
}
