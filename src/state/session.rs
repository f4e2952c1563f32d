// Session cookie strings shared by the sign-in bridge.

/// Session lifecycle as far as the page can see it, decided entirely by
/// whether the token cookie is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    SignedOut,
    SignedIn,
}

const EPOCH_EXPIRES: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Extracts the named cookie's value from a `document.cookie` header string.
///
/// An empty value counts as absent: the server rejects empty tokens, so an
/// empty cookie must not keep the page looking signed in.
pub fn token_in<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        let value = value.trim();
        (key.trim() == name && !value.is_empty()).then_some(value)
    })
}

pub fn phase(cookies: &str, name: &str) -> SessionPhase {
    if token_in(cookies, name).is_some() {
        SessionPhase::SignedIn
    } else {
        SessionPhase::SignedOut
    }
}

/// Cookie string that establishes a session, or `None` when a token cookie
/// is already present. The guard keeps a re-fired sign-in callback from
/// setting the cookie and reloading twice; it also means another account
/// cannot take over until the cookie expires or sign-out clears it.
pub fn establish(cookies: &str, name: &str, id_token: &str, max_age_secs: u32) -> Option<String> {
    if token_in(cookies, name).is_some() {
        return None;
    }
    Some(format!("{name}={id_token}; Path=/; Max-Age={max_age_secs}"))
}

/// Cookie string that expires the session immediately.
pub fn clear(name: &str) -> String {
    format!("{name}=; Path=/; Expires={EPOCH_EXPIRES}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: &str = "idtoken";

    #[test]
    fn finds_the_token_among_other_cookies() {
        assert_eq!(token_in("a=1; idtoken=tok.abc; b=2", NAME), Some("tok.abc"));
    }

    #[test]
    fn ignores_cookies_sharing_a_name_prefix() {
        assert_eq!(token_in("idtoken2=x; xidtoken=y", NAME), None);
    }

    #[test]
    fn tolerates_whitespace_around_pairs() {
        assert_eq!(token_in("  idtoken = tok  ; other=1", NAME), Some("tok"));
    }

    #[test]
    fn an_empty_value_counts_as_absent() {
        assert_eq!(token_in("idtoken=; other=1", NAME), None);
        assert_eq!(phase("idtoken=", NAME), SessionPhase::SignedOut);
    }

    #[test]
    fn establish_sets_the_documented_attributes() {
        assert_eq!(
            establish("", NAME, "abc", 900).as_deref(),
            Some("idtoken=abc; Path=/; Max-Age=900")
        );
    }

    #[test]
    fn a_second_sign_in_is_a_no_op() {
        // Holds for the same token and for a different account: once a
        // session cookie exists nothing replaces it until it expires or
        // sign-out clears it.
        let first = establish("", NAME, "abc", 900).expect("first sign-in sets the cookie");
        let browser_view = first.split(';').next().expect("cookie pair").to_string();
        assert_eq!(establish(&browser_view, NAME, "abc", 900), None);
        assert_eq!(establish(&browser_view, NAME, "other-account", 900), None);
    }

    #[test]
    fn clear_expires_the_cookie_no_matter_the_prior_state() {
        let expired = "idtoken=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT";
        assert_eq!(clear(NAME), expired);
        assert_eq!(clear(NAME), expired);
    }

    #[test]
    fn expiry_returns_the_page_to_signed_out() {
        assert_eq!(phase("idtoken=tok", NAME), SessionPhase::SignedIn);
        // Once Max-Age elapses the browser drops the pair on its own.
        assert_eq!(phase("other=1", NAME), SessionPhase::SignedOut);
        assert_eq!(phase("", NAME), SessionPhase::SignedOut);
    }
}
