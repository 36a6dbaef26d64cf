use crate::model::settings::SystemSettings;

/// Lowercase hex MD5 digest of a staff password.
pub fn password_digest(secret: &str) -> String {
    format!("{:x}", md5::compute(secret))
}

/// Checks a login attempt against the stored credentials. The stored side
/// only ever holds the digest, so the comparison digests the attempt.
pub fn verify_admin(settings: &SystemSettings, user: &str, pass: &str) -> bool {
    user == settings.admin_user && password_digest(pass) == settings.admin_pass_hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_lowercase_hex() {
        let digest = password_digest("tbs@431728");
        assert_eq!(digest.len(), 32);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_default_credentials_verify() {
        let settings = SystemSettings::default();
        assert!(verify_admin(&settings, "thabo", "tbs@431728"));
        assert!(!verify_admin(&settings, "thabo", "wrong"));
        assert!(!verify_admin(&settings, "admin", "tbs@431728"));
    }

    #[test]
    fn test_stored_digest_never_matches_as_password() {
        let settings = SystemSettings::default();
        let digest = settings.admin_pass_hash.clone();
        assert!(!verify_admin(&settings, "thabo", &digest));
    }
}
