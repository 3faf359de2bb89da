use super::password::validate_password;
use crate::modules::utils::logging::log_auth_event;
use crate::ADMIN_USERNAME;

/// Function to check a login attempt against the fixed identity and the
/// password strength rule.
///
/// The caller only learns granted/denied; which input failed is deliberately
/// not reported back. Every call is independent: no lockout, no attempt
/// counting.
pub fn authenticate(username: &str, password: &str) -> bool {
    // Username comparison is exact and case-sensitive
    let granted = username == ADMIN_USERNAME && validate_password(password).is_ok();

    log_auth_event(
        "login",
        username,
        granted,
        if granted { None } else { Some("credentials rejected") },
    );

    granted
}
