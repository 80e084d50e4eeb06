//! Login-to-verify flow without touching the keyring.

use happy_auth::{AuthError, password, refresh, token};
use happy_core::enums::Role;
use happy_core::identity::AuthIdentity;
use pretty_assertions::assert_eq;

const SECRET: &str = "integration-secret";

#[test]
fn password_login_issues_verifiable_token() {
    let stored_hash = password::hash("password123").expect("hash");
    assert!(password::verify("password123", &stored_hash).expect("verify"));

    let identity = AuthIdentity {
        user_id: "usr-0a1b2c3d".into(),
        username: "demo".into(),
        role: Role::Writer,
    };
    let issued = token::issue(&identity, SECRET, 24 * 24 * 60 * 60).expect("issue");
    assert_eq!(issued.role, Role::Writer);
    assert_eq!(issued.expires_in, 2_073_600);

    let claims = token::verify(&issued.access_token, SECRET).expect("verify");
    assert_eq!(claims.to_identity(), identity);
    assert!(!claims.is_near_expiry(60));

    let exp = refresh::decode_expiry(&issued.access_token).expect("peek");
    assert_eq!(exp, claims.expires_at());
}

#[test]
fn admin_role_survives_the_roundtrip() {
    let identity = AuthIdentity {
        user_id: "usr-ffff0000".into(),
        username: "root".into(),
        role: Role::Admin,
    };
    let issued = token::issue(&identity, SECRET, 60).expect("issue");
    let claims = token::verify(&issued.access_token, SECRET).expect("verify");
    assert!(claims.role.is_admin());
}

#[test]
fn tampered_payload_is_rejected() {
    let identity = AuthIdentity {
        user_id: "usr-0a1b2c3d".into(),
        username: "demo".into(),
        role: Role::Visitor,
    };
    let issued = token::issue(&identity, SECRET, 600).expect("issue");
    let other = token::issue(
        &AuthIdentity {
            role: Role::Admin,
            ..identity
        },
        SECRET,
        600,
    )
    .expect("issue");

    // Graft the admin payload onto the visitor signature.
    let visitor: Vec<&str> = issued.access_token.split('.').collect();
    let admin: Vec<&str> = other.access_token.split('.').collect();
    let forged = format!("{}.{}.{}", visitor[0], admin[1], visitor[2]);

    assert!(matches!(
        token::verify(&forged, SECRET),
        Err(AuthError::InvalidToken(_))
    ));
}
