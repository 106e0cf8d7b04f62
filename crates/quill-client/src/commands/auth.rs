//! Register, login, and logout.
//!
//! Credentials are compared in plaintext against the single locally stored
//! account. This gates navigation only; it is not an authentication
//! boundary.

use quill_shared::{validate_login, validate_register, LoginForm, RegisterForm, Session};

use crate::error::ClientError;
use crate::state::AppState;

/// Validate the registration form and persist the account, overwriting any
/// previous one. The caller then directs the user to the login view.
pub fn register(state: &AppState, form: RegisterForm) -> Result<(), ClientError> {
    validate_register(&form)?;

    let account = form.into_account();
    state.storage.save_account(&account)?;
    tracing::info!(username = %account.username, "account registered");
    Ok(())
}

/// Validate the login form and compare it against the stored account. On a
/// match, persist the session and the derived display name and return the
/// name. The rejection never says whether an account exists at all.
pub fn login(state: &mut AppState, form: LoginForm) -> Result<String, ClientError> {
    validate_login(&form)?;

    let Some(account) = state.storage.load_account()? else {
        return Err(ClientError::InvalidCredentials);
    };
    if account.email != form.email || account.password != form.password {
        return Err(ClientError::InvalidCredentials);
    }

    // Display name: account username, else the email's local part.
    let display_name = if account.username.is_empty() {
        form.email.split('@').next().unwrap_or_default().to_string()
    } else {
        account.username.clone()
    };

    let session = Session {
        email: form.email,
        password: form.password,
    };
    state.storage.save_session(&session)?;
    state.storage.save_display_name(&display_name)?;
    state.set_session(session, display_name.clone());

    tracing::info!(display_name = %display_name, "logged in");
    Ok(display_name)
}

/// Clear the session and everything derived from it. The account record
/// survives so the user can log back in.
pub fn logout(state: &mut AppState) -> Result<(), ClientError> {
    state.storage.clear_session()?;
    state.drop_session();
    tracing::info!("logged out");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_store::Storage;

    fn state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open_at(dir.path()).unwrap();
        let state = AppState::with_storage_offline(storage).unwrap();
        (dir, state)
    }

    fn alice() -> RegisterForm {
        RegisterForm {
            username: "alice123".into(),
            email: "a@b.com".into(),
            phone: "1234567890".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        }
    }

    #[test]
    fn register_then_login_creates_session() {
        let (_dir, mut state) = state();

        register(&state, alice()).unwrap();
        assert!(state.storage.load_account().unwrap().is_some());
        assert!(!state.session_present());

        let name = login(
            &mut state,
            LoginForm {
                email: "a@b.com".into(),
                password: "secret1".into(),
            },
        )
        .unwrap();

        assert_eq!(name, "alice123");
        assert!(state.session_present());
        assert_eq!(state.session().unwrap().email, "a@b.com");
        assert_eq!(
            state.storage.load_display_name().unwrap().as_deref(),
            Some("alice123")
        );
    }

    #[test]
    fn invalid_register_form_stores_nothing() {
        let (_dir, state) = state();

        let mut form = alice();
        form.confirm_password = "different1".into();
        let err = register(&state, form).unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert!(state.storage.load_account().unwrap().is_none());
    }

    #[test]
    fn wrong_password_creates_no_session() {
        let (_dir, mut state) = state();
        register(&state, alice()).unwrap();

        let err = login(
            &mut state,
            LoginForm {
                email: "a@b.com".into(),
                password: "wrong-password".into(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::InvalidCredentials));
        assert!(!state.session_present());
    }

    #[test]
    fn missing_account_is_indistinguishable_from_wrong_password() {
        let (_dir, mut state) = state();

        let err = login(
            &mut state,
            LoginForm {
                email: "a@b.com".into(),
                password: "secret1".into(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::InvalidCredentials));
    }

    #[test]
    fn display_name_falls_back_to_email_local_part() {
        let (_dir, mut state) = state();

        // an older record written without a username
        let mut account = alice().into_account();
        account.username = String::new();
        state.storage.save_account(&account).unwrap();

        let name = login(
            &mut state,
            LoginForm {
                email: "a@b.com".into(),
                password: "secret1".into(),
            },
        )
        .unwrap();
        assert_eq!(name, "a");
    }

    #[test]
    fn logout_clears_session_keeps_account() {
        let (_dir, mut state) = state();
        register(&state, alice()).unwrap();
        login(
            &mut state,
            LoginForm {
                email: "a@b.com".into(),
                password: "secret1".into(),
            },
        )
        .unwrap();

        logout(&mut state).unwrap();
        assert!(!state.session_present());
        assert!(state.display_name().is_none());
        assert!(state.storage.load_account().unwrap().is_some());
    }
}
