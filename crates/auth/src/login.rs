//! Authentication, registration and the interactive login prompt.

use thiserror::Error;

use shopfront_core::Console;

use crate::password::{check_password, PasswordIssue};
use crate::store::{StoreError, UserStore};
use crate::user::{LoginInfo, UserRecord};

pub const LOGIN_OK: &str = "Successfully logged in";
pub const LOGIN_FAILED: &str = "Either username or password were incorrect";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("weak password: {0}")]
    WeakPassword(#[from] PasswordIssue),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Match `username` and `password` against the store.
pub fn authenticate(
    store: &impl UserStore,
    username: &str,
    password: &str,
) -> AuthResult<Option<LoginInfo>> {
    let info = store
        .find(username)?
        .filter(|record| record.password == password)
        .map(|record| record.login_info());
    Ok(info)
}

/// Create a new account with an empty wallet.
pub fn register(store: &impl UserStore, username: &str, password: &str) -> AuthResult<LoginInfo> {
    if store.find(username)?.is_some() {
        return Err(AuthError::UsernameTaken(username.to_string()));
    }
    check_password(password)?;

    let record = UserRecord::new(username, password);
    let info = record.login_info();
    store.insert(record).map_err(|e| match e {
        StoreError::DuplicateUser(name) => AuthError::UsernameTaken(name),
        other => AuthError::Store(other),
    })?;
    tracing::info!(username, "user registered");
    Ok(info)
}

/// Prompt for credentials, offering to create an account for unknown names.
///
/// Only store failures are errors. Wrong credentials, a declined offer and a
/// refused password all print [`LOGIN_FAILED`] and yield `None`.
pub fn login(console: &mut impl Console, store: &impl UserStore) -> AuthResult<Option<LoginInfo>> {
    let username = console.ask("Enter your username:");
    let password = console.ask("Enter your password:");

    if store.find(&username)?.is_some() {
        if let Some(info) = authenticate(store, &username, &password)? {
            console.say(LOGIN_OK);
            return Ok(Some(info));
        }
        tracing::debug!(username = %username, "wrong password");
        console.say(LOGIN_FAILED);
        return Ok(None);
    }

    let offer = format!("Do you want to create a new user with the username \"{username}\"?[Yes/No]");
    if console.ask(&offer) == "Yes" {
        let new_password = console.ask("Enter the password you want to use:");
        match register(store, &username, &new_password) {
            Ok(info) => {
                console.say(LOGIN_OK);
                return Ok(Some(info));
            }
            Err(AuthError::WeakPassword(issue)) => {
                tracing::debug!(username = %username, %issue, "registration refused");
            }
            Err(e) => return Err(e),
        }
    }

    console.say(LOGIN_FAILED);
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryUserStore;
    use shopfront_core::{Money, ScriptedConsole};

    fn store() -> InMemoryUserStore {
        InMemoryUserStore::with_records(vec![
            UserRecord::new("Ramanathan", "Notaproblem23*").with_wallet(Money::from_major(100)),
        ])
    }

    fn ramanathan() -> LoginInfo {
        LoginInfo {
            username: "Ramanathan".into(),
            wallet: Money::from_major(100),
        }
    }

    #[test]
    fn authenticate_matches_username_and_password() {
        let store = store();
        assert_eq!(authenticate(&store, "Ramanathan", "Notaproblem23*").unwrap(), Some(ramanathan()));
        assert_eq!(authenticate(&store, "Ramanathan", "wrongpassword").unwrap(), None);
        assert_eq!(authenticate(&store, "Nobody", "Notaproblem23*").unwrap(), None);
    }

    #[test]
    fn register_appends_an_empty_wallet() {
        let store = store();
        let info = register(&store, "NewUser", "CorrectPassword!").unwrap();
        assert_eq!(info.wallet, Money::ZERO);
        assert_eq!(store.load_all().unwrap().len(), 2);
        assert_eq!(
            authenticate(&store, "NewUser", "CorrectPassword!").unwrap(),
            Some(info)
        );
    }

    #[test]
    fn register_refuses_taken_names_and_weak_passwords() {
        let store = store();
        assert!(matches!(
            register(&store, "Ramanathan", "CorrectPassword!"),
            Err(AuthError::UsernameTaken(_))
        ));
        assert!(matches!(
            register(&store, "NewUser", "Cool1234"),
            Err(AuthError::WeakPassword(PasswordIssue::NoSpecial))
        ));
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn login_succeeds() {
        let store = store();
        let mut console = ScriptedConsole::new(["Ramanathan", "Notaproblem23*"]);
        assert_eq!(login(&mut console, &store).unwrap(), Some(ramanathan()));
        assert_eq!(console.output(), "Successfully logged in\n");
    }

    #[test]
    fn login_with_wrong_password_fails() {
        let store = store();
        let mut console = ScriptedConsole::new(["Ramanathan", "wrongpassword"]);
        assert_eq!(login(&mut console, &store).unwrap(), None);
        assert_eq!(console.output(), "Either username or password were incorrect\n");
        // No account offer for a known name.
        assert_eq!(console.prompts().len(), 2);
    }

    #[test]
    fn unknown_user_can_decline_registration() {
        let store = store();
        let mut console = ScriptedConsole::new(["NewUser", "whatever", "No"]);
        assert_eq!(login(&mut console, &store).unwrap(), None);
        assert_eq!(
            console.prompts()[2],
            "Do you want to create a new user with the username \"NewUser\"?[Yes/No]"
        );
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn only_an_exact_yes_registers() {
        let store = store();
        let mut console = ScriptedConsole::new(["NewUser", "whatever", "yes", "CorrectPassword!"]);
        assert_eq!(login(&mut console, &store).unwrap(), None);
        assert_eq!(console.remaining_answers(), 1);
        assert!(store.find("NewUser").unwrap().is_none());
    }

    #[test]
    fn unknown_user_registers_with_a_strong_password() {
        let store = store();
        let mut console = ScriptedConsole::new(["NewUser", "whatever", "Yes", "Cool123!"]);
        let info = login(&mut console, &store).unwrap().unwrap();
        assert_eq!(info.username, "NewUser");
        assert_eq!(info.wallet, Money::ZERO);
        assert_eq!(console.output(), "Successfully logged in\n");
        assert!(store.find("NewUser").unwrap().is_some());
    }

    #[test]
    fn weak_passwords_are_refused_at_registration() {
        for weak in ["Cool12!", "cool123!", "Cool1234", "cool1234"] {
            let store = store();
            let mut console = ScriptedConsole::new(["NewUser", "whatever", "Yes", weak]);
            assert_eq!(login(&mut console, &store).unwrap(), None, "{weak}");
            assert_eq!(console.output(), "Either username or password were incorrect\n");
            assert!(store.find("NewUser").unwrap().is_none());
        }
    }
}
