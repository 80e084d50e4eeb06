use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "githappy-cli";
const KEYRING_USER: &str = "bearer-token";
const CREDENTIALS_DIR_NAME: &str = ".githappy";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// Env var consulted after the keyring.
pub const TOKEN_ENV_VAR: &str = "HAPPY_AUTH__TOKEN";

/// Returns the keyring service name.
///
/// Defaults to `"githappy-cli"`. Override via `HAPPY_KEYRING_SERVICE` env var
/// for testing (e.g., `"githappy-cli-test"`) to avoid touching real credentials.
fn keyring_service() -> String {
    std::env::var("HAPPY_KEYRING_SERVICE").unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Where a loaded token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

/// Store a token in the OS keychain. Falls back to file if keyring unavailable.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if both keyring and file storage fail.
pub fn store(jwt: &str) -> Result<(), AuthError> {
    let jwt = jwt.trim();
    match keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        Ok(entry) => match entry.set_password(jwt) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                store_file_at(&credentials_path()?, jwt)
            }
        },
        Err(error) => {
            tracing::warn!(%error, "keyring unavailable; falling back to file");
            store_file_at(&credentials_path()?, jwt)
        }
    }
}

/// Load a token. Priority: keyring → `HAPPY_AUTH__TOKEN` env → file (`~/.githappy/credentials`).
#[must_use]
pub fn load() -> Option<String> {
    load_with_source().map(|(token, _)| token)
}

/// Like [`load`], also reporting which tier answered.
#[must_use]
pub fn load_with_source() -> Option<(String, TokenSource)> {
    // 1. Keyring
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        && let Ok(token) = entry.get_password()
        && !token.trim().is_empty()
    {
        return Some((token.trim().to_string(), TokenSource::Keyring));
    }

    // 2. Environment variable
    if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
        if !token.trim().is_empty() {
            return Some((token.trim().to_string(), TokenSource::Env));
        }
    }

    // 3. File fallback
    let path = credentials_path().ok()?;
    load_file_at(&path).map(|token| (token, TokenSource::File))
}

/// Delete stored credentials from keyring and file.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    // Delete from keyring; it may not exist
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        let _ = entry.delete_credential();
    }

    delete_file_at(&credentials_path()?)
}

/// Detect which tier the current token came from (for status display).
#[must_use]
pub fn detect_token_source() -> Option<TokenSource> {
    load_with_source().map(|(_, source)| source)
}

/// `~/.githappy/credentials`.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` when no home directory is available.
pub fn credentials_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(CREDENTIALS_DIR_NAME).join(CREDENTIALS_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found, cannot store credentials".into())
        })
}

// --- Private file helpers ---

fn store_file_at(path: &Path, jwt: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, jwt)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

fn load_file_at(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn delete_file_at(path: &Path) -> Result<(), AuthError> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| {
            AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}
