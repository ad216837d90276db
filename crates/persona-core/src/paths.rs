use crate::error::{PersonaError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const PERSONA_DIR: &str = ".persona";
pub const PROFILES_DIR: &str = ".persona/profiles";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn persona_dir(root: &Path) -> PathBuf {
    root.join(PERSONA_DIR)
}

pub fn profiles_dir(root: &Path) -> PathBuf {
    root.join(PROFILES_DIR)
}

pub fn profile_path(root: &Path, user_id: &str) -> PathBuf {
    profiles_dir(root).join(format!("{user_id}.yaml"))
}

// ---------------------------------------------------------------------------
// User id validation
// ---------------------------------------------------------------------------

static USER_ID_RE: OnceLock<Regex> = OnceLock::new();

fn user_id_re() -> &'static Regex {
    USER_ID_RE.get_or_init(|| Regex::new(r"^[a-z0-9]([a-z0-9-]{0,62}[a-z0-9])?$").unwrap())
}

/// User ids become file names, so they are validated here at the
/// persistence boundary: lowercase alphanumeric with hyphens, 1-64 chars,
/// no leading/trailing hyphen.
pub fn validate_user_id(user_id: &str) -> Result<()> {
    if user_id_re().is_match(user_id) {
        Ok(())
    } else {
        Err(PersonaError::InvalidUserId(user_id.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
