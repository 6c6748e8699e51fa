// SPDX-License-Identifier: MIT
//
// Platform setup that runs before the session starts.
//
//   ensure_storage_access  Termux only. Exports land in shared storage, which
//                          needs a one-time permission grant.
//   patch_profile          Opt-in. Appends COLORTERM/TERM exports to a shell
//                          profile so future shells advertise 24-bit color.

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use hx_session::Prompt;
use hx_term::Painter;
use thiserror::Error;

/// Root of Android shared storage as seen from Termux.
pub const SHARED_STORAGE: &str = "/storage/emulated/0";

/// Lines `patch_profile` guarantees are present.
pub const PROFILE_EXPORTS: [&str; 2] = ["export COLORTERM=truecolor", "export TERM=xterm-256color"];

#[derive(Debug, Error)]
pub enum SetupError {
    #[error(
        "storage access still not granted; allow it manually from Termux > App Info > Permissions"
    )]
    StorageDenied,

    #[error("failed to run termux-setup-storage: {0}")]
    RequestFailed(#[source] io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

// ─── Storage ─────────────────────────────────────────────────────────────────

/// Make sure `storage` is reachable, asking for the permission once if not.
///
/// `request` triggers the system permission dialog. After it returns the user
/// is asked to press Enter, then `storage` is checked again.
///
/// # Errors
///
/// [`SetupError::StorageDenied`] if `storage` is still missing afterwards,
/// [`SetupError::RequestFailed`] if `request` fails.
pub fn ensure_storage_access<W, B, F>(
    painter: &mut Painter<W>,
    prompt: &mut Prompt<B>,
    storage: &Path,
    request: F,
) -> Result<(), SetupError>
where
    W: Write,
    B: BufRead,
    F: FnOnce() -> io::Result<()>,
{
    if storage.exists() {
        return Ok(());
    }

    tracing::info!(path = %storage.display(), "requesting storage permission");
    painter.line(format_args!("Requesting Termux storage permission..."))?;
    painter.line(format_args!("Please allow the permission popup."))?;
    request().map_err(SetupError::RequestFailed)?;

    painter.text("Press Enter after granting storage permission...")?;
    prompt.read_line()?;

    if storage.exists() {
        painter.line(format_args!("Storage access granted."))?;
        Ok(())
    } else {
        Err(SetupError::StorageDenied)
    }
}

/// Run `termux-setup-storage`.
///
/// # Errors
///
/// Spawn failures, or a non-zero exit status.
pub fn request_termux_storage() -> io::Result<()> {
    let status = process::Command::new("termux-setup-storage").status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("termux-setup-storage exited with {status}")))
    }
}

// ─── Shell profile ───────────────────────────────────────────────────────────

/// Append any missing [`PROFILE_EXPORTS`] lines to `profile`, creating it if
/// needed. Returns whether the file changed.
///
/// # Errors
///
/// Read or write failures on `profile`.
pub fn patch_profile(profile: &Path) -> Result<bool, SetupError> {
    let existing = match fs::read_to_string(profile) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err.into()),
    };

    let missing: Vec<&str> = PROFILE_EXPORTS
        .into_iter()
        .filter(|line| !existing.lines().any(|l| l.trim() == *line))
        .collect();
    if missing.is_empty() {
        tracing::debug!(path = %profile.display(), "profile already patched");
        return Ok(false);
    }

    let mut file = OpenOptions::new().create(true).append(true).open(profile)?;
    if !existing.is_empty() && !existing.ends_with('\n') {
        file.write_all(b"\n")?;
    }
    for line in &missing {
        writeln!(file, "{line}")?;
    }

    tracing::info!(path = %profile.display(), added = missing.len(), "patched profile");
    Ok(true)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
