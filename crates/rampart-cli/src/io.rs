// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use zeroize::Zeroizing;

pub const OUTPUT_MODE: u32 = 0o600;

pub fn read_input(path: &Path) -> Result<Zeroizing<Vec<u8>>> {
    let data = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    Ok(Zeroizing::new(data))
}

/// Writes `data` next to `path` and renames it into place.
pub fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    write_atomic(path, data).with_context(|| format!("write {}", path.display()))
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)?;
    set_mode_if_unix(tmp.as_file(), OUTPUT_MODE)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;

    Ok(())
}

#[cfg(unix)]
fn set_mode_if_unix(file: &fs::File, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(mode))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_mode_if_unix(_file: &fs::File, _mode: u32) -> Result<()> {
    Ok(())
}
