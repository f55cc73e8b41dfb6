// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use anyhow::{Context, Result, bail};
use zeroize::Zeroizing;

use rampart::rand::SystemEntropySource;
use rampart::{ContainerError, IV_SIZE, NONCE_SIZE, open_cbc, open_gcm, seal_cbc, seal_gcm};

use crate::cli::{Command, FileArgs, GcmArgs};
use crate::io::{read_input, write_output};
use crate::key::KeyBytes;

/// Runs one subcommand and returns the line to print on success.
pub fn run(command: &Command) -> Result<String> {
    match command {
        Command::Encrypt(args) => encrypt(args),
        Command::Decrypt(args) => decrypt(args),
        Command::EncryptGcm(args) => encrypt_gcm(args),
        Command::DecryptGcm(args) => decrypt_gcm(args),
    }
}

fn require_key(args: &FileArgs) -> Result<&KeyBytes> {
    match args.key() {
        Some(key) => Ok(key),
        None => bail!("key required"),
    }
}

fn encrypt(args: &FileArgs) -> Result<String> {
    let key = require_key(args)?;
    let plaintext = read_input(&args.input)?;

    let container =
        seal_cbc(&plaintext, key.as_bytes(), &SystemEntropySource {}).context("encrypt")?;
    write_output(&args.output, &container)?;

    let ciphertext_len = container.len() - IV_SIZE;
    tracing::info!(
        input = %args.input.display(),
        output = %args.output.display(),
        ciphertext_len,
        "cbc encrypt complete"
    );

    Ok(format!(
        "encrypted {} -> {} ({ciphertext_len} bytes ciphertext + 16-byte IV prefix)",
        args.input.display(),
        args.output.display(),
    ))
}

fn decrypt(args: &FileArgs) -> Result<String> {
    let key = require_key(args)?;
    let container = read_input(&args.input)?;

    let plaintext = match open_cbc(&container, key.as_bytes()) {
        Err(ContainerError::ContainerTooShort(_)) => bail!("ciphertext file too short"),
        other => Zeroizing::new(other.context("decrypt")?),
    };
    write_output(&args.output, &plaintext)?;

    tracing::info!(
        input = %args.input.display(),
        output = %args.output.display(),
        "cbc decrypt complete"
    );

    Ok(format!(
        "decrypted {} -> {}",
        args.input.display(),
        args.output.display(),
    ))
}

fn encrypt_gcm(args: &GcmArgs) -> Result<String> {
    let files = &args.files;
    let key = require_key(files)?;
    let plaintext = read_input(&files.input)?;

    let container = seal_gcm(
        &plaintext,
        key.as_bytes(),
        args.aad.as_bytes(),
        &SystemEntropySource {},
    )
    .context("encrypt")?;
    write_output(&files.output, &container)?;

    let sealed_len = container.len() - NONCE_SIZE;
    tracing::info!(
        input = %files.input.display(),
        output = %files.output.display(),
        sealed_len,
        "gcm encrypt complete"
    );

    Ok(format!(
        "encrypted {} -> {} (GCM mode: {sealed_len} bytes ciphertext+tag + 12-byte nonce prefix)",
        files.input.display(),
        files.output.display(),
    ))
}

fn decrypt_gcm(args: &GcmArgs) -> Result<String> {
    let files = &args.files;
    let key = require_key(files)?;
    let container = read_input(&files.input)?;

    let plaintext = match open_gcm(&container, key.as_bytes(), args.aad.as_bytes()) {
        Err(ContainerError::ContainerTooShort(_)) => {
            bail!("ciphertext file too short (must have nonce + tag)")
        }
        other => Zeroizing::new(other.context("decrypt")?),
    };
    write_output(&files.output, &plaintext)?;

    tracing::info!(
        input = %files.input.display(),
        output = %files.output.display(),
        "gcm decrypt complete"
    );

    Ok(format!(
        "decrypted and verified {} -> {} (GCM mode)",
        files.input.display(),
        files.output.display(),
    ))
}
