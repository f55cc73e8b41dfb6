// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};

use crate::key::{KeyBytes, parse_hex_key, parse_string_key};

#[derive(Parser, Debug)]
#[command(name = "rampart", version, about = "Encrypt and decrypt files with AES-128")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// AES-128-CBC with PKCS7 padding; output is `IV ‖ ciphertext`.
    Encrypt(FileArgs),
    /// Reverses `encrypt`.
    Decrypt(FileArgs),
    /// AES-128-GCM; output is `nonce ‖ ciphertext ‖ tag`.
    EncryptGcm(GcmArgs),
    /// Verifies and reverses `encrypt-gcm`.
    DecryptGcm(GcmArgs),
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("key_source").required(true).args(["key", "hexkey"])))]
pub struct FileArgs {
    /// Input file.
    #[arg(long = "in", value_name = "INFILE")]
    pub input: PathBuf,

    /// Output file, written with mode 0600.
    #[arg(long = "out", value_name = "OUTFILE")]
    pub output: PathBuf,

    /// Key as a 16-byte string.
    #[arg(long, value_name = "16-BYTE STRING", value_parser = parse_string_key)]
    pub key: Option<KeyBytes>,

    /// Key as 32 hex characters.
    #[arg(long, value_name = "32HEX", value_parser = parse_hex_key)]
    pub hexkey: Option<KeyBytes>,
}

impl FileArgs {
    /// Whichever of `--key` / `--hexkey` was given.
    pub fn key(&self) -> Option<&KeyBytes> {
        self.key.as_ref().or(self.hexkey.as_ref())
    }
}

#[derive(Args, Debug)]
pub struct GcmArgs {
    #[command(flatten)]
    pub files: FileArgs,

    /// Additional authenticated data.
    #[arg(long, value_name = "ADDITIONAL-DATA", default_value = "")]
    pub aad: String,
}
