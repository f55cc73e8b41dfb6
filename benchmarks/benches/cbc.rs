// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use rampart_modes::{cbc_decrypt, cbc_encrypt};

const KEY: [u8; 16] = [0x2b; 16];
const IV: [u8; 16] = [0x00; 16];

fn benchmark_cbc_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("cbc_encrypt");

    for size in [64, 256, 1024, 4096, 16384].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
            let plaintext = vec![0u8; size];

            b.iter(|| {
                cbc_encrypt(black_box(&plaintext), black_box(&KEY), black_box(&IV))
                    .expect("encrypt failed")
            });
        });
    }
    group.finish();
}

fn benchmark_cbc_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("cbc_decrypt");

    for size in [64, 256, 1024, 4096, 16384].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
            let ciphertext = cbc_encrypt(&vec![0u8; size], &KEY, &IV).expect("encrypt failed");

            b.iter(|| {
                cbc_decrypt(black_box(&ciphertext), black_box(&KEY), black_box(&IV))
                    .expect("decrypt failed")
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_cbc_encrypt, benchmark_cbc_decrypt);
criterion_main!(benches);
