use criterion::{black_box, criterion_group, criterion_main, Criterion};
use folio_animation_core::{CipherConfig, CipherReveal, RngSource, VirtualTicker};

fn bench_cipher(c: &mut Criterion) {
    c.bench_function("cipher_reveal_18_chars", |b| {
        let mut cipher = CipherReveal::new(
            CipherConfig::default(),
            VirtualTicker::new(),
            RngSource::seeded(7),
        )
        .expect("default config is valid");
        b.iter(|| {
            cipher.start(black_box("Yaswanth Kuramdasu"));
            black_box(cipher.run_to_completion(10_000));
        });
    });

    c.bench_function("cipher_single_frame_64_chars", |b| {
        let mut cipher = CipherReveal::new(
            CipherConfig {
                lock_probability: 0.0,
                frame_budget: u64::MAX / 128,
                ..CipherConfig::default()
            },
            VirtualTicker::new(),
            RngSource::seeded(7),
        )
        .expect("config is valid");
        cipher.start(&"x".repeat(64));
        b.iter(|| black_box(cipher.step()));
    });
}

criterion_group!(benches, bench_cipher);
criterion_main!(benches);
