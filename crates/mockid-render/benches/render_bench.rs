// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rasterization benchmarks: compose + rasterize + PNG encode at the default
// export scale.

use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mockid_core::AppConfig;
use mockid_core::types::{JurisdictionCode, PersonRecord};
use mockid_render::{TemplateRegistry, compose, export_png, rasterize};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sample_scene() -> mockid_render::RenderedScene {
    let record = PersonRecord {
        first_name: "Ana".into(),
        last_name: "Novak".into(),
        address: "Trubarjeva 1".into(),
        city: "Ljubljana".into(),
        date_of_birth: "1990-05-15".into(),
        gender: "F".into(),
        height: "5-6".into(),
        eye_color: "BRO".into(),
        photo: None,
    };
    let code = JurisdictionCode::Si;
    let cred = mockid_synth::synthesize_at(
        &code,
        &mut StdRng::seed_from_u64(1),
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
    );
    let barcode = mockid_barcode::encode(&cred.number).unwrap();
    let registry = TemplateRegistry::builtin();
    compose(
        &registry.get(&code),
        &record,
        &cred,
        &barcode,
        None,
        &AppConfig::default(),
    )
}

fn bench_rasterize(c: &mut Criterion) {
    let scene = sample_scene();
    c.bench_function("rasterize_scale_3", |b| {
        b.iter(|| rasterize(black_box(&scene), 3.0).unwrap())
    });
    c.bench_function("export_png_scale_3", |b| {
        b.iter(|| export_png(black_box(&scene), 3.0).unwrap())
    });
}

criterion_group!(benches, bench_rasterize);
criterion_main!(benches);
