//! Performance benchmarks for schema validation.
//!
//! These benchmarks measure validation cost under various conditions:
//! - A single valid address per country
//! - Whole profiles with growing address lists
//! - Profiles where every address fails (error collection path)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use profile_form_core::schema::{validate_address, validate_profile};
use serde_json::{json, Value};

fn address(country: &str, i: usize) -> Value {
    let mut value = json!({
        "id": format!("addr-{}", i),
        "addressType": "Home",
        "country": country,
        "streetAddress": format!("{} Main St", 100 + i),
        "city": "Anytown"
    });
    let region = match country {
        "USA" => json!({ "state": "CA", "zipCode": "12345-6789" }),
        "Canada" => json!({ "province": "ON", "postalCode": "M5V 2J5" }),
        "UK" => json!({ "postcode": "SW1A 1AA" }),
        _ => json!({}),
    };
    if let (Some(target), Some(fields)) = (value.as_object_mut(), region.as_object()) {
        target.extend(fields.clone());
    }
    value
}

fn profile(address_count: usize, valid: bool) -> Value {
    let addresses: Vec<Value> = (0..address_count)
        .map(|i| {
            let mut a = address(["USA", "Canada", "UK", "Other"][i % 4], i);
            if !valid {
                a["city"] = json!("X");
            }
            a
        })
        .collect();
    json!({
        "contact": {
            "firstName": "John",
            "lastName": "Doe",
            "email": "john.doe@example.com",
            "phone": "+1 1234567890"
        },
        "addresses": addresses,
        "deliveryInstructions": "Leave at the door",
        "newsletter": false
    })
}

/// Benchmark validating one address of each country.
fn bench_validate_address(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_address");
    for country in ["USA", "Canada", "UK", "Other"] {
        let candidate = address(country, 1);
        group.bench_with_input(BenchmarkId::from_parameter(country), &candidate, |b, candidate| {
            b.iter(|| validate_address(black_box(candidate)))
        });
    }
    group.finish();
}

/// Benchmark validating whole profiles of increasing size.
fn bench_validate_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_profile");
    for size in [1, 10, 100] {
        let candidate = profile(size, true);
        group.bench_with_input(BenchmarkId::new("valid", size), &candidate, |b, candidate| {
            b.iter(|| validate_profile(black_box(candidate)))
        });

        let candidate = profile(size, false);
        group.bench_with_input(BenchmarkId::new("invalid", size), &candidate, |b, candidate| {
            b.iter(|| validate_profile(black_box(candidate)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_validate_address, bench_validate_profile);
criterion_main!(benches);
