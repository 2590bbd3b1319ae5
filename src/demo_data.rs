//! Random demo records for exercising a ledger from the command line.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const BRANDS: &[&str] = &[
    "Газпром",
    "Лукойл",
    "Пятерочка",
    "Магнит",
    "ММК",
    "Лада",
    "Apple",
    "Мишлен",
    "Amazon",
    "Tesla",
    "Toyota",
    "BMW",
];

pub const COUNTRIES: &[&str] = &["Россия", "США", "Германия"];

/// Order in which the demo run prints country balances.
pub const REPORT_COUNTRIES: &[&str] = &["США", "Россия", "Германия"];

pub const PRODUCTS: &[&str] = &[
    "Масло",
    "Телефон",
    "Двигатель",
    "Доски",
    "Хлеб",
    "Мука",
    "Рельса",
    "Молоко",
    "Уголь",
    "Ложка",
    "Антенна",
    "Бумага",
];

// "Челябниск" is the spelling existing ledgers carry
pub const WAREHOUSES: &[&str] = &["Москва", "Санкт-Петербург", "Челябниск", "Краснодар"];

/// Quantities are whole hundreds in this range, zero included.
pub const MAX_HUNDREDS: i64 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRecord {
    pub brand: &'static str,
    pub country: &'static str,
    pub product: &'static str,
    pub warehouse: &'static str,
    pub quantity: i64,
}

fn pick<R: Rng + ?Sized>(rng: &mut R, vocabulary: &'static [&'static str]) -> &'static str {
    vocabulary[rng.random_range(0..vocabulary.len())]
}

pub fn random_record<R: Rng + ?Sized>(rng: &mut R) -> DemoRecord {
    DemoRecord {
        brand: pick(rng, BRANDS),
        country: pick(rng, COUNTRIES),
        product: pick(rng, PRODUCTS),
        warehouse: pick(rng, WAREHOUSES),
        quantity: rng.random_range(0..=MAX_HUNDREDS) * 100,
    }
}

pub fn random_records<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<DemoRecord> {
    (0..count).map(|_| random_record(rng)).collect()
}

/// A reproducible generator when `seed` is set, an OS-seeded one otherwise.
pub fn demo_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
