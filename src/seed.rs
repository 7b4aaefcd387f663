//! Fixture generation: writes a random category, cars, and customers as JSON
//! store files so a fresh install has something to rent.

use std::path::Path;

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::models::{Car, CarCategory, Customer};

const CATEGORY_NAMES: &[&str] = &["SUV", "Sedan", "Hatch", "Pickup", "Minivan"];
const CAR_NAMES: &[&str] = &[
    "Onix", "Gol", "HB20", "Corolla", "Civic", "Kwid", "Argo", "Polo", "Compass",
];
const FIRST_NAMES: &[&str] = &[
    "Ana", "Bruno", "Carla", "Diego", "Elisa", "Felipe", "Gabriela", "Heitor",
];
const LAST_NAMES: &[&str] = &["Silva", "Santos", "Oliveira", "Souza", "Pereira", "Costa"];

/// Generates `count` cars (all available, grouped under one category) and
/// `count` customers, writing `cars.json`, `customers.json`, and
/// `carCategories.json` under `data_dir`.
pub fn run(data_dir: &Path, count: usize) -> Result<()> {
    let mut rng = rand::thread_rng();

    let mut category = CarCategory {
        id: Uuid::new_v4(),
        name: pick(&mut rng, CATEGORY_NAMES),
        car_ids: Vec::with_capacity(count),
        price: (rng.gen_range(20.0..100.0_f64) * 100.0).round() / 100.0,
    };

    let mut cars = Vec::with_capacity(count);
    let mut customers = Vec::with_capacity(count);
    for _ in 0..count {
        let car = Car {
            id: Uuid::new_v4(),
            name: pick(&mut rng, CAR_NAMES),
            available: true,
            gas_available: true,
            release_year: rng.gen_range(2015..=2025),
        };
        category.car_ids.push(car.id);
        cars.push(car);

        customers.push(Customer {
            id: Uuid::new_v4(),
            name: format!(
                "{} {}",
                pick(&mut rng, FIRST_NAMES),
                pick(&mut rng, LAST_NAMES)
            ),
            age: rng.gen_range(18..=50),
        });
    }

    std::fs::create_dir_all(data_dir)?;
    write(data_dir, "cars.json", &cars)?;
    write(data_dir, "customers.json", &customers)?;
    write(data_dir, "carCategories.json", &[category])?;

    Ok(())
}

fn pick(rng: &mut impl Rng, options: &[&str]) -> String {
    options
        .choose(rng)
        .copied()
        .unwrap_or_default()
        .to_string()
}

fn write<T: serde::Serialize>(dir: &Path, filename: &str, records: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(dir.join(filename), json)?;
    Ok(())
}
