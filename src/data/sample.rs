//! Synthetic dataset used when no dataset file is available. The generator
//! takes the RNG as an argument so a seeded run reproduces the same document
//! every time.

use chrono::Utc;
use rand::Rng;

use crate::data::dataset::{DatasetMetadata, HydrogenDataset};
use crate::models::demand::DemandCenter;
use crate::models::infrastructure::{
    EnvironmentalConstraint, HydrogenPlant, StorageFacility, TransportLink,
};
use crate::models::renewable::RenewableSite;

const COUNTRIES: [&str; 8] = [
    "USA",
    "Germany",
    "China",
    "Japan",
    "Australia",
    "Brazil",
    "India",
    "Saudi Arabia",
];

const REGIONS: [&str; 6] = [
    "North America",
    "Europe",
    "Asia",
    "South America",
    "Oceania",
    "Middle East",
];

fn pick<'a>(rng: &mut impl Rng, values: &[&'a str]) -> &'a str {
    values[rng.gen_range(0..values.len())]
}

// US entries cluster in the continental band, everything else spreads over
// the inhabited latitudes.
fn coordinates_for(rng: &mut impl Rng, country: &str) -> (f64, f64) {
    if country == "USA" {
        (rng.gen_range(25.0..50.0), rng.gen_range(-125.0..-65.0))
    } else {
        (rng.gen_range(-40.0..60.0), rng.gen_range(-20.0..150.0))
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Build a complete synthetic dataset document.
pub fn generate_sample_dataset(rng: &mut impl Rng) -> HydrogenDataset {
    let mut dataset = HydrogenDataset {
        metadata: DatasetMetadata {
            created_date: Utc::now().to_rfc3339(),
            version: "1.0".to_string(),
            description: "Sample Realistic Global Green Hydrogen Infrastructure Data".to_string(),
            coverage: "Worldwide".to_string(),
        },
        ..Default::default()
    };

    for i in 0..60 {
        let country = pick(rng, &COUNTRIES);
        let (lat, lon) = coordinates_for(rng, country);
        dataset.renewable_energy.push(RenewableSite {
            id: format!("re_{:03}", i + 1),
            name: format!("{} Solar Farm {}", country, i + 1),
            category: match i % 3 {
                0 => "solar",
                1 => "wind",
                _ => "hydro",
            }
            .to_string(),
            latitude: lat,
            longitude: lon,
            country: country.to_string(),
            region: pick(rng, &REGIONS).to_string(),
            capacity_mw: round_to(rng.gen_range(50.0..1000.0), 2),
            capacity_factor: round_to(rng.gen_range(0.15..0.40), 3),
        });
    }

    for i in 0..55 {
        let country = pick(rng, &COUNTRIES);
        let (lat, lon) = coordinates_for(rng, country);
        dataset.hydrogen_production.push(HydrogenPlant {
            id: format!("hp_{:03}", i + 1),
            name: format!("{} H2 Plant {}", country, i + 1),
            technology: if i % 2 == 0 {
                "electrolysis"
            } else {
                "steam_methane_reforming"
            }
            .to_string(),
            latitude: lat,
            longitude: lon,
            country: country.to_string(),
            region: pick(rng, &REGIONS).to_string(),
            capacity_tpd: round_to(rng.gen_range(10.0..500.0), 2),
            status: pick(rng, &["operational", "under_construction", "planned"]).to_string(),
        });
    }

    for i in 0..52 {
        let country = pick(rng, &COUNTRIES);
        let (lat, lon) = coordinates_for(rng, country);
        dataset.storage_facilities.push(StorageFacility {
            id: format!("st_{:03}", i + 1),
            name: format!("{} Storage Hub {}", country, i + 1),
            kind: if i % 2 == 0 {
                "underground_salt_cavern"
            } else {
                "above_ground_tank"
            }
            .to_string(),
            latitude: lat,
            longitude: lon,
            country: country.to_string(),
            region: pick(rng, &REGIONS).to_string(),
            capacity_tons: round_to(rng.gen_range(1000.0..50_000.0), 2),
            status: pick(rng, &["operational", "under_construction", "planned"]).to_string(),
        });
    }

    for i in 0..58 {
        let country = pick(rng, &COUNTRIES);
        let (lat, lon) = coordinates_for(rng, country);
        dataset.demand_centers.push(DemandCenter {
            id: format!("dc_{:03}", i + 1),
            name: format!("{} Industrial Center {}", country, i + 1),
            sector: match i % 4 {
                0 => "steel",
                1 => "chemical",
                2 => "refining",
                _ => "transport",
            }
            .to_string(),
            latitude: lat,
            longitude: lon,
            country: country.to_string(),
            region: pick(rng, &REGIONS).to_string(),
            annual_demand_tons: round_to(rng.gen_range(1000.0..20_000.0), 2),
        });
    }

    for i in 0..62 {
        let country = pick(rng, &COUNTRIES);
        let (start_lat, start_lon) = coordinates_for(rng, country);
        let distance = rng.gen_range(100.0..1000.0);
        let angle = rng.gen_range(0.0..2.0 * std::f64::consts::PI);
        let end_lat = start_lat + (distance / 111.0) * angle.cos();
        let end_lon =
            start_lon + (distance / 111.0) * angle.sin() / start_lat.to_radians().cos();

        dataset.transport_infrastructure.push(TransportLink {
            id: format!("tr_{:03}", i + 1),
            name: format!("{} Pipeline {}", country, i + 1),
            mode: if i % 2 == 0 { "pipeline" } else { "truck" }.to_string(),
            start_latitude: round_to(start_lat, 6),
            start_longitude: round_to(start_lon, 6),
            end_latitude: round_to(end_lat, 6),
            end_longitude: round_to(end_lon, 6),
            country: country.to_string(),
            region: pick(rng, &REGIONS).to_string(),
            distance_km: round_to(distance, 2),
            capacity_tpd: round_to(rng.gen_range(50.0..1000.0), 2),
        });
    }

    for i in 0..51 {
        let country = pick(rng, &COUNTRIES);
        let (lat, lon) = coordinates_for(rng, country);
        dataset.environmental_constraints.push(EnvironmentalConstraint {
            id: format!("ec_{:03}", i + 1),
            name: format!("{} Protected Area {}", country, i + 1),
            kind: if i % 2 == 0 {
                "national_park"
            } else {
                "wildlife_reserve"
            }
            .to_string(),
            latitude: round_to(lat, 6),
            longitude: round_to(lon, 6),
            country: country.to_string(),
            region: pick(rng, &REGIONS).to_string(),
            area_hectares: round_to(rng.gen_range(1000.0..50_000.0), 2),
            restriction_level: pick(rng, &["light", "moderate", "strict"]).to_string(),
        });
    }

    dataset
}
