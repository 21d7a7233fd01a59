//! Mock medical-supply inventory for demos and local development.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use dromed_inventory::InventoryRecord;

/// Category name and the products stocked under it.
pub const MEDICAL_SUPPLIES: [(&str, &[&str]); 4] = [
    (
        "Medications",
        &[
            "Amoxicillin 500mg",
            "Ibuprofen 400mg",
            "Paracetamol 500mg",
            "Aspirin 325mg",
            "Omeprazole 20mg",
            "Metformin 850mg",
            "Amlodipine 5mg",
            "Cetirizine 10mg",
            "Azithromycin 250mg",
            "Insulin Regular 100ml",
        ],
    ),
    (
        "First Aid",
        &[
            "Adhesive Bandages",
            "Gauze Rolls",
            "Medical Tape",
            "Elastic Bandages",
            "Wound Dressing",
            "Cotton Swabs",
            "Antiseptic Wipes",
            "Burn Dressing",
            "Compression Bandages",
            "Surgical Gloves",
        ],
    ),
    (
        "Emergency Supplies",
        &[
            "Emergency Saline 500ml",
            "Blood Collection Tubes",
            "IV Start Kits",
            "Syringes 5ml",
            "Oxygen Masks",
            "Emergency Blankets",
            "Cold Packs",
            "Hot Packs",
            "Splints",
            "cervical collars",
        ],
    ),
    (
        "Medical Devices",
        &[
            "Blood Glucose Meters",
            "Digital Thermometers",
            "Pulse Oximeters",
            "Blood Pressure Cuffs",
            "Nebulizer Sets",
            "Stethoscopes",
            "First Aid Kits",
            "Pregnancy Test Kits",
            "Hand Sanitizers",
        ],
    ),
];

pub const MEDICAL_SUPPLIERS: [&str; 10] = [
    "MedLine Industries",
    "Cardinal Health",
    "McKesson Medical",
    "Henry Schein Medical",
    "Owens & Minor",
    "BD Medical",
    "Baxter Healthcare",
    "Abbott Medical",
    "Johnson & Johnson Medical",
    "Boston Scientific",
];

/// Days of usage covered by the generated reorder point.
const REORDER_COVER_DAYS: u32 = 14;

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate `num_records / 4` records per category (remainder dropped).
pub fn generate_mock_inventory<R: Rng + ?Sized>(
    num_records: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<InventoryRecord> {
    let per_category = num_records / MEDICAL_SUPPLIES.len();
    let mut records = Vec::with_capacity(per_category * MEDICAL_SUPPLIES.len());

    for (category, items) in MEDICAL_SUPPLIES {
        for _ in 0..per_category {
            let product = pick(rng, items);

            let (current_stock, avg_daily_usage) = if product.contains("mg") || product.contains("ml") {
                (rng.gen_range(100..=1000), rng.gen_range(5..=50))
            } else if category == "Medical Devices" {
                (rng.gen_range(10..=100), rng.gen_range(1..=5))
            } else {
                (rng.gen_range(50..=500), rng.gen_range(3..=20))
            };

            let days_ago = rng.gen_range(1..=30);

            let unit_price = match category {
                "Medical Devices" => rng.gen_range(50.0..=500.0),
                "Medications" => rng.gen_range(5.0..=100.0),
                _ => rng.gen_range(2.0..=50.0),
            };

            let zone = pick(rng, &["A", "B", "C", "D"]);
            let slot: u32 = rng.gen_range(1..=20);

            records.push(InventoryRecord {
                product: product.to_string(),
                category: category.to_string(),
                current_stock,
                avg_daily_usage: f64::from(avg_daily_usage),
                reorder_point: avg_daily_usage * REORDER_COVER_DAYS,
                unit_price: round_cents(unit_price),
                last_restock_date: today - Duration::days(days_ago),
                supplier: pick(rng, &MEDICAL_SUPPLIERS).to_string(),
                storage_location: format!("Zone-{zone}{slot}"),
            });
        }
    }

    records
}
