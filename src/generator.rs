//! Random device payloads for exercising the objects API.
//!
//! The vocabulary tables mirror what the public deployment actually stores, so
//! generated records are indistinguishable from hand-written fixtures.

use chrono::Datelike;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{json, Value as JsonValue};

use crate::ApiObject;

pub const CPU_BRANDS: [&str; 6] = [
    "Intel Core i5",
    "Intel Core i7",
    "Intel Core i9",
    "AMD Ryzen 5",
    "AMD Ryzen 7",
    "AMD Ryzen 9",
];

pub const CPU_GENERATIONS: [&str; 3] = ["11th Gen", "12th Gen", "13th Gen"];

pub const STORAGE_SIZES: [&str; 5] = ["256 GB", "512 GB", "1 TB", "2 TB", "4 TB"];

pub const DEVICE_BRANDS: [&str; 5] = ["Apple", "Dell", "HP", "Lenovo", "ASUS"];

pub const DEVICE_SERIES: [&str; 5] = ["MacBook Pro", "XPS", "Spectre", "ThinkPad", "ZenBook"];

pub const SCREEN_SIZES: [&str; 5] = ["13", "14", "15", "16", "17"];

/// Optional fixed values layered over the random defaults.
#[derive(Clone, Debug, Default)]
pub struct DeviceOverrides {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub price: Option<f64>,
    pub cpu_model: Option<String>,
    pub hard_disk_size: Option<String>,
}

fn pick<'a>(table: &'a [&'a str]) -> &'a str {
    table
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(table[0])
}

pub fn random_int(min: i32, max: i32) -> i32 {
    rand::thread_rng().gen_range(min..=max)
}

/// Random price rounded to two decimals.
pub fn random_price(min: f64, max: f64) -> f64 {
    let raw: f64 = rand::thread_rng().gen_range(min..max);
    (raw * 100.0).round() / 100.0
}

pub fn random_cpu_model() -> String {
    format!("{} {}", pick(&CPU_GENERATIONS), pick(&CPU_BRANDS))
}

pub fn random_storage() -> String {
    pick(&STORAGE_SIZES).to_owned()
}

pub fn random_device_name() -> String {
    format!(
        "{} {} {}",
        pick(&DEVICE_BRANDS),
        pick(&DEVICE_SERIES),
        pick(&SCREEN_SIZES)
    )
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Builds a submit-ready object: random device values with overrides applied.
///
/// The year defaults to within the last three years so records look current.
pub fn device_data(overrides: &DeviceOverrides) -> ApiObject {
    let year_now = current_year();
    let data = json!({
        "year": overrides.year.unwrap_or_else(|| random_int(year_now - 3, year_now)),
        "price": overrides.price.unwrap_or_else(|| random_price(1_000.0, 3_000.0)),
        "CPU model": overrides
            .cpu_model
            .clone()
            .unwrap_or_else(random_cpu_model),
        "Hard disk size": overrides
            .hard_disk_size
            .clone()
            .unwrap_or_else(random_storage),
    });

    ApiObject {
        id: None,
        name: overrides.name.clone().unwrap_or_else(random_device_name),
        data: Some(data),
    }
}

/// A batch of fully random devices.
pub fn multiple_devices(count: usize) -> Vec<ApiObject> {
    (0..count)
        .map(|_| device_data(&DeviceOverrides::default()))
        .collect()
}

/// Derives an update payload from an existing record: same attributes with the
/// name marked "(Updated)", a new price, a new disk size, and this year.
pub fn updated_data(original: &ApiObject) -> ApiObject {
    let mut data = match &original.data {
        Some(JsonValue::Object(map)) => map.clone(),
        _ => serde_json::Map::new(),
    };
    data.insert("price".to_owned(), json!(random_price(1_000.0, 3_000.0)));
    data.insert("Hard disk size".to_owned(), json!(random_storage()));
    data.insert("year".to_owned(), json!(current_year()));

    ApiObject {
        id: None,
        name: format!("{} (Updated)", original.name),
        data: Some(JsonValue::Object(data)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::DeviceData;

    #[test]
    fn generated_device_decodes_into_typed_data() {
        let object = device_data(&DeviceOverrides::default());
        let data: DeviceData =
            serde_json::from_value(object.data.expect("data must be set"))
                .expect("generated data must match the device shape");

        let year_now = current_year();
        assert!(data.year >= year_now - 3 && data.year <= year_now);
        assert!(data.price >= 1_000.0 && data.price <= 3_000.0);
        assert!(STORAGE_SIZES.contains(&data.hard_disk_size.as_str()));
        assert!(CPU_GENERATIONS
            .iter()
            .any(|gen| data.cpu_model.starts_with(gen)));
    }

    #[test]
    fn overrides_take_precedence() {
        let object = device_data(&DeviceOverrides {
            name: Some("Apple MacBook Pro 16".to_owned()),
            price: Some(2_049.99),
            hard_disk_size: Some("2 TB".to_owned()),
            ..DeviceOverrides::default()
        });

        assert_eq!(object.name, "Apple MacBook Pro 16");
        let data = object.data.expect("data must be set");
        assert_eq!(data["price"], json!(2_049.99));
        assert_eq!(data["Hard disk size"], json!("2 TB"));
    }

    #[test]
    fn updated_data_marks_name_and_keeps_other_fields() {
        let original = device_data(&DeviceOverrides {
            cpu_model: Some("12th Gen AMD Ryzen 7".to_owned()),
            ..DeviceOverrides::default()
        });
        let updated = updated_data(&original);

        assert_eq!(updated.name, format!("{} (Updated)", original.name));
        let data = updated.data.expect("data must be set");
        assert_eq!(data["CPU model"], json!("12th Gen AMD Ryzen 7"));
        assert_eq!(data["year"], json!(current_year()));
    }

    #[test]
    fn multiple_devices_generates_requested_count() {
        assert_eq!(multiple_devices(4).len(), 4);
        assert!(multiple_devices(0).is_empty());
    }

    #[test]
    fn random_price_is_rounded_and_in_range() {
        for _ in 0..100 {
            let price = random_price(1_500.0, 3_000.0);
            assert!(price >= 1_500.0 && price < 3_000.01);
            assert_eq!((price * 100.0).round() / 100.0, price);
        }
    }
}
