//! Healthcare facility directory and search.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: u32,
    pub name: String,
    /// (latitude, longitude)
    pub position: (f64, f64),
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directory {
    facilities: Vec<Facility>,
}

impl Default for Directory {
    fn default() -> Self {
        let facility = |id, name: &str, position, address: &str, phone: &str| Facility {
            id,
            name: name.to_string(),
            position,
            address: address.to_string(),
            phone: phone.to_string(),
        };

        Directory {
            facilities: vec![
                facility(
                    1,
                    "Women's Health Clinic",
                    (40.7128, -74.0060),
                    "123 Healthcare Ave, New York",
                    "(555) 123-4567",
                ),
                facility(
                    2,
                    "Family Planning Center",
                    (40.7282, -73.9942),
                    "456 Wellness St, New York",
                    "(555) 987-6543",
                ),
                facility(
                    3,
                    "Women's Wellness Center",
                    (40.7112, -74.0123),
                    "789 Medical Blvd, New York",
                    "(555) 456-7890",
                ),
            ],
        }
    }
}

impl Directory {
    /// Case-insensitive substring match on name or address, in directory order.
    pub fn search(&self, query: &str) -> Vec<&Facility> {
        let query = query.to_lowercase();
        self.facilities
            .iter()
            .filter(|f| {
                f.name.to_lowercase().contains(&query) || f.address.to_lowercase().contains(&query)
            })
            .collect()
    }
}
