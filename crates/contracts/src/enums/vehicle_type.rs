use serde::{Deserialize, Serialize};

/// Vehicle body types offered by the vehicle step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleType {
    #[default]
    Sedan,
    Suv,
    Pickup,
    Van,
    Truck,
    Motorcycle,
    Bus,
    Other,
}

impl VehicleType {
    pub fn code(&self) -> &'static str {
        match self {
            VehicleType::Sedan => "SEDAN",
            VehicleType::Suv => "SUV",
            VehicleType::Pickup => "PICKUP",
            VehicleType::Van => "VAN",
            VehicleType::Truck => "TRUCK",
            VehicleType::Motorcycle => "MOTORCYCLE",
            VehicleType::Bus => "BUS",
            VehicleType::Other => "OTHER",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VehicleType::Sedan => "Sedan",
            VehicleType::Suv => "SUV",
            VehicleType::Pickup => "Pickup",
            VehicleType::Van => "Van",
            VehicleType::Truck => "Truck",
            VehicleType::Motorcycle => "Motorcycle",
            VehicleType::Bus => "Bus",
            VehicleType::Other => "Other",
        }
    }

    pub fn all() -> Vec<VehicleType> {
        vec![
            VehicleType::Sedan,
            VehicleType::Suv,
            VehicleType::Pickup,
            VehicleType::Van,
            VehicleType::Truck,
            VehicleType::Motorcycle,
            VehicleType::Bus,
            VehicleType::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(code.trim()))
    }
}
