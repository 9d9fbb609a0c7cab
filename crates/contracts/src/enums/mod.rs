pub mod attachment_type;
pub mod coverage_type;
pub mod gcc_country;
pub mod language_code;
pub mod vehicle_type;

pub use attachment_type::AttachmentType;
pub use coverage_type::CoverageType;
pub use gcc_country::GccCountry;
pub use language_code::{LanguageCode, TextDirection};
pub use vehicle_type::VehicleType;
