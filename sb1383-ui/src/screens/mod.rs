mod jurisdiction;
mod procurement;
mod review;

pub use jurisdiction::JurisdictionScreen;
pub use procurement::ProcurementScreen;
pub use review::ReviewScreen;
