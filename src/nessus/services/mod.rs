pub mod address_range;
pub mod report_splitter;

pub use address_range::AddressRange;
