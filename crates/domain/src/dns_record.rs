pub mod record_data;
pub mod record_set;
pub mod record_type;

pub use record_data::RecordData;
pub use record_set::RecordSet;
pub use record_type::RecordType;
