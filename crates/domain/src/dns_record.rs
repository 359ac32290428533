pub mod record;
pub mod record_type;
pub mod txt_data;

pub use record::{Record, RecordData};
pub use record_type::RecordType;
pub use txt_data::TxtData;
