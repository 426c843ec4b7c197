//! Generated ornament dataset, partitioned by kind

mod record;
mod group;

pub use record::InstanceRecord;
pub use group::{TypeGroup, Population};
