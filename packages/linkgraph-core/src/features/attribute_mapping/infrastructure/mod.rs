// Attribute Mapping Infrastructure

pub mod mapper;

pub use mapper::{AttributeMapper, MappingReport};
