/// Resource service and resource operation interfaces
pub mod resource;
