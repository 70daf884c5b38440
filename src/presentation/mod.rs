/// Account resource models
pub mod account;
/// Polymorphic resource capability
pub mod resource;
