/// Module containing the generic resource service and the resource operations
pub mod resource_service;

use crate::presentation::account::Account;

pub use crate::application::interfaces::resource::*;
pub use resource_service::ResourceServiceImpl;

/// Service for the accounts collection
pub type AccountServiceImpl = ResourceServiceImpl<Account>;
