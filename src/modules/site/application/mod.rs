pub mod domain;
pub mod ports;
pub mod service;
pub mod site_use_cases;
