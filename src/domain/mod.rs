// Domain layer: catalog and cart models plus the ports the adapters implement.

pub mod model;
pub mod ports;
