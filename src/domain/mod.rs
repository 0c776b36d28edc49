// Domain layer: catalog enumerations, request-scoped models and the ports the
// pipeline depends on.

pub mod catalog;
pub mod model;
pub mod ports;
