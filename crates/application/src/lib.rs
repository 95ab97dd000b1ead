//! kube-extdns application layer: ports and the external-name use case
pub mod ports;
pub mod services;
pub mod use_cases;
