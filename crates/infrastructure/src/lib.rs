//! kube-extdns infrastructure layer
pub mod dns;
pub mod registry;
