//! Adapter implementations for the load balancer client port.

pub mod memory;
