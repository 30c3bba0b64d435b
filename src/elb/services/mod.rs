//! Discovery services for classic load balancers.

mod discovery;
mod load_balancer;

pub use discovery::{
    ELB_RESOURCE_TYPE, ElbLoadBalancerLister, discover_load_balancers, install,
    install_with_config,
};
pub use load_balancer::ElbLoadBalancer;
