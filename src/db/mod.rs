mod instance;
mod registry;
mod target;

pub use instance::{DbHandle, Instance, SUPPORTED_DRIVERS};
pub use registry::{InstanceRegistry, TargetList};
pub use target::{
    DEFAULT_DRIVER, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_USER, EmbeddedPort, Target,
    split_host_port,
};
