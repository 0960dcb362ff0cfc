pub mod account;
pub mod instance;

pub use account::{AccountDocument, SshKey, UserProfile};
pub use instance::{EnvironmentKind, InstanceSnapshot, InstanceStatus};
