//! FROST Registry
//!
//! Named, immutable enum tables. An [`EnumRegistry`] maps enum names to
//! frozen [`EnumTable`]s; entries are registered once through
//! [`EnumRegistry::create`] and only read afterwards.
//!
//! ```
//! use frost_core::{members, Value};
//! use frost_registry::{EnumRegistry, KeyMatch};
//!
//! let registry = EnumRegistry::new();
//! let colors = registry
//!     .create("Colors", &members! { "Red" => "Red", "Green" => "Green" })
//!     .unwrap();
//!
//! assert_eq!(colors.get("Red"), Ok(&Value::from("Red")));
//! assert_eq!(registry.has_value("Colors", "Green"), Ok(true));
//! assert!(matches!(registry.get_key_from_value("Colors", "Green"), Ok(KeyMatch::One(_))));
//! assert!(colors.try_insert("Blue", "Blue").is_err());
//! ```

mod builder;
mod config;
mod registry;
mod report;
mod table;

pub use builder::RegistryBuilder;
pub use config::RegistryConfig;
pub use registry::EnumRegistry;
pub use report::{MemoryReporter, Report, Reporter, TracingReporter};
pub use table::{EnumTable, KeyMatch};
