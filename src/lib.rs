//! Scenario lookup library surface.
//!
//! Scenario scripts name contracts and accounts symbolically ("Comptroller",
//! "vBNB", "Geoff"). The modules below turn those names into addresses and
//! typed contract handles using the registry the deployment steps populated.

pub mod accounts;
pub mod contract;
pub mod error;
pub mod lookup;
pub mod settings;
pub mod symbol_table;
pub mod telemetry;
pub mod world;

pub use error::{LookupError, Result, ScenarioError, SettingsError};
pub use world::World;
