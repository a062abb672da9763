//! Settings for the `subflow` CLI.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, layering and loading in [`loader`]
//!
//! # Settings File Locations
//!
//! Every `.subflow.yml` from the working directory up to the filesystem
//! root is merged, the closest file winning. `--config <path>` replaces
//! discovery with a single file.

pub mod loader;
pub mod schema;

pub use loader::{discover_settings, load_settings, load_settings_value, merge_layer, SETTINGS_FILE};
pub use schema::{OutputMode, Settings};
