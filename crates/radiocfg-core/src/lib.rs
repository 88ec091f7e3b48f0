//! Radiocfg Core - Derived-settings resolver for 15.4 stack radio configuration
//!
//! This crate provides the pure resolver pipeline behind a project's radio,
//! network and power settings:
//! - Domain tables: per-board channel ranges, PHY lists and power options
//! - Visibility resolver with reset-to-default on hide
//! - Derivation cascades for band, frequency, PHY and mode changes
//! - Validator producing errors, warnings and notices per field
//! - Radio configuration module factory

pub mod board;
pub mod derive;
pub mod edit;
pub mod field;
pub mod power;
pub mod radio;
pub mod record;
pub mod rf_defaults;
pub mod tables;
pub mod types;
pub mod validate;
pub mod visibility;

pub use board::{Board, RfClass};
pub use derive::{on_field_change, on_frequency_band_change, on_freq_or_phy_type_change, on_mode_change};
pub use edit::{apply_edit, Edit, EditError};
pub use field::{Field, FieldGroup};
pub use power::{map_power_selection, PowerMapping, TxPowerArg};
pub use radio::{merge_rf_settings, phy_radio_args, radio_config_module, RadioConfigModule};
pub use record::ConfigRecord;
pub use rf_defaults::{PhyArgsEntry, PowerTableEntry, RfDefaults, RfDefaultsError};
pub use tables::{Channel, DomainTables, PhyDescriptor, PhySettings, PowerOption, PowerTable, TableError};
pub use types::{FrequencyBand, NetworkMode, ParseError, PhyType, ProjectRole, Sub1Frequency};
pub use validate::{validate, DeviceConfig, Finding, Severity, ValidationReport};
pub use visibility::{hidden_fields, is_hidden, read_only_reason, sync_all};
