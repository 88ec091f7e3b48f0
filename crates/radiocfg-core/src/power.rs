//! Transmit power - default selection and mapping onto radio arguments
//!
//! The drop-down shows rounded levels, while the radio configuration needs
//! one of its own steps. A selection maps onto the first step at or below
//! it, preferring the high PA table when it has such a step.

use serde::Serialize;
use std::fmt;
use tracing::warn;

use crate::record::ConfigRecord;
use crate::tables::DomainTables;
use crate::types::FrequencyBand;

/// Preferred transmit power when the board offers it
pub const DEFAULT_TX_POWER: i32 = 0;

/// Default transmit power for a band: 0 dBm if offered, else the highest option
pub fn default_transmit_power(tables: &DomainTables, band: FrequencyBand) -> i32 {
    let options = tables.power_options(band);
    if options.iter().any(|o| o.level == DEFAULT_TX_POWER) {
        DEFAULT_TX_POWER
    } else {
        options.first().map(|o| o.level).unwrap_or(DEFAULT_TX_POWER)
    }
}

/// Radio configuration argument that receives the transmit power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TxPowerArg {
    #[serde(rename = "txPower")]
    TxPower,
    #[serde(rename = "txPower433")]
    TxPower433,
    #[serde(rename = "txPowerHi")]
    TxPowerHi,
    #[serde(rename = "txPower433Hi")]
    TxPower433Hi,
}

impl TxPowerArg {
    fn select(mhz433: bool, high_pa: bool) -> Self {
        match (mhz433, high_pa) {
            (false, false) => Self::TxPower,
            (true, false) => Self::TxPower433,
            (false, true) => Self::TxPowerHi,
            (true, true) => Self::TxPower433Hi,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TxPower => "txPower",
            Self::TxPower433 => "txPower433",
            Self::TxPowerHi => "txPowerHi",
            Self::TxPower433Hi => "txPower433Hi",
        }
    }

    pub fn is_high_pa(&self) -> bool {
        matches!(self, Self::TxPowerHi | Self::TxPower433Hi)
    }
}

impl fmt::Display for TxPowerArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of mapping the selected transmit power onto a radio step
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerMapping {
    pub arg: TxPowerArg,
    /// `Some` only on high PA boards
    pub high_pa: Option<bool>,
    /// Unrounded radio step in dBm
    pub level: f64,
}

/// Map the active transmit power selection onto the board's power tables
///
/// A selection below every step is clamped to the lowest standard step.
pub fn map_power_selection(record: &ConfigRecord, tables: &DomainTables) -> PowerMapping {
    let class = tables.rf_class();
    let table = tables.power_table(record.freq_band);
    let selected = f64::from(record.active_transmit_power());
    // The 433 variants only exist for the Sub-1 GHz radio
    let mhz433 = class.mhz433 && record.freq_band == FrequencyBand::Sub1Ghz;

    if let Some(level) = table.high_pa().iter().copied().find(|l| *l <= selected) {
        return PowerMapping {
            arg: TxPowerArg::select(mhz433, true),
            high_pa: Some(true),
            level,
        };
    }

    let level = match table.standard().iter().copied().find(|l| *l <= selected) {
        Some(level) => level,
        None => {
            warn!(
                board = %tables.board(),
                selected = selected,
                floor = table.floor(),
                "Transmit power below lowest radio step, clamping"
            );
            table.floor()
        }
    };

    PowerMapping {
        arg: TxPowerArg::select(mhz433, false),
        high_pa: class.high_pa.then_some(false),
        level,
    }
}
