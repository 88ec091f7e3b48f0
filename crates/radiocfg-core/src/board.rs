//! Supported boards and their RF capability class

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::{FrequencyBand, ParseError};

/// A LaunchPad or device the stack can be configured for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Board {
    #[serde(rename = "CC1312R1_LAUNCHXL")]
    Cc1312R1,
    #[serde(rename = "CC1352R1_LAUNCHXL")]
    Cc1352R1,
    #[serde(rename = "CC1352P1_LAUNCHXL")]
    Cc1352P1,
    #[serde(rename = "CC1352P_2_LAUNCHXL")]
    Cc1352P2,
    #[serde(rename = "CC1352P_4_LAUNCHXL")]
    Cc1352P4,
    #[serde(rename = "CC26X2R1_LAUNCHXL")]
    Cc26x2R1,
    #[serde(rename = "CC2652RB_LAUNCHXL")]
    Cc2652Rb,
}

/// What the radio on a board can do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RfClass {
    /// Supports the Sub-1 GHz band
    pub sub1ghz: bool,
    /// Supports the 2.4 GHz band
    pub ghz24: bool,
    /// Sub-1 GHz radio is the 433 MHz variant
    pub mhz433: bool,
    /// Has the additional high-power amplifier
    pub high_pa: bool,
}

impl RfClass {
    pub fn supports(&self, band: FrequencyBand) -> bool {
        match band {
            FrequencyBand::Sub1Ghz => self.sub1ghz,
            FrequencyBand::Ghz24 => self.ghz24,
        }
    }
}

impl Board {
    pub const ALL: [Board; 7] = [
        Board::Cc1312R1,
        Board::Cc1352R1,
        Board::Cc1352P1,
        Board::Cc1352P2,
        Board::Cc1352P4,
        Board::Cc26x2R1,
        Board::Cc2652Rb,
    ];

    /// LaunchPad name as used in project files and vendor data
    pub fn launchpad_name(&self) -> &'static str {
        match self {
            Self::Cc1312R1 => "CC1312R1_LAUNCHXL",
            Self::Cc1352R1 => "CC1352R1_LAUNCHXL",
            Self::Cc1352P1 => "CC1352P1_LAUNCHXL",
            Self::Cc1352P2 => "CC1352P_2_LAUNCHXL",
            Self::Cc1352P4 => "CC1352P_4_LAUNCHXL",
            Self::Cc26x2R1 => "CC26X2R1_LAUNCHXL",
            Self::Cc2652Rb => "CC2652RB_LAUNCHXL",
        }
    }

    pub fn rf_class(&self) -> RfClass {
        let (sub1ghz, ghz24, mhz433, high_pa) = match self {
            Self::Cc1312R1 => (true, false, false, false),
            Self::Cc1352R1 => (true, true, false, false),
            Self::Cc1352P1 | Self::Cc1352P2 => (true, true, false, true),
            Self::Cc1352P4 => (true, true, true, true),
            Self::Cc26x2R1 | Self::Cc2652Rb => (false, true, false, false),
        };
        RfClass {
            sub1ghz,
            ghz24,
            mhz433,
            high_pa,
        }
    }

    /// Standard-PA transmit power (dBm) at which the board needs Force VDDR
    pub fn force_vddr_tx_power(&self) -> Option<f64> {
        match self {
            Self::Cc1312R1 | Self::Cc1352R1 | Self::Cc1352P1 | Self::Cc1352P2 => Some(14.0),
            Self::Cc1352P4 => Some(14.5),
            Self::Cc26x2R1 | Self::Cc2652Rb => None,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.launchpad_name())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Accepts the LaunchPad name with or without the `_LAUNCHXL` suffix
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|b| {
                let name = b.launchpad_name();
                name == wanted || name.trim_end_matches("_LAUNCHXL") == wanted
            })
            .ok_or_else(|| ParseError::Unknown {
                kind: "board",
                value: s.to_string(),
            })
    }
}
