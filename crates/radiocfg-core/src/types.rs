//! Closed enumerations for the user-facing radio and network selections
//!
//! String forms match the field values used in project files, so the same
//! names round-trip through serde, `Display` and `FromStr`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown {kind} '{value}'")]
    Unknown { kind: &'static str, value: String },
}

impl ParseError {
    fn unknown(kind: &'static str, value: &str) -> Self {
        Self::Unknown {
            kind,
            value: value.to_string(),
        }
    }
}

/// Radio frequency regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrequencyBand {
    #[serde(rename = "freqBandSub1")]
    Sub1Ghz,
    #[serde(rename = "freqBand24")]
    Ghz24,
}

impl FrequencyBand {
    pub const ALL: [FrequencyBand; 2] = [FrequencyBand::Sub1Ghz, FrequencyBand::Ghz24];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sub1Ghz => "freqBandSub1",
            Self::Ghz24 => "freqBand24",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Sub1Ghz => "Sub-1 GHz",
            Self::Ghz24 => "2.4 GHz",
        }
    }

    pub fn is_sub1(&self) -> bool {
        matches!(self, Self::Sub1Ghz)
    }
}

impl fmt::Display for FrequencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrequencyBand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::unknown("frequency band", s))
    }
}

/// Sub-1 GHz operating frequency (regional band plan)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sub1Frequency {
    #[serde(rename = "freq433")]
    Mhz433,
    #[serde(rename = "freq863")]
    Mhz863,
    #[serde(rename = "freq915")]
    Mhz915,
}

impl Sub1Frequency {
    pub const ALL: [Sub1Frequency; 3] = [
        Sub1Frequency::Mhz433,
        Sub1Frequency::Mhz863,
        Sub1Frequency::Mhz915,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mhz433 => "freq433",
            Self::Mhz863 => "freq863",
            Self::Mhz915 => "freq915",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Mhz433 => "433 MHz",
            Self::Mhz863 => "863 MHz",
            Self::Mhz915 => "915 MHz",
        }
    }
}

impl fmt::Display for Sub1Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sub1Frequency {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::unknown("sub-1 GHz frequency", s))
    }
}

/// PHY modulation and data rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhyType {
    /// 5 kbps, SimpleLink Long Range
    #[serde(rename = "phy5kbps")]
    Slr5Kbps,
    /// 50 kbps, 2-GFSK
    #[serde(rename = "phy50kbps")]
    Gfsk50Kbps,
    /// 200 kbps, 2-GFSK
    #[serde(rename = "phy200kbps")]
    Gfsk200Kbps,
    /// 250 kbps, IEEE 802.15.4
    #[serde(rename = "phyIEEE")]
    Ieee250Kbps,
}

impl PhyType {
    pub const ALL: [PhyType; 4] = [
        PhyType::Slr5Kbps,
        PhyType::Gfsk50Kbps,
        PhyType::Gfsk200Kbps,
        PhyType::Ieee250Kbps,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slr5Kbps => "phy5kbps",
            Self::Gfsk50Kbps => "phy50kbps",
            Self::Gfsk200Kbps => "phy200kbps",
            Self::Ieee250Kbps => "phyIEEE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Slr5Kbps => "5 kbps, SimpleLink Long Range",
            Self::Gfsk50Kbps => "50 kbps, 2-GFSK",
            Self::Gfsk200Kbps => "200 kbps, 2-GFSK",
            Self::Ieee250Kbps => "250 kbps, IEEE 802.15.4",
        }
    }

    /// Whether the PHY is only legal in the 2.4 GHz band
    pub fn is_ieee(&self) -> bool {
        matches!(self, Self::Ieee250Kbps)
    }

    /// The band this PHY belongs to
    pub fn band(&self) -> FrequencyBand {
        if self.is_ieee() {
            FrequencyBand::Ghz24
        } else {
            FrequencyBand::Sub1Ghz
        }
    }

    /// Default PHY for a band: 50 kbps on Sub-1 GHz, IEEE on 2.4 GHz
    pub fn default_for(band: FrequencyBand) -> Self {
        match band {
            FrequencyBand::Sub1Ghz => Self::Gfsk50Kbps,
            FrequencyBand::Ghz24 => Self::Ieee250Kbps,
        }
    }
}

impl fmt::Display for PhyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhyType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::unknown("phy type", s))
    }
}

/// Network operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NetworkMode {
    Beacon,
    NonBeacon,
    FrequencyHopping,
}

impl NetworkMode {
    pub const ALL: [NetworkMode; 3] = [
        NetworkMode::Beacon,
        NetworkMode::NonBeacon,
        NetworkMode::FrequencyHopping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beacon => "beacon",
            Self::NonBeacon => "nonBeacon",
            Self::FrequencyHopping => "frequencyHopping",
        }
    }
}

impl fmt::Display for NetworkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::unknown("network mode", s))
    }
}

/// Role of the project being configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectRole {
    Collector,
    Sensor,
    #[default]
    Other,
}

impl ProjectRole {
    /// Infer the role from a project name such as "collector_CC1312R1"
    pub fn from_project_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("collector") {
            Self::Collector
        } else if name.contains("sensor") {
            Self::Sensor
        } else {
            Self::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Collector => "collector",
            Self::Sensor => "sensor",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ProjectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
