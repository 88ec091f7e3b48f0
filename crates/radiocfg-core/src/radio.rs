//! Radio configuration sub-module factory
//!
//! Builds the argument bundle the radio configuration code generator is
//! instantiated with: the selected PHY's export names merged with the
//! board's PHY selection arguments, the mapped transmit power and the stack
//! overrides for Sub-1 GHz projects.
//!
//! The radio configuration module reads its arguments in order, so the
//! merged bundle always starts with `freqBand`, then the PHY selection key,
//! then `codeExportConfig` led by `symGenMethod` and the command list.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::power::map_power_selection;
use crate::record::ConfigRecord;
use crate::tables::{DomainTables, PhyDescriptor, TableError};
use crate::types::{FrequencyBand, PhyType};

pub const STACK_OVERRIDE_HEADER: &str = "ti/ti154stack/common/boards/ti_154stack_overrides.h";
pub const STACK_OVERRIDE_MACRO: &str = "TI_154_STACK_OVERRIDES";

const CODE_EXPORT_CONFIG: &str = "codeExportConfig";
/// At most one of these selects the PHY, checked in this order
const PHY_TYPE_KEYS: [&str; 3] = ["phyType868", "phyType433", "phyType"];
const CMD_LIST_KEYS: [&str; 2] = ["cmdList_prop", "cmdList_ieee_15_4"];

/// A dependent radio configuration module instance
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioConfigModule {
    pub name: &'static str,
    pub display_name: &'static str,
    pub module_name: &'static str,
    pub description: &'static str,
    pub read_only: bool,
    pub hidden: bool,
    pub collapsed: bool,
    pub group: &'static str,
    pub args: Value,
}

/// Generated symbol suffix for each PHY
fn symbol_suffix(phy: PhyType) -> &'static str {
    match phy {
        PhyType::Slr5Kbps => "slr5kbps2gfsk",
        PhyType::Gfsk50Kbps => "2gfsk50kbps154g",
        PhyType::Gfsk200Kbps => "2gfsk200kbps154g",
        PhyType::Ieee250Kbps => "ieee154",
    }
}

/// Radio arguments shared by every board for a PHY
pub fn phy_radio_args(phy: PhyType) -> Value {
    let s = symbol_suffix(phy);
    if phy.is_ieee() {
        json!({
            "phyType": "ieee154",
            "codeExportConfig": {
                "symGenMethod": "Custom",
                "useConst": true,
                "rfMode": format!("RF_prop_{s}"),
                "txPower": format!("txPowerTable_{s}"),
                "txPowerSize": format!("TX_POWER_TABLE_SIZE_{s}"),
                "overrides": format!("pOverrides_{s}"),
                "cmdList_ieee_15_4": ["cmdFs", "cmdIeeeTx", "cmdIeeeRx", "cmdIeeeCsma", "cmdIeeeRxAck"],
                "cmdFs": format!("RF_cmdFs_{s}"),
                "cmdIeeeTx": format!("RF_cmdIeeeTx_{s}"),
                "cmdIeeeRx": format!("RF_cmdIeeeRx_{s}"),
                "cmdIeeeCsma": format!("RF_cmdIeeeCsma_{s}"),
                "cmdIeeeRxAck": format!("RF_cmdIeeeRxAck_{s}"),
                "useMulti": false
            }
        })
    } else {
        json!({
            "codeExportConfig": {
                "symGenMethod": "Custom",
                "useConst": true,
                "rfMode": format!("RF_prop_{s}"),
                "txPower": format!("txPowerTable_{s}"),
                "txPowerSize": format!("TX_POWER_TABLE_SIZE_{s}"),
                "overrides": format!("pOverrides_{s}"),
                "cmdList_prop": ["cmdFs", "cmdPropTxAdv", "cmdPropRxAdv", "cmdPropCs"],
                "cmdFs": format!("RF_cmdFs_{s}"),
                "cmdPropTxAdv": format!("RF_cmdPropTxAdv_{s}"),
                "cmdPropRxAdv": format!("RF_cmdPropRxAdv_{s}"),
                "cmdPropCs": format!("RF_cmdPropCs_{s}"),
                "useMulti": false
            }
        })
    }
}

/// Deep merge: objects recurse, arrays concatenate, anything else is replaced
fn merge_into(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        let merged = match (target.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_into(existing, incoming);
                true
            }
            (Some(Value::Array(existing)), Value::Array(incoming)) => {
                existing.extend(incoming.iter().cloned());
                true
            }
            _ => false,
        };
        if !merged {
            target.insert(key.clone(), value.clone());
        }
    }
}

fn export_config(args: &Value) -> Option<&Map<String, Value>> {
    args.get(CODE_EXPORT_CONFIG).and_then(Value::as_object)
}

/// Merge two radio argument objects, later sources winning
///
/// Keys the radio configuration module reads positionally are placed first
/// regardless of where the sources define them.
pub fn merge_rf_settings(first: &Value, second: &Value) -> Value {
    let sources = [first, second];
    let has = |key: &str| sources.iter().any(|s| s.get(key).is_some());
    let export_has = |key: &str| {
        sources
            .iter()
            .any(|s| export_config(s).is_some_and(|e| e.contains_key(key)))
    };

    // Placeholders pin the key order and are overwritten by the merge
    let mut merged = Map::new();
    if has("freqBand") {
        merged.insert("freqBand".to_string(), Value::Null);
    }
    if let Some(key) = PHY_TYPE_KEYS.into_iter().find(|key| has(key)) {
        merged.insert(key.to_string(), Value::Null);
    }
    let mut export = Map::new();
    if export_has("symGenMethod") {
        export.insert("symGenMethod".to_string(), Value::Null);
    }
    if let Some(list) = CMD_LIST_KEYS.into_iter().find(|list| export_has(list)) {
        export.insert(list.to_string(), Value::Array(Vec::new()));
    }
    merged.insert(CODE_EXPORT_CONFIG.to_string(), Value::Object(export));

    for source in sources {
        if let Some(map) = source.as_object() {
            merge_into(&mut merged, map);
        }
    }
    Value::Object(merged)
}

/// Instantiate the radio configuration module for the current selections
pub fn radio_config_module(
    record: &ConfigRecord,
    tables: &DomainTables,
) -> Result<RadioConfigModule, TableError> {
    let descriptor: PhyDescriptor = tables.phy_descriptor(record.phy_type).ok_or(
        TableError::UnmappedPhy {
            board: tables.board(),
            band: record.freq_band,
            frequency: record.freq_sub1,
            phy: record.phy_type,
        },
    )?;

    let board_args = Value::Object(tables.phy_args(record.phy_type)?.clone());
    let mut args = merge_rf_settings(&phy_radio_args(record.phy_type), &board_args);
    let power = map_power_selection(record, tables);

    if let Some(export) = args.get_mut(CODE_EXPORT_CONFIG) {
        // Only the active PA table is generated
        export["paExport"] = json!("active");
        if record.freq_band == FrequencyBand::Sub1Ghz {
            export["stackOverride"] = json!(STACK_OVERRIDE_HEADER);
            export["stackOverrideMacro"] = json!(STACK_OVERRIDE_MACRO);
        }
    }
    args[power.arg.as_str()] = json!(power.level);
    if let Some(high_pa) = power.high_pa {
        args["highPA"] = json!(high_pa);
    }

    Ok(RadioConfigModule {
        name: "radioConfig",
        display_name: descriptor.display_name,
        module_name: descriptor.module_name,
        description: "Radio configuration",
        read_only: true,
        hidden: true,
        collapsed: true,
        group: "radioSettings",
        args,
    })
}
