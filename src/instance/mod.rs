//! Read-only problem instance.
//!
//! An [`Instance`] describes the static side of a planning problem: jig types
//! and their sizes, the jigs themselves, the racks with their initial
//! contents, the flight sequence and the production lines. It is built once,
//! never mutated, and passed by reference into every legality, heuristic and
//! goal computation.
//!
//! # Example
//!
//! ```rust
//! use jigplan::instance::Instance;
//!
//! let instance = Instance::from_json_str(r#"{
//!     "jig_types": { "typeA": { "size_loaded": 2, "size_empty": 1 } },
//!     "jigs": { "jig0001": { "type": "typeA", "empty": false } },
//!     "racks": [ { "name": "rack00", "size": 4, "jigs": ["jig0001"] } ],
//!     "flights": [ { "name": "beluga1", "incoming": [], "outgoing": [] } ],
//!     "production_lines": [ { "name": "pl0", "schedule": ["jig0001"] } ]
//! }"#).unwrap();
//!
//! let jig = instance.jig_id("jig0001").unwrap();
//! assert!(instance.is_scheduled(jig));
//! assert_eq!(instance.jig_size(jig, true).unwrap(), 2);
//! ```

mod error;
mod ids;

pub use error::InstanceError;
pub use ids::{JigId, JigTypeId, PartId, RackId};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Capacity consumed by a jig of this type, depending on its load status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JigType {
    pub name: String,
    pub size_loaded: u32,
    pub size_empty: u32,
}

/// A single jig as described by the instance (its initial status).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jig {
    pub name: String,
    pub jig_type: JigTypeId,
    pub loaded: bool,
    /// Present iff the jig starts loaded.
    pub part: Option<PartId>,
}

/// A capacity-bounded storage rack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rack {
    pub name: String,
    pub capacity: u32,
    /// Initial contents, factory side first.
    pub initial: Vec<JigId>,
}

/// One scheduled transit event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub name: String,
    pub incoming: Vec<JigId>,
    pub outgoing: Vec<JigId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionLine {
    pub name: String,
    pub schedule: Vec<JigId>,
}

/// Static, read-only description of a planning problem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Instance {
    jig_types: Vec<JigType>,
    jigs: Vec<Jig>,
    racks: Vec<Rack>,
    flights: Vec<Flight>,
    production_lines: Vec<ProductionLine>,
    /// Flattened production schedule, computed once at load time.
    schedule: BTreeSet<JigId>,
    #[serde(skip)]
    jig_names: HashMap<String, JigId>,
}

impl Instance {
    /// Parse an instance from its JSON description.
    pub fn from_json_str(json: &str) -> Result<Self, InstanceError> {
        let raw: RawInstance =
            serde_json::from_str(json).map_err(|e| InstanceError::Parse(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Build an instance from an already parsed JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, InstanceError> {
        let raw: RawInstance =
            serde_json::from_value(value).map_err(|e| InstanceError::Parse(e.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawInstance) -> Result<Self, InstanceError> {
        let mut type_ids = HashMap::new();
        let jig_types: Vec<JigType> = raw
            .jig_types
            .into_iter()
            .enumerate()
            .map(|(i, (name, t))| {
                type_ids.insert(name.clone(), JigTypeId(i));
                JigType {
                    name,
                    size_loaded: t.size_loaded,
                    size_empty: t.size_empty,
                }
            })
            .collect();

        // BTreeMap iteration keeps jig numbering stable across runs.
        let jig_names: HashMap<String, JigId> = raw
            .jigs
            .keys()
            .enumerate()
            .map(|(i, name)| (name.clone(), JigId(i)))
            .collect();

        let mut jigs = Vec::with_capacity(raw.jigs.len());
        for (i, (name, jig)) in raw.jigs.into_iter().enumerate() {
            let jig_type = *type_ids.get(&jig.jig_type).ok_or_else(|| {
                InstanceError::UnknownJigTypeName {
                    jig: name.clone(),
                    jig_type: jig.jig_type.clone(),
                }
            })?;
            let loaded = !jig.empty;
            jigs.push(Jig {
                name,
                jig_type,
                loaded,
                part: loaded.then_some(PartId(i)),
            });
        }

        let resolve = |names: Vec<String>, context: &str| -> Result<Vec<JigId>, InstanceError> {
            names
                .into_iter()
                .map(|name| {
                    jig_names
                        .get(&name)
                        .copied()
                        .ok_or_else(|| InstanceError::UnknownJigName {
                            name,
                            context: context.to_string(),
                        })
                })
                .collect()
        };

        let mut racks = Vec::with_capacity(raw.racks.len());
        for rack in raw.racks {
            let context = format!("rack '{}'", rack.name);
            racks.push(Rack {
                initial: resolve(rack.jigs, &context)?,
                name: rack.name,
                capacity: rack.size,
            });
        }

        let mut flights = Vec::with_capacity(raw.flights.len());
        for flight in raw.flights {
            let context = format!("flight '{}'", flight.name);
            flights.push(Flight {
                incoming: resolve(flight.incoming, &context)?,
                outgoing: resolve(flight.outgoing, &context)?,
                name: flight.name,
            });
        }

        let mut production_lines = Vec::with_capacity(raw.production_lines.len());
        for line in raw.production_lines {
            let context = format!("production line '{}'", line.name);
            production_lines.push(ProductionLine {
                schedule: resolve(line.schedule, &context)?,
                name: line.name,
            });
        }

        let schedule = production_lines
            .iter()
            .flat_map(|line| line.schedule.iter().copied())
            .collect();

        Ok(Self {
            jig_types,
            jigs,
            racks,
            flights,
            production_lines,
            schedule,
            jig_names,
        })
    }

    pub fn jigs(&self) -> &[Jig] {
        &self.jigs
    }

    pub fn racks(&self) -> &[Rack] {
        &self.racks
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn production_lines(&self) -> &[ProductionLine] {
        &self.production_lines
    }

    /// Iterate over all rack ids in instance order.
    pub fn rack_ids(&self) -> impl Iterator<Item = RackId> + '_ {
        (0..self.racks.len()).map(RackId)
    }

    pub fn jig_ids(&self) -> impl Iterator<Item = JigId> + '_ {
        (0..self.jigs.len()).map(JigId)
    }

    pub fn jig(&self, id: JigId) -> Result<&Jig, InstanceError> {
        self.jigs.get(id.0).ok_or(InstanceError::UnknownJig(id))
    }

    pub fn rack(&self, id: RackId) -> Result<&Rack, InstanceError> {
        self.racks.get(id.0).ok_or(InstanceError::UnknownRack(id))
    }

    pub fn jig_type(&self, id: JigTypeId) -> Result<&JigType, InstanceError> {
        self.jig_types.get(id.0).ok_or(InstanceError::UnknownJigType(id))
    }

    /// Look up a jig id by its instance name.
    pub fn jig_id(&self, name: &str) -> Option<JigId> {
        self.jig_names.get(name).copied()
    }

    pub fn rack_id(&self, name: &str) -> Option<RackId> {
        self.racks
            .iter()
            .position(|rack| rack.name == name)
            .map(RackId)
    }

    /// Capacity units a jig occupies given its load status.
    pub fn jig_size(&self, id: JigId, loaded: bool) -> Result<u32, InstanceError> {
        let jig_type = self.jig_type(self.jig(id)?.jig_type)?;
        Ok(if loaded {
            jig_type.size_loaded
        } else {
            jig_type.size_empty
        })
    }

    /// The flattened production schedule.
    pub fn schedule(&self) -> &BTreeSet<JigId> {
        &self.schedule
    }

    pub fn is_scheduled(&self, jig: JigId) -> bool {
        self.schedule.contains(&jig)
    }
}

#[derive(Deserialize)]
struct RawInstance {
    #[serde(default)]
    jig_types: BTreeMap<String, RawJigType>,
    #[serde(default)]
    jigs: BTreeMap<String, RawJig>,
    #[serde(default)]
    racks: Vec<RawRack>,
    #[serde(default)]
    flights: Vec<RawFlight>,
    #[serde(default)]
    production_lines: Vec<RawProductionLine>,
}

#[derive(Deserialize)]
struct RawJigType {
    size_loaded: u32,
    size_empty: u32,
}

#[derive(Deserialize)]
struct RawJig {
    #[serde(rename = "type")]
    jig_type: String,
    #[serde(default)]
    empty: bool,
}

#[derive(Deserialize)]
struct RawRack {
    name: String,
    size: u32,
    #[serde(default)]
    jigs: Vec<String>,
}

#[derive(Deserialize)]
struct RawFlight {
    #[serde(default)]
    name: String,
    #[serde(default)]
    incoming: Vec<String>,
    #[serde(default)]
    outgoing: Vec<String>,
}

#[derive(Deserialize)]
struct RawProductionLine {
    #[serde(default)]
    name: String,
    #[serde(default)]
    schedule: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Instance {
        Instance::from_json_value(json!({
            "jig_types": {
                "typeA": { "size_loaded": 4, "size_empty": 2 },
                "typeB": { "size_loaded": 8, "size_empty": 8 }
            },
            "jigs": {
                "jig0002": { "type": "typeB", "empty": true },
                "jig0001": { "type": "typeA", "empty": false },
                "jig0003": { "type": "typeA" }
            },
            "racks": [
                { "name": "rack00", "size": 20, "jigs": ["jig0001", "jig0002"] },
                { "name": "rack01", "size": 10, "jigs": [] }
            ],
            "flights": [
                { "name": "beluga1", "incoming": ["jig0003"], "outgoing": ["jig0002"] }
            ],
            "production_lines": [
                { "name": "pl0", "schedule": ["jig0001"] },
                { "name": "pl1", "schedule": ["jig0003"] }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn jigs_are_numbered_by_name() {
        let instance = sample();
        assert_eq!(instance.jig_id("jig0001"), Some(JigId(0)));
        assert_eq!(instance.jig_id("jig0002"), Some(JigId(1)));
        assert_eq!(instance.jig_id("jig0003"), Some(JigId(2)));
    }

    #[test]
    fn loaded_jigs_carry_their_own_part() {
        let instance = sample();
        let loaded = instance.jig(JigId(0)).unwrap();
        assert!(loaded.loaded);
        assert_eq!(loaded.part, Some(PartId(0)));

        let empty = instance.jig(JigId(1)).unwrap();
        assert!(!empty.loaded);
        assert_eq!(empty.part, None);

        // "empty" defaults to false
        assert!(instance.jig(JigId(2)).unwrap().loaded);
    }

    #[test]
    fn schedule_is_flattened_across_lines() {
        let instance = sample();
        let expected: BTreeSet<JigId> = [JigId(0), JigId(2)].into_iter().collect();
        assert_eq!(instance.schedule(), &expected);
        assert!(!instance.is_scheduled(JigId(1)));
    }

    #[test]
    fn jig_size_depends_on_load_status() {
        let instance = sample();
        assert_eq!(instance.jig_size(JigId(0), true).unwrap(), 4);
        assert_eq!(instance.jig_size(JigId(0), false).unwrap(), 2);
    }

    #[test]
    fn racks_keep_file_order_and_contents() {
        let instance = sample();
        assert_eq!(instance.rack_id("rack01"), Some(RackId(1)));
        let rack = instance.rack(RackId(0)).unwrap();
        assert_eq!(rack.capacity, 20);
        assert_eq!(rack.initial, vec![JigId(0), JigId(1)]);
    }

    #[test]
    fn unknown_ids_fail_with_lookup_error() {
        let instance = sample();
        assert_eq!(
            instance.rack(RackId(9)),
            Err(InstanceError::UnknownRack(RackId(9)))
        );
        assert_eq!(
            instance.jig_size(JigId(42), true),
            Err(InstanceError::UnknownJig(JigId(42)))
        );
    }

    #[test]
    fn unknown_jig_name_is_reported_with_context() {
        let result = Instance::from_json_value(json!({
            "jig_types": { "t": { "size_loaded": 1, "size_empty": 1 } },
            "jigs": { "a": { "type": "t" } },
            "racks": [ { "name": "r", "size": 3, "jigs": ["ghost"] } ]
        }));
        assert_eq!(
            result,
            Err(InstanceError::UnknownJigName {
                name: "ghost".to_string(),
                context: "rack 'r'".to_string(),
            })
        );
    }

    #[test]
    fn unknown_jig_type_is_reported() {
        let result = Instance::from_json_value(json!({
            "jigs": { "a": { "type": "missing" } }
        }));
        assert!(matches!(
            result,
            Err(InstanceError::UnknownJigTypeName { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = Instance::from_json_str("{ not json");
        assert!(matches!(result, Err(InstanceError::Parse(_))));
    }
}
