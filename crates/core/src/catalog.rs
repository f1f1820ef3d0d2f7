//! Read-only description of the taxonomy and its range table, for clients
//! that want to show what each part's bands are.

use serde::Serialize;

use crate::machine::{MachineType, Part};
use crate::ranges::{rule, Band};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineCatalogEntry {
    pub machine_type: &'static str,
    pub parts: Vec<PartCatalogEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartCatalogEntry {
    pub name: &'static str,
    pub bands: &'static [Band],
}

pub fn part_entry(part: Part) -> PartCatalogEntry {
    PartCatalogEntry {
        name: part.as_str(),
        bands: rule(part),
    }
}

pub fn machine_entry(machine: MachineType) -> MachineCatalogEntry {
    MachineCatalogEntry {
        machine_type: machine.as_str(),
        parts: machine.parts().into_iter().map(part_entry).collect(),
    }
}

/// Every machine type with its parts and bands, in declaration order.
pub fn catalog() -> Vec<MachineCatalogEntry> {
    MachineType::ALL.iter().copied().map(machine_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_every_machine() {
        let names: Vec<&str> = catalog().iter().map(|m| m.machine_type).collect();
        assert_eq!(
            names,
            [
                "weldingRobot",
                "assemblyLine",
                "paintingStation",
                "qualityControlStation"
            ]
        );
    }

    #[test]
    fn catalog_serializes_bands() {
        let entry = machine_entry(MachineType::AssemblyLine);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["machineType"], "assemblyLine");
        assert_eq!(json["parts"][3]["name"], "beltSpeed");
        assert_eq!(json["parts"][3]["bands"][0]["class"], "optimal");
        assert_eq!(json["parts"][3]["bands"][0]["low"], 2.0);
    }
}
