//! Machine and part taxonomy.
//!
//! Every machine type owns a closed set of parts. Wire names (camelCase) are
//! the strings clients send in request bodies; [`MachineType::part`] is the
//! membership check that maps a wire name onto the machine's own part enum.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

macro_rules! define_part_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// All parts in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// Wire name used in request and response bodies.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }

            /// Resolve a wire name, or `None` if it is not one of this machine's parts.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $wire => Some($name::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

define_part_enum! {
    /// Parts monitored on a welding robot.
    WeldingRobotPart {
        /// Weld defect rate, percent.
        ErrorRate => "errorRate",
        /// Arm vibration velocity, mm/s.
        VibrationLevel => "vibrationLevel",
        /// Electrode tip wear, mm.
        ElectrodeWear => "electrodeWear",
        /// Shielding gas flow, L/min.
        ShieldingPressure => "shieldingPressure",
        /// Wire feed rate, m/min.
        WireFeedRate => "wireFeedRate",
        /// Arc stability, percent.
        ArcStability => "arcStability",
        /// Seam width, mm.
        SeamWidth => "seamWidth",
        /// Cooling efficiency, percent.
        CoolingEfficiency => "coolingEfficiency",
    }
}

define_part_enum! {
    /// Parts monitored on an assembly line.
    AssemblyLinePart {
        /// Alignment deviation, mm.
        AlignmentAccuracy => "alignmentAccuracy",
        /// Throughput, units/min.
        Speed => "speed",
        /// Fitting tolerance, mm.
        FittingTolerance => "fittingTolerance",
        /// Conveyor belt speed, m/s.
        BeltSpeed => "beltSpeed",
    }
}

define_part_enum! {
    /// Parts monitored on a painting station.
    PaintingStationPart {
        /// Paint flow, L/min.
        FlowRate => "flowRate",
        /// Spray pressure, bar.
        Pressure => "pressure",
        /// Color consistency, percent.
        ColorConsistency => "colorConsistency",
        /// Nozzle condition, percent.
        NozzleCondition => "nozzleCondition",
    }
}

define_part_enum! {
    /// Parts monitored on a quality control station.
    QualityControlStationPart {
        /// Camera calibration offset, px.
        CameraCalibration => "cameraCalibration",
        /// Light intensity relative to nominal, percent.
        LightIntensity => "lightIntensity",
        /// Inspection software release number.
        SoftwareVersion => "softwareVersion",
        /// Share of inspection criteria enabled, percent.
        CriteriaSettings => "criteriaSettings",
    }
}

// ---------------------------------------------------------------------------
// MachineType
// ---------------------------------------------------------------------------

/// Category of industrial machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MachineType {
    WeldingRobot,
    AssemblyLine,
    PaintingStation,
    QualityControlStation,
}

impl MachineType {
    pub const ALL: &'static [MachineType] = &[
        MachineType::WeldingRobot,
        MachineType::AssemblyLine,
        MachineType::PaintingStation,
        MachineType::QualityControlStation,
    ];

    /// Wire name used as the machine key in request bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            MachineType::WeldingRobot => "weldingRobot",
            MachineType::AssemblyLine => "assemblyLine",
            MachineType::PaintingStation => "paintingStation",
            MachineType::QualityControlStation => "qualityControlStation",
        }
    }

    /// Resolve `name` against this machine's own part set.
    pub fn part(self, name: &str) -> Option<Part> {
        match self {
            MachineType::WeldingRobot => WeldingRobotPart::from_name(name).map(Part::WeldingRobot),
            MachineType::AssemblyLine => AssemblyLinePart::from_name(name).map(Part::AssemblyLine),
            MachineType::PaintingStation => {
                PaintingStationPart::from_name(name).map(Part::PaintingStation)
            }
            MachineType::QualityControlStation => {
                QualityControlStationPart::from_name(name).map(Part::QualityControlStation)
            }
        }
    }

    /// Like [`MachineType::part`], but reports the miss as a [`CoreError`].
    pub fn parse_part(self, name: &str) -> Result<Part, CoreError> {
        self.part(name).ok_or_else(|| CoreError::UnknownPart {
            machine: self,
            part: name.to_string(),
        })
    }

    /// Every part this machine owns, in declaration order.
    pub fn parts(self) -> Vec<Part> {
        match self {
            MachineType::WeldingRobot => WeldingRobotPart::ALL
                .iter()
                .copied()
                .map(Part::WeldingRobot)
                .collect(),
            MachineType::AssemblyLine => AssemblyLinePart::ALL
                .iter()
                .copied()
                .map(Part::AssemblyLine)
                .collect(),
            MachineType::PaintingStation => PaintingStationPart::ALL
                .iter()
                .copied()
                .map(Part::PaintingStation)
                .collect(),
            MachineType::QualityControlStation => QualityControlStationPart::ALL
                .iter()
                .copied()
                .map(Part::QualityControlStation)
                .collect(),
        }
    }
}

impl fmt::Display for MachineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MachineType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MachineType::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CoreError::UnknownMachine(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Part
// ---------------------------------------------------------------------------

/// A part identifier tagged with the machine type that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    WeldingRobot(WeldingRobotPart),
    AssemblyLine(AssemblyLinePart),
    PaintingStation(PaintingStationPart),
    QualityControlStation(QualityControlStationPart),
}

impl Part {
    pub fn machine(self) -> MachineType {
        match self {
            Part::WeldingRobot(_) => MachineType::WeldingRobot,
            Part::AssemblyLine(_) => MachineType::AssemblyLine,
            Part::PaintingStation(_) => MachineType::PaintingStation,
            Part::QualityControlStation(_) => MachineType::QualityControlStation,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Part::WeldingRobot(p) => p.as_str(),
            Part::AssemblyLine(p) => p.as_str(),
            Part::PaintingStation(p) => p.as_str(),
            Part::QualityControlStation(p) => p.as_str(),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.machine(), self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn machine_type_round_trips_wire_name() {
        for machine in MachineType::ALL {
            assert_eq!(machine.as_str().parse::<MachineType>().unwrap(), *machine);
        }
    }

    #[test]
    fn unknown_machine_name_is_rejected() {
        assert_matches!(
            "machineName".parse::<MachineType>(),
            Err(CoreError::UnknownMachine(name)) if name == "machineName"
        );
    }

    #[test]
    fn machine_names_are_case_sensitive() {
        assert!("WeldingRobot".parse::<MachineType>().is_err());
    }

    #[test]
    fn part_lookup_is_scoped_to_machine() {
        assert_eq!(
            MachineType::WeldingRobot.part("errorRate"),
            Some(Part::WeldingRobot(WeldingRobotPart::ErrorRate))
        );
        // beltSpeed belongs to the assembly line only.
        assert_eq!(MachineType::WeldingRobot.part("beltSpeed"), None);
        assert_eq!(
            MachineType::AssemblyLine.part("beltSpeed"),
            Some(Part::AssemblyLine(AssemblyLinePart::BeltSpeed))
        );
    }

    #[test]
    fn empty_part_name_is_not_a_member() {
        for machine in MachineType::ALL {
            assert_eq!(machine.part(""), None);
        }
    }

    #[test]
    fn parse_part_reports_machine_and_name() {
        assert_matches!(
            MachineType::PaintingStation.parse_part("unknownPart"),
            Err(CoreError::UnknownPart { machine: MachineType::PaintingStation, part }) if part == "unknownPart"
        );
    }

    #[test]
    fn parts_belong_to_their_machine() {
        for machine in MachineType::ALL {
            let parts = machine.parts();
            assert!(!parts.is_empty());
            for part in parts {
                assert_eq!(part.machine(), *machine);
                assert_eq!(machine.part(part.as_str()), Some(part));
            }
        }
    }

    #[test]
    fn welding_robot_has_eight_parts() {
        assert_eq!(MachineType::WeldingRobot.parts().len(), 8);
    }

    #[test]
    fn part_display_is_qualified() {
        let part = Part::QualityControlStation(QualityControlStationPart::CameraCalibration);
        assert_eq!(part.to_string(), "qualityControlStation.cameraCalibration");
    }
}
