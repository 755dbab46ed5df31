//! Zoning variable registry and unit-system name resolution.

/// Registry entry excluded from output variable columns: the zone itself is
/// represented by the key columns.
pub const ZONE_VARIABLE: &str = "zone";

/// Unit system for emitted variable names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Resolves a canonical (metric) variable name under this unit system.
    ///
    /// Imperial naming is literal substring substitution, preserved exactly
    /// from the original spec-file convention. Sharp edge, kept for
    /// compatibility: any occurrence of `Hectares` or `Meters` is rewritten,
    /// even mid-name.
    pub fn resolve(&self, name: &str) -> String {
        match self {
            UnitSystem::Metric => name.to_string(),
            UnitSystem::Imperial => name.replace("Hectares", "Acres").replace("Meters", "Feet"),
        }
    }
}

/// Ordered registry of canonical variable names, always containing `zone`.
#[derive(Debug, Clone)]
pub struct VariableRegistry {
    names: Vec<String>,
}

impl VariableRegistry {
    /// The built-in zoning variables, in canonical metric form.
    pub fn builtin() -> Self {
        Self::new(
            [
                ZONE_VARIABLE,
                "maxHeightMeters",
                "maxStories",
                "minLotSizeHectares",
                "minLotSizePerUnitHectares",
                "maxUnitsPerHectare",
                "maxFar",
                "maxLotCoveragePercent",
                "minFrontSetbackMeters",
                "minSideSetbackMeters",
                "minRearSetbackMeters",
                "minParkingPerUnit",
            ]
            .iter()
            .map(|n| n.to_string())
            .collect(),
        )
    }

    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// The ordered variable columns of one spec-table block.
#[derive(Debug, Clone)]
pub struct VariableSchema {
    names: Vec<String>,
}

impl VariableSchema {
    /// Takes every registry variable except `zone`, in registry order.
    pub fn from_registry(registry: &VariableRegistry) -> Self {
        Self {
            names: registry
                .names()
                .iter()
                .filter(|n| *n != ZONE_VARIABLE)
                .cloned()
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Variable names under the given unit system, in schema order.
    pub fn resolved(&self, units: UnitSystem) -> Vec<String> {
        self.names.iter().map(|n| units.resolve(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_excludes_zone() {
        let registry = VariableRegistry::new(vec![
            "zone".into(),
            "maxHeightMeters".into(),
            "maxFar".into(),
        ]);
        let schema = VariableSchema::from_registry(&registry);
        assert_eq!(
            schema.resolved(UnitSystem::Metric),
            ["maxHeightMeters", "maxFar"]
        );
    }

    #[test]
    fn test_imperial_rewrites_unit_suffixes() {
        let units = UnitSystem::Imperial;
        assert_eq!(units.resolve("maxHeightMeters"), "maxHeightFeet");
        assert_eq!(units.resolve("minLotSizeHectares"), "minLotSizeAcres");
        assert_eq!(
            units.resolve("minLotSizePerUnitHectares"),
            "minLotSizePerUnitAcres"
        );
        // Singular "Hectare" is not a recognized suffix; left alone.
        assert_eq!(units.resolve("maxUnitsPerHectare"), "maxUnitsPerHectare");
        assert_eq!(units.resolve("maxFar"), "maxFar");
    }

    #[test]
    fn test_imperial_rename_roundtrips_through_inverse() {
        // The substitution is invertible by construction where defined.
        fn to_metric(name: &str) -> String {
            name.replace("Acres", "Hectares").replace("Feet", "Meters")
        }

        let schema = VariableSchema::from_registry(&VariableRegistry::builtin());
        let metric = schema.resolved(UnitSystem::Metric);
        let roundtripped: Vec<String> = schema
            .resolved(UnitSystem::Imperial)
            .iter()
            .map(|n| to_metric(n))
            .collect();
        assert_eq!(metric, roundtripped);
    }

    #[test]
    fn test_builtin_registry_starts_with_zone() {
        let registry = VariableRegistry::builtin();
        assert_eq!(registry.names()[0], ZONE_VARIABLE);
    }
}
