use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::workflows::diagnosis::domain::{ClubSlot, Concern, SkillTier};

use super::domain::{Bundle, BundleComponent, BundleId, ShaftFlex};

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Invalid { bundle: String, detail: String },
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read catalog export: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
            CatalogImportError::Invalid { bundle, detail } => {
                write!(f, "invalid catalog row '{}': {}", bundle, detail)
            }
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads a bundle catalog from a merchandising CSV export.
///
/// Expected header row:
/// `Bundle ID,Name,Brand,Tier,Strengths,Base Price,Affinity,Components`
/// with strengths pipe-separated and components encoded as
/// `slot:brand:model:flex` segments joined by pipes (empty flex for putters).
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Bundle>, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Bundle>, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut bundles = Vec::new();

        for record in csv_reader.deserialize::<CatalogRow>() {
            let row = record?;
            bundles.push(row.into_bundle()?);
        }

        Ok(bundles)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Bundle ID")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Brand")]
    brand: String,
    #[serde(rename = "Tier")]
    tier: String,
    #[serde(rename = "Strengths")]
    strengths: String,
    #[serde(rename = "Base Price")]
    base_price: u32,
    #[serde(rename = "Affinity")]
    affinity: f64,
    #[serde(rename = "Components")]
    components: String,
}

impl CatalogRow {
    fn into_bundle(self) -> Result<Bundle, CatalogImportError> {
        let tier = tier_for(&self.tier).ok_or_else(|| self.invalid("unknown tier"))?;

        let mut strengths = Vec::new();
        for label in self.strengths.split('|').filter(|label| !label.is_empty()) {
            let concern =
                concern_for(label).ok_or_else(|| self.invalid("unknown strength tag"))?;
            strengths.push(concern);
        }

        let mut components = Vec::new();
        for segment in self.components.split('|').filter(|segment| !segment.is_empty()) {
            components.push(
                parse_component(segment).ok_or_else(|| self.invalid("malformed component"))?,
            );
        }

        if !(0.0..=1.0).contains(&self.affinity) {
            return Err(self.invalid("affinity outside [0,1]"));
        }

        Ok(Bundle {
            id: BundleId(self.id),
            display_name: self.name,
            brand: self.brand,
            components,
            base_price: self.base_price,
            recommended_tier: tier,
            strengths,
            base_affinity: self.affinity,
        })
    }

    fn invalid(&self, detail: &str) -> CatalogImportError {
        CatalogImportError::Invalid {
            bundle: self.id.clone(),
            detail: detail.to_string(),
        }
    }
}

fn parse_component(segment: &str) -> Option<BundleComponent> {
    let mut parts = segment.splitn(4, ':');
    let slot = slot_for(parts.next()?)?;
    let brand = parts.next()?;
    let model = parts.next()?;
    let flex = match parts.next() {
        Some("") | None => None,
        Some(label) => Some(flex_for(label)?),
    };

    if brand.is_empty() || model.is_empty() {
        return None;
    }

    Some(BundleComponent {
        slot,
        brand: brand.to_string(),
        model: model.to_string(),
        flex,
    })
}

fn tier_for(label: &str) -> Option<SkillTier> {
    match label.trim().to_ascii_lowercase().as_str() {
        "beginner" => Some(SkillTier::Beginner),
        "intermediate" => Some(SkillTier::Intermediate),
        "advanced" => Some(SkillTier::Advanced),
        _ => None,
    }
}

fn concern_for(label: &str) -> Option<Concern> {
    match label.trim().to_ascii_lowercase().as_str() {
        "direction" => Some(Concern::Direction),
        "distance" => Some(Concern::Distance),
        "consistency" => Some(Concern::Consistency),
        "approach" => Some(Concern::Approach),
        "putting" => Some(Concern::Putting),
        _ => None,
    }
}

fn slot_for(label: &str) -> Option<ClubSlot> {
    match label.trim().to_ascii_lowercase().as_str() {
        "driver" => Some(ClubSlot::Driver),
        "wood" => Some(ClubSlot::Wood),
        "iron" => Some(ClubSlot::Iron),
        "wedge" => Some(ClubSlot::Wedge),
        "putter" => Some(ClubSlot::Putter),
        _ => None,
    }
}

fn flex_for(label: &str) -> Option<ShaftFlex> {
    match label.trim().to_ascii_uppercase().as_str() {
        "R" => Some(ShaftFlex::Regular),
        "S" => Some(ShaftFlex::Stiff),
        "X" => Some(ShaftFlex::ExtraStiff),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "Bundle ID,Name,Brand,Tier,Strengths,Base Price,Affinity,Components\n";

    #[test]
    fn importer_parses_a_complete_row() {
        let csv = format!(
            "{HEADER}demo-set,Demo Launch Set,TaylorMade,beginner,distance|direction,98000,0.8,\
             driver:TaylorMade:Stealth 2:R|putter:TaylorMade:Spider GT:\n"
        );

        let bundles =
            CatalogImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(bundles.len(), 1);

        let bundle = &bundles[0];
        assert_eq!(bundle.id, BundleId("demo-set".to_string()));
        assert_eq!(bundle.recommended_tier, SkillTier::Beginner);
        assert_eq!(
            bundle.strengths,
            vec![Concern::Distance, Concern::Direction]
        );
        assert_eq!(bundle.components.len(), 2);
        assert_eq!(bundle.components[0].flex, Some(ShaftFlex::Regular));
        assert_eq!(bundle.components[1].slot, ClubSlot::Putter);
        assert_eq!(bundle.components[1].flex, None);
    }

    #[test]
    fn importer_rejects_unknown_tier() {
        let csv = format!(
            "{HEADER}bad-set,Bad Set,Acme,touring-pro,distance,50000,0.5,driver:Acme:One:R\n"
        );

        let error =
            CatalogImporter::from_reader(Cursor::new(csv)).expect_err("tier rejected");
        match error {
            CatalogImportError::Invalid { bundle, detail } => {
                assert_eq!(bundle, "bad-set");
                assert!(detail.contains("tier"));
            }
            other => panic!("expected invalid row, got {other:?}"),
        }
    }

    #[test]
    fn importer_rejects_malformed_components() {
        let csv = format!(
            "{HEADER}bad-set,Bad Set,Acme,beginner,distance,50000,0.5,driver-only\n"
        );

        let error =
            CatalogImporter::from_reader(Cursor::new(csv)).expect_err("component rejected");
        assert!(matches!(error, CatalogImportError::Invalid { .. }));
    }

    #[test]
    fn importer_rejects_affinity_outside_range() {
        let csv = format!(
            "{HEADER}bad-set,Bad Set,Acme,beginner,distance,50000,1.5,driver:Acme:One:R\n"
        );

        let error =
            CatalogImporter::from_reader(Cursor::new(csv)).expect_err("affinity rejected");
        assert!(matches!(error, CatalogImportError::Invalid { .. }));
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error = CatalogImporter::from_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            CatalogImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
