use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use geo::{Coord, LineString, Polygon};
use serde::Deserialize;
use serde_json::Value;

use crate::atlas::{Boundary, Country};

/// Which feature properties hold the country code and display name.
///
/// Passed explicitly to the loader; defaults match the `code`/`name` keys
/// used by the bundled fixtures.
#[derive(Debug, Clone)]
pub struct GeoJsonOptions {
    pub code_property: String,
    pub name_property: String,
}

impl Default for GeoJsonOptions {
    fn default() -> Self {
        Self { code_property: "code".into(), name_property: "name".into() }
    }
}

#[derive(Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    geometry: Geometry,
    #[serde(default)]
    properties: serde_json::Map<String, Value>,
}

// GeoJSON positions may carry altitude; only the first two components are
// read.
#[derive(Deserialize)]
#[serde(tag = "type", content = "coordinates")]
enum Geometry {
    Polygon(Vec<Vec<Vec<f64>>>),
    MultiPolygon(Vec<Vec<Vec<Vec<f64>>>>),
}

/// Read countries from the bytes of a GeoJSON FeatureCollection.
///
/// Every feature must be a `Polygon` or `MultiPolygon` carrying the
/// configured code property. Rings must arrive closed; malformed geometry
/// fails the whole load rather than being skipped.
pub fn read_countries(bytes: &[u8], options: &GeoJsonOptions) -> Result<Vec<Country>> {
    let collection: FeatureCollection =
        serde_json::from_slice(bytes).context("failed to parse GeoJSON")?;

    let mut countries = Vec::with_capacity(collection.features.len());
    for feature in collection.features {
        let code = property_str(&feature.properties, &options.code_property).with_context(
            || format!("feature is missing the {:?} property", options.code_property),
        )?;
        let name = property_str(&feature.properties, &options.name_property)
            .with_context(|| format!("feature {code} is missing the {:?} property", options.name_property))?;

        let polygons = match feature.geometry {
            Geometry::Polygon(rings) => vec![polygon_from_rings(rings)?],
            Geometry::MultiPolygon(polygons) => {
                polygons.into_iter().map(polygon_from_rings).collect::<Result<_>>()?
            }
        };
        let boundaries = polygons
            .into_iter()
            .map(Boundary::new)
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("invalid boundary geometry for country {code}"))?;

        countries.push(Country::new(code.as_str(), name, boundaries)?);
    }
    Ok(countries)
}

/// Load countries from a GeoJSON file. The handle is held only for the
/// duration of the read; queries never touch the filesystem again.
pub fn load_countries(path: &Path, options: &GeoJsonOptions) -> Result<Vec<Country>> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    read_countries(&bytes, options)
}

fn property_str(properties: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    properties.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn polygon_from_rings(rings: Vec<Vec<Vec<f64>>>) -> Result<Polygon<f64>> {
    let mut rings = rings.into_iter();
    let exterior = match rings.next() {
        Some(ring) => ring_from_positions(ring)?,
        None => bail!("polygon has no exterior ring"),
    };
    let holes = rings.map(ring_from_positions).collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, holes))
}

fn ring_from_positions(positions: Vec<Vec<f64>>) -> Result<LineString<f64>> {
    let mut coords = Vec::with_capacity(positions.len());
    for position in positions {
        let &[x, y, ..] = &position[..] else {
            bail!("coordinate position has fewer than two components");
        };
        coords.push(Coord { x, y });
    }
    Ok(LineString::from(coords))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]]
                },
                "properties": { "code": "AA", "name": "Alpha" }
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[10, 10], [11, 10], [11, 11], [10, 11], [10, 10]]],
                        [[[13, 10], [14, 10], [14, 11], [13, 11], [13, 10]]]
                    ]
                },
                "properties": { "code": "BB", "name": "Beta" }
            }
        ]
    }"#;

    #[test]
    fn reads_polygon_and_multipolygon_features() {
        let countries = read_countries(DATASET.as_bytes(), &GeoJsonOptions::default()).unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].code().as_str(), "AA");
        assert_eq!(countries[0].boundaries().len(), 1);
        assert_eq!(countries[1].name(), "Beta");
        assert_eq!(countries[1].boundaries().len(), 2);
    }

    #[test]
    fn custom_property_keys() {
        let data = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]]
                },
                "properties": { "ISO_A2": "CC", "ADMIN": "Gamma" }
            }]
        }"#;
        let options = GeoJsonOptions {
            code_property: "ISO_A2".into(),
            name_property: "ADMIN".into(),
        };
        let countries = read_countries(data.as_bytes(), &options).unwrap();
        assert_eq!(countries[0].code().as_str(), "CC");
        assert_eq!(countries[0].name(), "Gamma");
    }

    #[test]
    fn missing_code_property_names_the_key() {
        let data = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]]
                },
                "properties": { "name": "Nameless" }
            }]
        }"#;
        let err = read_countries(data.as_bytes(), &GeoJsonOptions::default()).unwrap_err();
        assert!(err.to_string().contains("code"));
    }

    #[test]
    fn unclosed_ring_fails_with_country_context() {
        let data = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1]]]
                },
                "properties": { "code": "DD", "name": "Delta" }
            }]
        }"#;
        let err = read_countries(data.as_bytes(), &GeoJsonOptions::default()).unwrap_err();
        assert!(format!("{err:#}").contains("DD"));
    }
}
