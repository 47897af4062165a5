//! Structural checks applied to parsed geometry before it is accepted.

use geojson::{FeatureCollection, Value};

use super::ImportError;

/// Minimum number of positions in a LineString.
const MIN_LINE_POSITIONS: usize = 2;

/// Minimum number of positions in a closed linear ring.
const MIN_RING_POSITIONS: usize = 4;

/// Validate every geometry in a collection. At least one feature must carry
/// a geometry.
pub(crate) fn collection(collection: &FeatureCollection) -> Result<(), ImportError> {
    let mut geometries = 0;
    for feature in &collection.features {
        if let Some(geometry) = &feature.geometry {
            value(&geometry.value)?;
            geometries += 1;
        }
    }
    if geometries == 0 {
        return Err(ImportError::invalid_geometry("no geometry found"));
    }
    Ok(())
}

/// Validate a single geometry value, recursing into geometry collections.
pub(crate) fn value(value: &Value) -> Result<(), ImportError> {
    match value {
        Value::Point(p) => position(p),
        Value::MultiPoint(points) => {
            non_empty(points, "MultiPoint")?;
            points.iter().try_for_each(|p| position(p))
        }
        Value::LineString(points) => line(points),
        Value::MultiLineString(lines) => {
            non_empty(lines, "MultiLineString")?;
            lines.iter().try_for_each(|l| line(l))
        }
        Value::Polygon(rings) => polygon(rings),
        Value::MultiPolygon(polygons) => {
            non_empty(polygons, "MultiPolygon")?;
            polygons.iter().try_for_each(|p| polygon(p))
        }
        Value::GeometryCollection(geometries) => {
            non_empty(geometries, "GeometryCollection")?;
            geometries.iter().try_for_each(|g| self::value(&g.value))
        }
    }
}

/// Multi-part geometries must have at least one member to draw anything.
fn non_empty<T>(members: &[T], kind: &str) -> Result<(), ImportError> {
    if members.is_empty() {
        return Err(ImportError::invalid_geometry(format!("{kind} is empty")));
    }
    Ok(())
}

fn position(position: &[f64]) -> Result<(), ImportError> {
    if !(2..=3).contains(&position.len()) {
        return Err(ImportError::invalid_geometry(format!(
            "position must have 2 or 3 values, found {}",
            position.len()
        )));
    }
    if position.iter().any(|v| !v.is_finite()) {
        return Err(ImportError::invalid_geometry("position contains a non-finite value"));
    }
    let (longitude, latitude) = (position[0], position[1]);
    if !(-180.0..=180.0).contains(&longitude) || !(-90.0..=90.0).contains(&latitude) {
        return Err(ImportError::invalid_geometry(format!(
            "position [{longitude}, {latitude}] is outside the valid longitude/latitude range"
        )));
    }
    Ok(())
}

fn line(points: &[Vec<f64>]) -> Result<(), ImportError> {
    if points.len() < MIN_LINE_POSITIONS {
        return Err(ImportError::invalid_geometry(format!(
            "line needs at least {MIN_LINE_POSITIONS} positions, found {}",
            points.len()
        )));
    }
    points.iter().try_for_each(|p| position(p))
}

fn polygon(rings: &[Vec<Vec<f64>>]) -> Result<(), ImportError> {
    if rings.is_empty() {
        return Err(ImportError::invalid_geometry("polygon has no rings"));
    }
    for ring in rings {
        if ring.len() < MIN_RING_POSITIONS {
            return Err(ImportError::invalid_geometry(format!(
                "polygon ring needs at least {MIN_RING_POSITIONS} positions, found {}",
                ring.len()
            )));
        }
        ring.iter().try_for_each(|p| position(p))?;
        if ring.first() != ring.last() {
            return Err(ImportError::invalid_geometry("polygon ring is not closed"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_arity() {
        assert!(position(&[1.0, 2.0]).is_ok());
        assert!(position(&[1.0, 2.0, 3.0]).is_ok());
        assert!(position(&[1.0]).is_err());
        assert!(position(&[1.0, 2.0, 3.0, 4.0]).is_err());
    }

    #[test]
    fn test_position_range() {
        assert!(position(&[180.0, -90.0]).is_ok());
        assert!(position(&[181.0, 0.0]).is_err());
        assert!(position(&[0.0, 91.0]).is_err());
        assert!(position(&[f64::NAN, 0.0]).is_err());
    }

    #[test]
    fn test_line_needs_two_positions() {
        assert!(value(&Value::LineString(vec![vec![0.0, 0.0]])).is_err());
        assert!(value(&Value::LineString(vec![vec![0.0, 0.0], vec![1.0, 1.0]])).is_ok());
    }

    #[test]
    fn test_empty_multi_geometries_rejected() {
        for empty in [
            Value::MultiPoint(Vec::new()),
            Value::MultiLineString(Vec::new()),
            Value::MultiPolygon(Vec::new()),
            Value::GeometryCollection(Vec::new()),
        ] {
            assert!(
                matches!(value(&empty), Err(ImportError::InvalidGeometry { .. })),
                "{:?} accepted",
                empty
            );
        }
        assert!(value(&Value::MultiPoint(vec![vec![1.0, 2.0]])).is_ok());
    }

    #[test]
    fn test_ring_must_close() {
        let open = vec![vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 1.0],
        ]];
        assert!(value(&Value::Polygon(open)).is_err());

        let closed = vec![vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 0.0],
        ]];
        assert!(value(&Value::Polygon(closed)).is_ok());
    }
}
