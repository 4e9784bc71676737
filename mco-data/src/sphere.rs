//! Projection of a latitude/longitude grid onto the unit sphere.
//!
//! The globe is always a perfect unit sphere; concentration only colors it.

use serde::Serialize;

/// Cartesian coordinates of every grid node, each `[len(lat)][len(lon)]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SphereMesh {
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub z: Vec<Vec<f64>>,
}

impl SphereMesh {
    /// Project degrees of latitude and longitude:
    ///
    /// ```text
    /// x = cos(lat) * cos(lon)
    /// y = cos(lat) * sin(lon)
    /// z = sin(lat)
    /// ```
    pub fn project(lat_deg: &[f64], lon_deg: &[f64]) -> Self {
        // (sin, cos) per longitude, shared by every latitude row
        let lon_trig: Vec<(f64, f64)> = lon_deg.iter().map(|lon| lon.to_radians().sin_cos()).collect();

        let rows = lat_deg.len();
        let mut x: Vec<Vec<f64>> = Vec::with_capacity(rows);
        let mut y: Vec<Vec<f64>> = Vec::with_capacity(rows);
        let mut z: Vec<Vec<f64>> = Vec::with_capacity(rows);

        for lat in lat_deg {
            let (sin_lat, cos_lat) = lat.to_radians().sin_cos();
            x.push(lon_trig.iter().map(|(_, cos_lon)| cos_lat * cos_lon).collect());
            y.push(lon_trig.iter().map(|(sin_lon, _)| cos_lat * sin_lon).collect());
            z.push(vec![sin_lat; lon_trig.len()]);
        }

        SphereMesh { x, y, z }
    }

    /// `(rows, columns)` of each coordinate grid.
    pub fn shape(&self) -> (usize, usize) {
        (self.x.len(), self.x.first().map_or(0, Vec::len))
    }

    /// Euclidean norm of the node at `[i][j]`.
    pub fn radius_at(&self, i: usize, j: usize) -> f64 {
        let (x, y, z) = (self.x[i][j], self.y[i][j], self.z[i][j]);
        (x * x + y * y + z * z).sqrt()
    }
}
