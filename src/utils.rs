//! Utils

use crate::Vec3;
use serde::{Deserialize, Serialize};

/// Normalize a vector, leaving a zero-length vector untouched
pub fn safe_normalize(v: &Vec3) -> Vec3 {
    v.try_normalize(0.0).unwrap_or(*v)
}

/// Vector in config files, written as `[x, y, z]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SerdeVector(pub f64, pub f64, pub f64);
impl From<SerdeVector> for Vec3 {
    fn from(v: SerdeVector) -> Self {
        Vec3::new(v.0, v.1, v.2)
    }
}
impl From<Vec3> for SerdeVector {
    fn from(v: Vec3) -> Self {
        Self(v[0], v[1], v[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_zero_is_zero() {
        let z = safe_normalize(&Vec3::zeros());
        assert_eq!(z, Vec3::zeros());
    }

    #[test]
    fn test_normalize_unit_length() {
        let n = safe_normalize(&Vec3::new(3.0, 0.0, 4.0));
        assert!((n.norm() - 1.0).abs() < 1e-12);
        assert!((n[0] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_serde_vector_yaml() {
        let v: SerdeVector = serde_yaml::from_str("[1.0, 2.5, -3.0]").unwrap();
        assert_eq!(Vec3::from(v), Vec3::new(1.0, 2.5, -3.0));
    }
}
