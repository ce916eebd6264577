//! Configuration system
//!
//! A generic [`Config`] trait for TOML/RON files, and the scene description
//! used to build hitbox groups and a ray from a file.

use std::path::Path;

pub use serde::{Serialize, Deserialize};

use crate::error::RaycastError;
use crate::foundation::logging::warn;
use crate::foundation::math::{quat_from_xyzw, Vec3};
use crate::geometry::Ray;
use crate::group::HitBoxGroupData;
use crate::hitbox::{HitBoxData, HitBoxKind};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
        match extension(path) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Some("ron") => ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Scene content that cannot be turned into groups or a ray
    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    /// Ray construction failed
    #[error("Invalid ray: {0}")]
    Ray(#[from] RaycastError),
}

/// Scene description: one ray and the groups it is cast against
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Ray to cast
    pub ray: RayConfig,
    /// Hitbox groups
    pub groups: Vec<GroupConfig>,
}

impl Config for SceneConfig {}

impl SceneConfig {
    /// Build the (normalized) ray
    pub fn build_ray(&self) -> Result<Ray, ConfigError> {
        Ok(Ray::new(Vec3::from(self.ray.origin), Vec3::from(self.ray.direction))?)
    }

    /// Build runtime groups, validating each bounding sphere
    pub fn build_groups(&self) -> Result<Vec<HitBoxGroupData<HitBoxData>>, ConfigError> {
        self.groups
            .iter()
            .enumerate()
            .map(|(index, group)| group.build(index))
            .collect()
    }
}

/// Ray description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RayConfig {
    /// World-space origin
    pub origin: [f64; 3],
    /// Direction (normalized on build)
    pub direction: [f64; 3],
}

impl Default for RayConfig {
    fn default() -> Self {
        Self {
            origin: [0.0, 0.0, 0.0],
            direction: [0.0, 0.0, 1.0],
        }
    }
}

/// Group description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Bounding sphere center
    pub center: [f64; 3],
    /// Bounding sphere radius
    pub radius: f64,
    /// Members
    #[serde(default)]
    pub hit_boxes: Vec<HitBoxConfig>,
}

impl GroupConfig {
    fn build(&self, index: usize) -> Result<HitBoxGroupData<HitBoxData>, ConfigError> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ConfigError::InvalidScene(format!(
                "group #{index} has invalid radius {}",
                self.radius
            )));
        }

        let hit_boxes = self
            .hit_boxes
            .iter()
            .enumerate()
            .map(|(member, hit_box)| {
                if hit_box.kind == HitBoxKind::AxisAlignedBox && (hit_box.min.is_none() || hit_box.max.is_none()) {
                    warn!("Group #{index} member #{member} is axis-aligned without both corners; it will never be hit");
                }
                hit_box.to_hit_box()
            })
            .collect();

        Ok(HitBoxGroupData::new(hit_boxes, Vec3::from(self.center), self.radius))
    }
}

/// Hitbox description
///
/// Rotations are quaternions written `[x, y, z, w]`. Only the fields relevant
/// to `kind` are used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitBoxConfig {
    /// Shape kind
    pub kind: HitBoxKind,
    /// Anchor (corner or center)
    #[serde(default)]
    pub position: [f64; 3],
    /// Non-uniform scale
    #[serde(default = "unit_scale")]
    pub scale: [f64; 3],
    /// Rotation applied after scaling
    #[serde(default = "identity_rotation")]
    pub left_rotation: [f64; 4],
    /// Rotation applied before scaling
    #[serde(default = "identity_rotation")]
    pub right_rotation: [f64; 4],
    /// Minimum corner (axis-aligned only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<[f64; 3]>,
    /// Maximum corner (axis-aligned only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<[f64; 3]>,
}

impl HitBoxConfig {
    /// Convert to a runtime hitbox
    pub fn to_hit_box(&self) -> HitBoxData {
        HitBoxData {
            kind: self.kind,
            position: Vec3::from(self.position),
            scale: Vec3::from(self.scale),
            left_rotation: quat_from_xyzw(self.left_rotation),
            right_rotation: quat_from_xyzw(self.right_rotation),
            aabb_min: self.min.map(Vec3::from),
            aabb_max: self.max.map(Vec3::from),
        }
    }
}

fn unit_scale() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

fn identity_rotation() -> [f64; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raycast::{cast_groups, first_collision};
    use approx::assert_relative_eq;

    const SCENE_TOML: &str = r#"
[ray]
origin = [0.0, 0.0, -5.0]
direction = [0.0, 0.0, 2.0]

[[groups]]
center = [0.0, 0.0, 0.0]
radius = 2.0

[[groups.hit_boxes]]
kind = "axis_aligned_box"
min = [-1.0, -1.0, -1.0]
max = [1.0, 1.0, 1.0]

[[groups]]
center = [0.0, 0.0, 20.0]
radius = 2.0

[[groups.hit_boxes]]
kind = "centered_box"
position = [0.0, 0.0, 20.0]
scale = [2.0, 2.0, 2.0]
"#;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("hitbox_raycast_{}_{name}", std::process::id()))
    }

    #[test]
    fn test_parse_toml_scene() {
        let scene: SceneConfig = toml::from_str(SCENE_TOML).unwrap();
        assert_eq!(scene.groups.len(), 2);
        assert_eq!(scene.groups[0].hit_boxes[0].kind, HitBoxKind::AxisAlignedBox);
        assert_eq!(scene.groups[1].hit_boxes[0].scale, [2.0, 2.0, 2.0]);
        assert_eq!(scene.groups[1].hit_boxes[0].left_rotation, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_scene_builds_and_casts() {
        let scene: SceneConfig = toml::from_str(SCENE_TOML).unwrap();
        let ray = scene.build_ray().unwrap();
        let groups = scene.build_groups().unwrap();

        assert_eq!(ray.direction(), Vec3::z());
        let casts = cast_groups(&groups, &ray);
        assert_eq!(casts.len(), 2);

        let first = first_collision(&casts).unwrap();
        assert_relative_eq!(first.distance(), 4.0);
        assert_relative_eq!(casts[1].actual_inlet().unwrap(), 24.0, epsilon = 1e-9);
    }

    #[test]
    fn test_scene_rejects_zero_direction() {
        let mut scene = SceneConfig::default();
        scene.ray.direction = [0.0, 0.0, 0.0];
        assert!(matches!(scene.build_ray(), Err(ConfigError::Ray(RaycastError::ZeroDirection(..)))));
    }

    #[test]
    fn test_scene_rejects_negative_radius() {
        let mut scene: SceneConfig = toml::from_str(SCENE_TOML).unwrap();
        scene.groups[1].radius = -1.0;
        let err = scene.build_groups().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidScene(_)));
        assert!(err.to_string().contains("group #1"));
    }

    #[test]
    fn test_axis_aligned_without_corners_still_builds() {
        let mut scene: SceneConfig = toml::from_str(SCENE_TOML).unwrap();
        scene.groups[0].hit_boxes[0].max = None;
        let groups = scene.build_groups().unwrap();
        assert_eq!(groups[0].len(), 1);
    }

    #[test]
    fn test_rotation_order_is_xyzw() {
        let config = HitBoxConfig {
            kind: HitBoxKind::OrientedBox,
            position: [0.0; 3],
            scale: unit_scale(),
            left_rotation: [0.0, 0.0, std::f64::consts::FRAC_1_SQRT_2, std::f64::consts::FRAC_1_SQRT_2],
            right_rotation: identity_rotation(),
            min: None,
            max: None,
        };
        let hit_box = config.to_hit_box();
        assert_relative_eq!(hit_box.left_rotation * Vec3::x(), Vec3::y(), epsilon = 1e-12);
    }

    #[test]
    fn test_ron_round_trip() {
        let scene: SceneConfig = toml::from_str(SCENE_TOML).unwrap();
        let path = temp_path("scene.ron");

        scene.save_to_file(&path).unwrap();
        let loaded = SceneConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, scene);
    }

    #[test]
    fn test_toml_round_trip() {
        let scene: SceneConfig = toml::from_str(SCENE_TOML).unwrap();
        let path = temp_path("scene.toml");

        scene.save_to_file(&path).unwrap();
        let loaded = SceneConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, scene);
    }

    #[test]
    fn test_unsupported_format() {
        let scene = SceneConfig::default();
        let result = scene.save_to_file(temp_path("scene.json"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = SceneConfig::load_from_file(temp_path("does_not_exist.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
