//! Building obstacle rectangles from decorative objects placed on a page.

use crate::rect::Rect;
use crate::units::Pt;
use log::debug;

/// Clearance kept between text and every obstacle unless configured otherwise
pub const DEFAULT_CLEARANCE: Pt = Pt(12.0);

/// A decorative object placed freely by the user. Objects are owned by the caller; the
/// engine only reads them to derive [Obstacle]s.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedObject {
    /// Stable identifier, carried through to the obstacle
    pub id: String,
    pub page_id: String,
    /// Centre of the object in object space
    pub position: (Pt, Pt),
    /// Width and height before scaling
    pub base_size: (Pt, Pt),
    pub scale: f32,
    /// Clockwise rotation in degrees
    pub rotation: f32,
    /// Visual stacking relative to the text. Does not affect layout unless a layer filter
    /// is set on the [ObstacleBuilder].
    pub layer: i32,
}

impl PlacedObject {
    pub fn new<S: ToString, P: ToString>(
        id: S,
        page_id: P,
        position: (Pt, Pt),
        base_size: (Pt, Pt),
    ) -> PlacedObject {
        PlacedObject {
            id: id.to_string(),
            page_id: page_id.to_string(),
            position,
            base_size,
            scale: 1.0,
            rotation: 0.0,
            layer: 0,
        }
    }

    pub fn with_scale(self, scale: f32) -> PlacedObject {
        PlacedObject { scale, ..self }
    }

    pub fn with_rotation(self, rotation: f32) -> PlacedObject {
        PlacedObject { rotation, ..self }
    }

    pub fn with_layer(self, layer: i32) -> PlacedObject {
        PlacedObject { layer, ..self }
    }
}

/// A rectangle that text must flow around
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: String,
    pub bounds: Rect,
    /// Clearance added to every side of `bounds` before any collision test
    pub margin: Pt,
}

impl Obstacle {
    pub fn new<S: ToString>(id: S, bounds: Rect, margin: Pt) -> Obstacle {
        Obstacle {
            id: id.to_string(),
            bounds,
            margin,
        }
    }

    /// The area text has to keep out of: `bounds` grown by `margin`
    pub fn footprint(&self) -> Rect {
        self.bounds.expand(self.margin)
    }
}

/// How the rotation of a [PlacedObject] influences its obstacle
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum RotationPolicy {
    /// Use the unrotated, scaled size
    #[default]
    Ignore,
    /// Use the axis-aligned bounding box of the rotated object
    BoundingBox,
}

/// Derives [Obstacle]s for one page from the current set of [PlacedObject]s
pub struct ObstacleBuilder {
    pub clearance: Pt,
    pub rotation: RotationPolicy,
    layer_filter: Option<Box<dyn Fn(i32) -> bool + Send + Sync>>,
}

impl Default for ObstacleBuilder {
    fn default() -> Self {
        ObstacleBuilder {
            clearance: DEFAULT_CLEARANCE,
            rotation: RotationPolicy::default(),
            layer_filter: None,
        }
    }
}

impl std::fmt::Debug for ObstacleBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObstacleBuilder")
            .field("clearance", &self.clearance)
            .field("rotation", &self.rotation)
            .field("layer_filter", &self.layer_filter.is_some())
            .finish()
    }
}

impl ObstacleBuilder {
    pub fn with_clearance(self, clearance: Pt) -> ObstacleBuilder {
        ObstacleBuilder { clearance, ..self }
    }

    pub fn with_rotation(self, rotation: RotationPolicy) -> ObstacleBuilder {
        ObstacleBuilder { rotation, ..self }
    }

    /// Only objects whose layer satisfies `filter` become obstacles. Without a filter every
    /// object on the page is an obstacle, whether it is drawn above or below the text.
    pub fn with_layer_filter<F>(self, filter: F) -> ObstacleBuilder
    where
        F: Fn(i32) -> bool + Send + Sync + 'static,
    {
        ObstacleBuilder {
            layer_filter: Some(Box::new(filter)),
            ..self
        }
    }

    /// Build the obstacles for `page_id`. `origin_offset` is the position of the layout
    /// surface's top-left corner in object space, if the surface does not start at (0, 0).
    pub fn build(
        &self,
        objects: &[PlacedObject],
        page_id: &str,
        origin_offset: Option<(Pt, Pt)>,
    ) -> Vec<Obstacle> {
        let (ox, oy) = origin_offset.unwrap_or((Pt::ZERO, Pt::ZERO));

        let obstacles: Vec<Obstacle> = objects
            .iter()
            .filter(|object| object.page_id == page_id)
            .filter(|object| match &self.layer_filter {
                Some(filter) => filter(object.layer),
                None => true,
            })
            .map(|object| Obstacle {
                id: object.id.clone(),
                bounds: self.bounds_of(object).translate(Pt::ZERO - ox, Pt::ZERO - oy),
                margin: self.clearance,
            })
            .collect();

        debug!(
            "built {} obstacles for page {page_id} from {} objects",
            obstacles.len(),
            objects.len()
        );
        obstacles
    }

    fn bounds_of(&self, object: &PlacedObject) -> Rect {
        let (cx, cy) = object.position;
        let width = (object.base_size.0 * object.scale).abs();
        let height = (object.base_size.1 * object.scale).abs();

        match self.rotation {
            RotationPolicy::Ignore => Rect::centred(cx, cy, width, height),
            RotationPolicy::BoundingBox => {
                let (sin, cos) = object.rotation.to_radians().sin_cos();
                let (sin, cos) = (sin.abs(), cos.abs());
                Rect::centred(
                    cx,
                    cy,
                    width * cos + height * sin,
                    width * sin + height * cos,
                )
            }
        }
    }
}

/// Build obstacles for `page_id` with the [DEFAULT_CLEARANCE] and rotation ignored
pub fn build_obstacles(
    objects: &[PlacedObject],
    page_id: &str,
    origin_offset: Option<(Pt, Pt)>,
) -> Vec<Obstacle> {
    ObstacleBuilder::default().build(objects, page_id, origin_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sticker(id: &str, page: &str, x: f32, y: f32) -> PlacedObject {
        PlacedObject::new(id, page, (Pt(x), Pt(y)), (Pt(40.0), Pt(20.0)))
    }

    #[test]
    fn keeps_only_objects_on_the_page() {
        let objects = vec![
            sticker("a", "page-1", 50.0, 50.0),
            sticker("b", "page-2", 50.0, 50.0),
            sticker("c", "page-1", 100.0, 100.0),
        ];
        let obstacles = build_obstacles(&objects, "page-1", None);
        let ids: Vec<&str> = obstacles.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn footprint_is_scaled_and_centred() {
        let objects = vec![sticker("a", "p", 100.0, 50.0).with_scale(2.0)];
        let obstacles = build_obstacles(&objects, "p", None);
        assert_eq!(obstacles[0].bounds, Rect::new(60.0, 30.0, 80.0, 40.0));
        assert_eq!(obstacles[0].margin, DEFAULT_CLEARANCE);
        assert_eq!(
            obstacles[0].footprint(),
            Rect::new(48.0, 18.0, 104.0, 64.0)
        );
    }

    #[test]
    fn origin_offset_moves_into_surface_space() {
        let objects = vec![sticker("a", "p", 100.0, 50.0)];
        let obstacles = build_obstacles(&objects, "p", Some((Pt(30.0), Pt(10.0))));
        assert_eq!(obstacles[0].bounds, Rect::new(50.0, 30.0, 40.0, 20.0));
    }

    #[test]
    fn rotation_is_ignored_by_default() {
        let objects = vec![sticker("a", "p", 100.0, 50.0).with_rotation(90.0)];
        let obstacles = build_obstacles(&objects, "p", None);
        assert_eq!(obstacles[0].bounds, Rect::new(80.0, 40.0, 40.0, 20.0));
    }

    #[test]
    fn rotated_bounding_box_can_be_requested() {
        let builder = ObstacleBuilder::default().with_rotation(RotationPolicy::BoundingBox);
        let objects = vec![sticker("a", "p", 100.0, 50.0).with_rotation(90.0)];
        let bounds = builder.build(&objects, "p", None)[0].bounds;
        assert!((bounds.width.0 - 20.0).abs() < 1e-3);
        assert!((bounds.height.0 - 40.0).abs() < 1e-3);
        assert!((bounds.x.0 - 90.0).abs() < 1e-3);
    }

    #[test]
    fn layers_do_not_filter_unless_asked() {
        let objects = vec![
            sticker("behind", "p", 10.0, 10.0).with_layer(-1),
            sticker("front", "p", 10.0, 10.0).with_layer(1),
        ];
        assert_eq!(build_obstacles(&objects, "p", None).len(), 2);

        let builder = ObstacleBuilder::default().with_layer_filter(|layer| layer < 0);
        let obstacles = builder.build(&objects, "p", None);
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].id, "behind");
    }

    #[test]
    fn clearance_is_configurable() {
        let builder = ObstacleBuilder::default().with_clearance(Pt::ZERO);
        let obstacles = builder.build(&[sticker("a", "p", 20.0, 10.0)], "p", None);
        assert_eq!(obstacles[0].footprint(), obstacles[0].bounds);
    }
}
