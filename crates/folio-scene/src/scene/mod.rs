//! Playground scene selection and per-frame integration.

mod catalog;
mod playground;


pub use playground::{PlaygroundOptions, PlaygroundScene};

use folio_common::SceneId;

use crate::float::FloatMotion;
use crate::frame::{LabelDraw, MeshDraw};
use crate::matrix::{self, Mat4};
use crate::primitive::{Primitive, Shape};

/// The selected scene and its live primitives.
///
/// Scene time keeps running across selections. Primitives mounted by a
/// selection start with zero rotation and their bob phase anchored at the
/// moment they were mounted.
#[derive(Debug, Clone)]
pub struct SceneState {
    current: SceneId,
    primitives: Vec<Primitive>,
    group: Option<FloatMotion>,
    elapsed: f32,
}

impl SceneState {
    pub fn new(id: SceneId) -> Self {
        Self {
            current: id,
            primitives: catalog::build(id, 0.0),
            group: catalog::group_motion(id),
            elapsed: 0.0,
        }
    }

    pub fn current(&self) -> SceneId {
        self.current
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Switches to `id`, replacing every primitive at once.
    ///
    /// Returns `false` and leaves the scene untouched when `id` is already
    /// selected.
    pub fn select(&mut self, id: SceneId) -> bool {
        if id == self.current {
            return false;
        }
        tracing::debug!(from = %self.current, to = %id, "switching playground scene");
        self.primitives = catalog::build(id, self.elapsed);
        self.group = catalog::group_motion(id);
        self.current = id;
        true
    }

    /// Advances scene time by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.elapsed += dt;
        let t = self.elapsed;
        for p in &mut self.primitives {
            p.update(dt, t);
        }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Transform applied on top of every primitive's own model matrix.
    pub fn group_transform(&self) -> Mat4 {
        self.group
            .map(|g| g.matrix(self.elapsed))
            .unwrap_or(matrix::IDENTITY)
    }

    /// Whether the camera should orbit on its own while this scene shows.
    pub fn auto_rotate(&self) -> bool {
        self.current == SceneId::Text
    }
}

/// Splits primitives into mesh and label draws under a shared group transform.
pub(crate) fn collect_draws(
    primitives: &[Primitive],
    group: &Mat4,
) -> (Vec<MeshDraw>, Vec<LabelDraw>) {
    let mut meshes = Vec::new();
    let mut labels = Vec::new();
    for p in primitives {
        let model = matrix::mul(group, &p.model_matrix());
        match &p.shape {
            Shape::Text { content, size } => {
                let [x, y, z] = p.position;
                let w = matrix::transform(group, [x, y, z, 1.0]);
                labels.push(LabelDraw {
                    text: content.clone(),
                    world: [w[0], w[1], w[2]],
                    size: *size,
                    color: p.material.color,
                });
            }
            shape => {
                if let Some(key) = shape.mesh_key() {
                    meshes.push(MeshDraw {
                        key,
                        model,
                        color: p.material.color,
                        opacity: p.material.opacity,
                        wireframe: p.material.wireframe,
                    });
                }
            }
        }
    }
    (meshes, labels)
}
