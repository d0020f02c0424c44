use crate::camera::Camera;
use crate::core::config::{AppConfig, ViewportConfig};
use crate::core::constants::*;
use crate::core::easing::{damp, damp3};
use crate::core::geometry::{bent_plane, MeshData};
use crate::core::layout::{layout, Placement};
use crate::input::ray_triangle;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use std::f32::consts::TAU;

/// Everything the frame loop hands to the scene once per rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Eased scroll offset, one unit per full cycle.
    pub scroll_offset: f32,
    /// Eased per-frame scroll change.
    pub scroll_delta: f32,
    /// Pointer in normalized device coordinates.
    pub pointer: Vec2,
    /// False while the pointer has never entered the canvas.
    pub pointer_inside: bool,
    pub aspect: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardState {
    pub index: usize,
    /// 1-based image number (`img{n}.png`).
    pub image: usize,
    pub position: Vec3,
    pub facing: f32,
    pub hovered: bool,
    pub scale: f32,
    pub edge_radius: f32,
    pub zoom: f32,
}

impl CardState {
    /// Cards start resting at their idle targets.
    pub fn from_placement(p: &Placement) -> Self {
        Self {
            index: p.index,
            image: p.image,
            position: p.position,
            facing: p.facing,
            hovered: false,
            scale: SCALE_TARGETS.1,
            edge_radius: EDGE_RADIUS_TARGETS.1,
            zoom: ZOOM_TARGETS.1,
        }
    }

    pub fn step(&self, delta: f32) -> Self {
        let pick = |targets: (f32, f32)| if self.hovered { targets.0 } else { targets.1 };
        Self {
            scale: damp(self.scale, pick(SCALE_TARGETS), SCALE_SMOOTH_SEC, delta),
            edge_radius: damp(
                self.edge_radius,
                pick(EDGE_RADIUS_TARGETS),
                MATERIAL_SMOOTH_SEC,
                delta,
            ),
            zoom: damp(self.zoom, pick(ZOOM_TARGETS), MATERIAL_SMOOTH_SEC, delta),
            ..*self
        }
    }

    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.facing),
            self.position,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigState {
    pub rotation_y: f32,
    pub camera_position: Vec3,
}

impl RigState {
    pub fn new(viewport: &ViewportConfig) -> Self {
        Self {
            rotation_y: 0.0,
            camera_position: Vec3::new(0.0, 0.0, viewport.camera_distance),
        }
    }

    pub fn camera_target(pointer: Vec2) -> Vec3 {
        Vec3::new(
            -pointer.x * CAMERA_POINTER_GAIN_X,
            pointer.y + CAMERA_HEIGHT,
            CAMERA_REST_Z,
        )
    }

    pub fn step(&self, input: &FrameInput) -> Self {
        Self {
            rotation_y: -input.scroll_offset * TAU,
            camera_position: damp3(
                self.camera_position,
                Self::camera_target(input.pointer),
                CAMERA_SMOOTH_SEC,
                input.delta,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BannerState {
    pub shader_time: f32,
    pub texture_offset_x: f32,
}

impl BannerState {
    pub fn step(&self, scroll_delta: f32, delta: f32) -> Self {
        Self {
            shader_time: self.shader_time + scroll_delta.abs() * BANNER_TIME_PER_SCROLL,
            texture_offset_x: self.texture_offset_x + delta.max(0.0) * BANNER_OFFSET_PER_SEC,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Group { position: Vec3 },
    Rig { state: RigState, tilt_z: f32 },
    Card(CardState),
    Banner { state: BannerState, position: Vec3 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub kind: NodeKind,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn leaf(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn local_matrix(&self) -> Mat4 {
        match &self.kind {
            NodeKind::Group { position } => Mat4::from_translation(*position),
            NodeKind::Rig { state, tilt_z } => Mat4::from_quat(Quat::from_euler(
                EulerRot::XYZ,
                0.0,
                state.rotation_y,
                *tilt_z,
            )),
            NodeKind::Card(card) => card.local_matrix(),
            NodeKind::Banner { position, .. } => Mat4::from_translation(*position),
        }
    }

    fn visit_mut(&mut self, f: &mut impl FnMut(&mut SceneNode)) {
        f(self);
        for child in &mut self.children {
            child.visit_mut(f);
        }
    }

    fn visit_world(&self, parent: Mat4, f: &mut impl FnMut(&SceneNode, Mat4)) {
        let world = parent * self.local_matrix();
        f(self, world);
        for child in &self.children {
            child.visit_world(world, f);
        }
    }
}

/// One drawable, resolved to world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawItem {
    Card { world: Mat4, card: CardState },
    Banner { world: Mat4, banner: BannerState },
}

/// A hover flag flip observed during an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverChange {
    pub index: usize,
    pub hovered: bool,
}

pub struct Scene {
    pub root: SceneNode,
    pub viewport: ViewportConfig,
    pick_mesh: MeshData,
}

impl Scene {
    /// `Group → [Rig → [Card × N], Banner]`.
    pub fn build(config: &AppConfig) -> Self {
        let cards = layout(config.card_count, config.radius)
            .iter()
            .map(|p| SceneNode::leaf(NodeKind::Card(CardState::from_placement(p))))
            .collect();
        let rig = SceneNode {
            kind: NodeKind::Rig {
                state: RigState::new(&config.viewport),
                tilt_z: RIG_TILT_Z,
            },
            children: cards,
        };
        let banner = SceneNode::leaf(NodeKind::Banner {
            state: BannerState::default(),
            position: BANNER_POSITION,
        });
        Self {
            root: SceneNode {
                kind: NodeKind::Group {
                    position: Vec3::ZERO,
                },
                children: vec![rig, banner],
            },
            viewport: config.viewport,
            pick_mesh: bent_plane(
                CARD_BEND,
                CARD_WIDTH,
                CARD_HEIGHT,
                CARD_PICK_SEGMENTS.0,
                CARD_PICK_SEGMENTS.1,
            ),
        }
    }

    /// Run one frame of updates in a fixed order: rig, hover raycast, then
    /// cards and banner. Returns the hover flips this frame produced.
    pub fn update(&mut self, input: &FrameInput) -> Vec<HoverChange> {
        self.root.visit_mut(&mut |node| {
            if let NodeKind::Rig { state, .. } = &mut node.kind {
                *state = state.step(input);
            }
        });

        // The ring moves under a still pointer, so hover is re-evaluated every frame.
        let hit = if input.pointer_inside {
            self.pick(input.pointer, input.aspect)
        } else {
            None
        };
        let changes = self.set_hovered(hit);

        self.root.visit_mut(&mut |node| match &mut node.kind {
            NodeKind::Card(card) => *card = card.step(input.delta),
            NodeKind::Banner { state, .. } => {
                *state = state.step(input.scroll_delta, input.delta)
            }
            _ => {}
        });
        changes
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        let mut eye = Vec3::new(0.0, 0.0, self.viewport.camera_distance);
        self.root.visit_world(Mat4::IDENTITY, &mut |node, _| {
            if let NodeKind::Rig { state, .. } = &node.kind {
                eye = state.camera_position;
            }
        });
        Camera {
            eye,
            fov_y_deg: self.viewport.fov_y_deg,
            aspect,
            near: self.viewport.near,
            far: self.viewport.far,
        }
    }

    pub fn draw_list(&self) -> Vec<DrawItem> {
        let mut items = Vec::new();
        self.root.visit_world(Mat4::IDENTITY, &mut |node, world| match &node.kind {
            NodeKind::Card(card) => items.push(DrawItem::Card { world, card: *card }),
            NodeKind::Banner { state, .. } => items.push(DrawItem::Banner {
                world,
                banner: *state,
            }),
            _ => {}
        });
        items
    }

    pub fn cards(&self) -> Vec<CardState> {
        self.draw_list()
            .into_iter()
            .filter_map(|item| match item {
                DrawItem::Card { card, .. } => Some(card),
                _ => None,
            })
            .collect()
    }

    pub fn banner(&self) -> Option<BannerState> {
        self.draw_list().into_iter().find_map(|item| match item {
            DrawItem::Banner { banner, .. } => Some(banner),
            _ => None,
        })
    }

    pub fn hovered(&self) -> Option<usize> {
        self.cards().iter().find(|c| c.hovered).map(|c| c.index)
    }

    /// Nearest card under the pointer.
    pub fn pick(&self, pointer: Vec2, aspect: f32) -> Option<usize> {
        let (ro, rd) = self.camera(aspect).ndc_to_world_ray(pointer);
        let mut best = None::<(usize, f32)>;
        for item in self.draw_list() {
            let DrawItem::Card { world, card } = item else {
                continue;
            };
            for tri in self.pick_mesh.triangles() {
                let tri = tri.map(|p| world.transform_point3(p));
                if let Some(t) = ray_triangle(ro, rd, tri) {
                    match best {
                        Some((_, bt)) if t >= bt => {}
                        _ => best = Some((card.index, t)),
                    }
                }
            }
        }
        best.map(|(i, _)| i)
    }

    /// Apply the enter/leave transitions for `hit`.
    pub fn set_hovered(&mut self, hit: Option<usize>) -> Vec<HoverChange> {
        let mut changes = Vec::new();
        self.root.visit_mut(&mut |node| {
            if let NodeKind::Card(card) = &mut node.kind {
                let hovered = hit == Some(card.index);
                if hovered != card.hovered {
                    card.hovered = hovered;
                    changes.push(HoverChange {
                        index: card.index,
                        hovered,
                    });
                }
            }
        });
        changes
    }
}
