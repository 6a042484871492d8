use super::constants::{NEON_CYAN, NEON_MAGENTA, NEON_PURPLE};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3, Vec4};
use rand::Rng;

// Scene layout
pub const SCENE_BACKGROUND: &str = "#0d0d1a";
pub const CAMERA_DISTANCE: f32 = 10.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const AUTO_ROTATE_SPEED: f32 = 0.5; // 2.0 == one orbit per 30 s
pub const REFERENCE_FPS: f32 = 60.0;
pub const GROUP_ROT_X_PER_FRAME: f32 = 0.0001;
pub const GROUP_ROT_Y_PER_FRAME: f32 = 0.0003;

// Star field
pub const STAR_COUNT: usize = 2000;
pub const STAR_RADIUS: f32 = 400.0;
pub const STAR_DEPTH: f32 = 100.0;
pub const STAR_SIZE_PX: f32 = 1.6;
pub const STAR_TWINKLE_SPEED: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolidKind {
    Icosahedron,
    Octahedron,
    Tetrahedron,
}

impl SolidKind {
    /// Unit-radius vertices of the solid.
    pub fn vertices(self) -> Vec<Vec3> {
        let raw: Vec<Vec3> = match self {
            SolidKind::Icosahedron => {
                let phi = (1.0 + 5.0_f32.sqrt()) * 0.5;
                let mut v = Vec::with_capacity(12);
                for &a in &[-1.0, 1.0] {
                    for &b in &[-phi, phi] {
                        v.push(Vec3::new(a, b, 0.0));
                        v.push(Vec3::new(0.0, a, b));
                        v.push(Vec3::new(b, 0.0, a));
                    }
                }
                v
            }
            SolidKind::Octahedron => vec![
                Vec3::X,
                Vec3::NEG_X,
                Vec3::Y,
                Vec3::NEG_Y,
                Vec3::Z,
                Vec3::NEG_Z,
            ],
            SolidKind::Tetrahedron => vec![
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(1.0, -1.0, -1.0),
                Vec3::new(-1.0, 1.0, -1.0),
                Vec3::new(-1.0, -1.0, 1.0),
            ],
        };
        raw.into_iter().map(Vec3::normalize).collect()
    }

    /// Wireframe edges: every vertex pair at the minimal mutual distance.
    pub fn edges(self) -> Vec<(usize, usize)> {
        let verts = self.vertices();
        let mut min = f32::MAX;
        for i in 0..verts.len() {
            for j in (i + 1)..verts.len() {
                min = min.min(verts[i].distance(verts[j]));
            }
        }
        let mut edges = Vec::new();
        for i in 0..verts.len() {
            for j in (i + 1)..verts.len() {
                if verts[i].distance(verts[j]) <= min * 1.001 {
                    edges.push((i, j));
                }
            }
        }
        edges
    }
}

/// A floating wireframe solid in the background group.
#[derive(Clone, Debug)]
pub struct Solid {
    pub kind: SolidKind,
    pub position: Vec3,
    pub scale: f32,
    pub color: &'static str,
    pub opacity: f32,
    pub float_speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    vertices: Vec<Vec3>,
    edges: Vec<(usize, usize)>,
}

impl Solid {
    pub fn new(
        kind: SolidKind,
        position: Vec3,
        scale: f32,
        color: &'static str,
        opacity: f32,
        float: (f32, f32, f32),
    ) -> Self {
        Self {
            kind,
            position,
            scale,
            color,
            opacity,
            float_speed: float.0,
            rotation_intensity: float.1,
            float_intensity: float.2,
            vertices: kind.vertices(),
            edges: kind.edges(),
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Local float transform: gentle wobble plus vertical bob.
    pub fn float_matrix(&self, t_sec: f32) -> Mat4 {
        let a = t_sec / 4.0 * self.float_speed;
        let rot = Quat::from_euler(
            EulerRot::XYZ,
            a.cos() / 8.0 * self.rotation_intensity,
            a.sin() / 8.0 * self.rotation_intensity,
            a.sin() / 20.0 * self.rotation_intensity,
        );
        let bob = a.sin() / 10.0 * self.float_intensity;
        Mat4::from_translation(Vec3::new(0.0, bob, 0.0)) * Mat4::from_quat(rot)
    }

    pub fn model_matrix(&self, group: Mat4, t_sec: f32) -> Mat4 {
        group
            * self.float_matrix(t_sec)
            * Mat4::from_translation(self.position)
            * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub position: Vec3,
    pub size: f32,
    pub phase: f32,
}

/// Projected wireframe of one solid.
#[derive(Clone, Debug)]
pub struct SolidFrame {
    pub color: &'static str,
    pub opacity: f32,
    pub segments: Vec<[Vec2; 2]>,
}

#[derive(Clone, Copy, Debug)]
pub struct StarDot {
    pub position: Vec2,
    pub size: f32,
    pub alpha: f32,
}

#[derive(Clone, Debug, Default)]
pub struct SceneFrame {
    pub solids: Vec<SolidFrame>,
    pub stars: Vec<StarDot>,
}

/// Slowly rotating backdrop: three floating wireframes and a star field,
/// watched by an auto-orbiting camera.
#[derive(Clone, Debug)]
pub struct BackgroundScene {
    pub solids: Vec<Solid>,
    pub stars: Vec<Star>,
    pub group_rotation: Vec2,
    pub orbit_angle: f32,
    pub elapsed: f32,
}

impl BackgroundScene {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let solids = vec![
            Solid::new(
                SolidKind::Icosahedron,
                Vec3::new(0.0, 0.0, -5.0),
                0.3,
                NEON_CYAN,
                0.15,
                (0.5, 0.3, 0.2),
            ),
            Solid::new(
                SolidKind::Octahedron,
                Vec3::new(5.0, 3.0, -8.0),
                0.2,
                NEON_MAGENTA,
                0.1,
                (0.3, 0.2, 0.15),
            ),
            Solid::new(
                SolidKind::Tetrahedron,
                Vec3::new(-5.0, -2.0, -10.0),
                0.25,
                NEON_PURPLE,
                0.12,
                (0.4, 0.25, 0.18),
            ),
        ];
        let stars = (0..STAR_COUNT)
            .map(|_| {
                // Uniform direction on the sphere
                let z: f32 = rng.gen_range(-1.0..1.0);
                let theta: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
                let r_xy = (1.0 - z * z).max(0.0).sqrt();
                let dir = Vec3::new(r_xy * theta.cos(), r_xy * theta.sin(), z);
                let radius = STAR_RADIUS + rng.gen_range(0.0..STAR_DEPTH);
                Star {
                    position: dir * radius,
                    size: STAR_SIZE_PX * rng.gen_range(0.5..1.5),
                    phase: rng.gen_range(0.0..std::f32::consts::TAU),
                }
            })
            .collect();
        Self {
            solids,
            stars,
            group_rotation: Vec2::ZERO,
            orbit_angle: 0.0,
            elapsed: 0.0,
        }
    }

    /// Advance rotations by `dt_sec`. Per-frame rates are scaled to
    /// `REFERENCE_FPS` so speed does not depend on the display refresh.
    pub fn advance(&mut self, dt_sec: f32) {
        if !dt_sec.is_finite() || dt_sec <= 0.0 {
            return;
        }
        let frames = dt_sec * REFERENCE_FPS;
        self.group_rotation.x += GROUP_ROT_X_PER_FRAME * frames;
        self.group_rotation.y += GROUP_ROT_Y_PER_FRAME * frames;
        let orbit_rate = std::f32::consts::TAU / 60.0 * AUTO_ROTATE_SPEED;
        self.orbit_angle = (self.orbit_angle + orbit_rate * dt_sec) % std::f32::consts::TAU;
        self.elapsed += dt_sec;
    }

    pub fn camera_eye(&self) -> Vec3 {
        Vec3::new(
            CAMERA_DISTANCE * self.orbit_angle.sin(),
            0.0,
            CAMERA_DISTANCE * self.orbit_angle.cos(),
        )
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(
            CAMERA_FOVY_DEG.to_radians(),
            aspect,
            CAMERA_ZNEAR,
            CAMERA_ZFAR,
        );
        let view = Mat4::look_at_rh(self.camera_eye(), Vec3::ZERO, Vec3::Y);
        proj * view
    }

    fn group_matrix(&self) -> Mat4 {
        Mat4::from_euler(
            EulerRot::XYZ,
            self.group_rotation.x,
            self.group_rotation.y,
            0.0,
        )
    }

    /// Project the scene onto a `width` x `height` pixel surface.
    pub fn project(&self, width: f32, height: f32) -> SceneFrame {
        if width <= 0.0 || height <= 0.0 {
            return SceneFrame::default();
        }
        let vp = self.view_projection(width / height);
        let group = self.group_matrix();

        let solids = self
            .solids
            .iter()
            .map(|solid| {
                let mvp = vp * solid.model_matrix(group, self.elapsed);
                let projected: Vec<Option<Vec2>> = solid
                    .vertices
                    .iter()
                    .map(|v| project_point(mvp, *v, width, height))
                    .collect();
                let segments = solid
                    .edges
                    .iter()
                    .filter_map(|&(a, b)| Some([projected[a]?, projected[b]?]))
                    .collect();
                SolidFrame {
                    color: solid.color,
                    opacity: solid.opacity,
                    segments,
                }
            })
            .collect();

        let stars = self
            .stars
            .iter()
            .filter_map(|s| {
                let position = project_point(vp, s.position, width, height)?;
                let on_screen = (0.0..=width).contains(&position.x)
                    && (0.0..=height).contains(&position.y);
                on_screen.then(|| StarDot {
                    position,
                    size: s.size,
                    alpha: 0.6 + 0.4 * (self.elapsed * STAR_TWINKLE_SPEED + s.phase).sin(),
                })
            })
            .collect();

        SceneFrame { solids, stars }
    }
}

/// Clip-space projection to pixel coordinates; `None` behind the camera.
pub fn project_point(mvp: Mat4, p: Vec3, width: f32, height: f32) -> Option<Vec2> {
    let clip = mvp * Vec4::new(p.x, p.y, p.z, 1.0);
    if clip.w <= 1e-6 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec2::new(
        (ndc.x * 0.5 + 0.5) * width,
        (1.0 - (ndc.y * 0.5 + 0.5)) * height,
    ))
}
