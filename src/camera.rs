use glam::{Mat4, Vec2, Vec3, Vec4};

/// Perspective camera that always looks at the world origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    #[inline]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, Vec3::ZERO, Vec3::Y)
    }

    #[inline]
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_deg.to_radians(),
            self.aspect.max(1e-3),
            self.near,
            self.far,
        )
    }

    #[inline]
    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// World-space ray through a point in normalized device coordinates
    /// (`-1..1`, +Y up).
    ///
    /// Returns `(ray_origin, ray_direction)`.
    pub fn ndc_to_world_ray(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.eye;
        let rd = (p1 - ro).normalize();
        (ro, rd)
    }

    /// Distance along the view axis; used to sort transparent cards.
    #[inline]
    pub fn view_depth(&self, world: Vec3) -> f32 {
        -(self.view() * world.extend(1.0)).z
    }
}
