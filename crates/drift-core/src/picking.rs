use crate::camera::{CameraRig, Viewport};
use glam::{Vec2, Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

#[inline]
/// Compute a world-space ray from normalized device coordinates.
///
/// The ray starts at the camera eye and passes through the far-plane point
/// under `ndc`. The direction is normalized.
pub fn ndc_to_world_ray(camera: &CameraRig, ndc: Vec2) -> Ray {
    let inv = camera.view_projection().inverse();
    let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    Ray {
        origin: camera.eye,
        direction: (p1 - camera.eye).normalize(),
    }
}

/// Hit point of `ray` on the plane `z = plane_z`.
///
/// `None` when the ray runs parallel to the plane or the plane lies behind
/// the ray origin.
#[inline]
pub fn ray_plane_z(ray: &Ray, plane_z: f32) -> Option<Vec3> {
    if ray.direction.z.abs() < 1e-6 {
        return None;
    }
    let t = (plane_z - ray.origin.z) / ray.direction.z;
    (t >= 0.0).then(|| ray.origin + ray.direction * t)
}

/// Project a pointer position (viewport pixels) onto the plane `z = plane_z`.
pub fn pointer_to_plane(
    camera: &CameraRig,
    viewport: Viewport,
    x: f32,
    y: f32,
    plane_z: f32,
) -> Option<Vec3> {
    let ndc = viewport.to_ndc(x, y)?;
    ray_plane_z(&ndc_to_world_ray(camera, ndc), plane_z)
}
