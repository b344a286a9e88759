use crate::objects::rigid_body::RigidBody;

/// Integrates the rigid body's state forward in time using Semi-Implicit Euler:
/// velocity is updated from the accumulated force first, then position from the
/// new velocity. The force accumulator is cleared afterwards.
pub fn integrate(body: &mut RigidBody, dt: f64) {
    if body.is_static() {
        return;
    }

    // a = F/m = F * inv_m
    body.acceleration = body.force * body.inv_mass();
    // v = v + a*dt
    body.velocity += body.acceleration * dt;
    // p = p + v*dt
    body.position += body.velocity * dt;

    body.clear_accumulators();
}
