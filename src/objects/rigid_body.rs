use serde::{Deserialize, Serialize};

use crate::collision::Aabb;
use crate::error::BodyError;
use crate::integration::integrator;
use crate::math::vec2::Vec2;
use crate::shapes::Shape;
use super::events::{CollisionEvent, EventListeners};

/// Construction bundle for a [`RigidBody`]. Every field is optional when
/// deserializing; missing ones take the [`Default`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Zero mass means infinite mass (never moved by forces or impulses).
    pub mass: f64,
    pub shape: Shape,
    /// Bounciness in [0, 1].
    pub restitution: f64,
    #[serde(alias = "isStatic")]
    pub is_static: bool,
}

impl Default for BodyConfig {
    fn default() -> Self {
        BodyConfig {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            mass: 1.0,
            shape: Shape::circle(1.0),
            restitution: 0.9,
            is_static: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RigidBody {
    // Geometry, fixed for the body's lifetime
    shape: Shape,

    // Primary state (world space)
    pub position: Vec2,
    pub velocity: Vec2,
    /// Acceleration from the last integration step.
    pub acceleration: Vec2,

    // Accumulator for forces applied during a time step
    pub force: Vec2,

    // Physical properties
    mass: f64,
    inv_mass: f64, // 1.0 / mass (0.0 for static or massless)
    restitution: f64,
    is_static: bool,

    listeners: EventListeners,
}

impl RigidBody {
    /// Creates a body from `config`, panicking on invalid mass or restitution.
    pub fn new(config: BodyConfig) -> Self {
        Self::try_new(config).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(config: BodyConfig) -> Result<Self, BodyError> {
        validate_mass(config.mass)?;
        validate_restitution(config.restitution)?;

        Ok(Self {
            shape: config.shape,
            position: config.position,
            velocity: if config.is_static { Vec2::ZERO } else { config.velocity },
            acceleration: Vec2::ZERO,
            force: Vec2::ZERO,
            mass: config.mass,
            inv_mass: inverse_mass(config.mass, config.is_static),
            restitution: config.restitution,
            is_static: config.is_static,
            listeners: EventListeners::new(),
        })
    }

    /// Creates a dynamic body of the given mass at the origin.
    pub fn with_shape(mass: f64, shape: Shape) -> Self {
        Self::new(BodyConfig { mass, shape, ..BodyConfig::default() })
    }

    /// Creates a static (immovable) body at `position`.
    pub fn new_static(shape: Shape, position: Vec2) -> Self {
        Self::new(BodyConfig { shape, position, is_static: true, ..BodyConfig::default() })
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// 0.0 for static or massless bodies.
    pub fn inv_mass(&self) -> f64 {
        self.inv_mass
    }

    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// True when impulses and corrections can move this body.
    pub fn is_dynamic(&self) -> bool {
        self.inv_mass > 0.0
    }

    pub fn set_mass(&mut self, mass: f64) -> Result<(), BodyError> {
        validate_mass(mass)?;
        self.mass = mass;
        self.inv_mass = inverse_mass(mass, self.is_static);
        Ok(())
    }

    pub fn set_restitution(&mut self, restitution: f64) -> Result<(), BodyError> {
        validate_restitution(restitution)?;
        self.restitution = restitution;
        Ok(())
    }

    /// Marking a body static drops its velocity and pending force.
    pub fn set_static(&mut self, is_static: bool) {
        self.is_static = is_static;
        self.inv_mass = inverse_mass(self.mass, is_static);
        if is_static {
            self.velocity = Vec2::ZERO;
            self.acceleration = Vec2::ZERO;
            self.force = Vec2::ZERO;
        }
    }

    /// Applies a force at the center of mass. Takes effect on the next integration.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Advances this body by `dt` seconds (semi-implicit Euler). Static bodies are untouched.
    pub fn integrate(&mut self, dt: f64) {
        integrator::integrate(self, dt);
    }

    /// Should typically be called after integration in each simulation step.
    pub fn clear_accumulators(&mut self) {
        self.force = Vec2::ZERO;
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.shape.contains_point(point, self.position, 0.0)
    }

    /// Calculates the world-space Axis-Aligned Bounding Box for this body.
    pub fn aabb(&self) -> Aabb {
        self.shape.aabb(self.position)
    }

    /// Moment of inertia of the shape for this body's mass. Not used by the integrator.
    pub fn inertia(&self) -> f64 {
        self.shape.inertia(self.mass)
    }

    /// Registers a callback for a named event, e.g. [`COLLISION_EVENT`](super::COLLISION_EVENT).
    pub fn on<F>(&mut self, event: &str, callback: F)
    where
        F: Fn(&CollisionEvent) + 'static,
    {
        self.listeners.on(event, callback);
    }

    pub fn emit(&self, event: &str, payload: &CollisionEvent) {
        self.listeners.emit(event, payload);
    }

    pub fn listeners(&self) -> &EventListeners {
        &self.listeners
    }

    pub fn listeners_mut(&mut self) -> &mut EventListeners {
        &mut self.listeners
    }
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new(BodyConfig::default())
    }
}

impl From<Shape> for RigidBody {
    fn from(shape: Shape) -> Self {
        Self::new(BodyConfig { shape, ..BodyConfig::default() })
    }
}

fn inverse_mass(mass: f64, is_static: bool) -> f64 {
    if is_static || mass == 0.0 {
        0.0
    } else {
        1.0 / mass
    }
}

fn validate_mass(mass: f64) -> Result<(), BodyError> {
    if mass.is_finite() && mass >= 0.0 {
        Ok(())
    } else {
        Err(BodyError::InvalidMass(mass))
    }
}

fn validate_restitution(restitution: f64) -> Result<(), BodyError> {
    if (0.0..=1.0).contains(&restitution) {
        Ok(())
    } else {
        Err(BodyError::InvalidRestitution(restitution))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::COLLISION_EVENT;
    use crate::shapes::{Circle, Rectangle};
    use crate::world::BodyHandle;
    use std::cell::RefCell;
    use std::rc::Rc;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_rigidbody_defaults() {
        let rb = RigidBody::default();
        assert_eq!(rb.position, Vec2::ZERO);
        assert_eq!(rb.velocity, Vec2::ZERO);
        assert_eq!(rb.force, Vec2::ZERO);
        assert_eq!(rb.mass(), 1.0);
        assert_eq!(rb.inv_mass(), 1.0);
        assert_eq!(rb.restitution(), 0.9);
        assert!(!rb.is_static());
        assert_eq!(rb.shape(), &Shape::Circle(Circle::new(1.0)));
    }

    #[test]
    fn test_rigidbody_from_config() {
        let rb = RigidBody::new(BodyConfig {
            position: Vec2::new(1.0, 2.0),
            velocity: Vec2::new(-3.0, 0.5),
            mass: 4.0,
            shape: Shape::Rectangle(Rectangle::new(2.0, 1.0)),
            restitution: 0.3,
            is_static: false,
        });
        assert_eq!(rb.position, Vec2::new(1.0, 2.0));
        assert_eq!(rb.velocity, Vec2::new(-3.0, 0.5));
        assert!((rb.inv_mass() - 0.25).abs() < EPSILON);
        assert_eq!(rb.restitution(), 0.3);
        assert!(rb.is_dynamic());
    }

    #[test]
    fn test_rigidbody_zero_mass_is_immovable() {
        let rb = RigidBody::with_shape(0.0, Shape::circle(1.0));
        assert_eq!(rb.mass(), 0.0);
        assert_eq!(rb.inv_mass(), 0.0);
        assert!(!rb.is_static());
        assert!(!rb.is_dynamic());
    }

    #[test]
    fn test_rigidbody_new_static() {
        let rb = RigidBody::new_static(Shape::rectangle(10.0, 1.0), Vec2::new(0.0, 5.0));
        assert!(rb.is_static());
        assert_eq!(rb.inv_mass(), 0.0);
        assert_eq!(rb.mass(), 1.0);
        assert_eq!(rb.position, Vec2::new(0.0, 5.0));
    }

    #[test]
    fn test_static_config_drops_velocity() {
        let rb = RigidBody::new(BodyConfig {
            velocity: Vec2::new(5.0, 5.0),
            is_static: true,
            ..BodyConfig::default()
        });
        assert_eq!(rb.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_set_static_round_trip() {
        let mut rb = RigidBody::with_shape(2.0, Shape::circle(1.0));
        rb.velocity = Vec2::new(1.0, 1.0);
        rb.set_static(true);
        assert_eq!(rb.inv_mass(), 0.0);
        assert_eq!(rb.velocity, Vec2::ZERO);
        rb.set_static(false);
        assert!((rb.inv_mass() - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_try_new_rejects_bad_config() {
        let bad_mass = BodyConfig { mass: -1.0, ..BodyConfig::default() };
        assert_eq!(RigidBody::try_new(bad_mass).unwrap_err(), BodyError::InvalidMass(-1.0));

        let bad_restitution = BodyConfig { restitution: 1.5, ..BodyConfig::default() };
        assert_eq!(
            RigidBody::try_new(bad_restitution).unwrap_err(),
            BodyError::InvalidRestitution(1.5)
        );
    }

    #[test]
    #[should_panic(expected = "restitution")]
    fn test_new_panics_on_bad_config() {
        RigidBody::new(BodyConfig { restitution: -0.1, ..BodyConfig::default() });
    }

    #[test]
    fn test_setters_validate() {
        let mut rb = RigidBody::default();
        assert!(rb.set_mass(f64::NAN).is_err());
        assert_eq!(rb.mass(), 1.0);
        rb.set_mass(4.0).unwrap();
        assert!((rb.inv_mass() - 0.25).abs() < EPSILON);
        assert!(rb.set_restitution(2.0).is_err());
        rb.set_restitution(0.0).unwrap();
        assert_eq!(rb.restitution(), 0.0);
    }

    #[test]
    fn test_apply_force_accumulates() {
        let mut rb = RigidBody::default();
        rb.apply_force(Vec2::new(10.0, 0.0));
        rb.apply_force(Vec2::new(0.0, 5.0));
        assert_eq!(rb.force, Vec2::new(10.0, 5.0));
        assert_eq!(rb.velocity, Vec2::ZERO); // no immediate effect
    }

    #[test]
    fn test_integrate_method() {
        let mut rb = RigidBody::with_shape(2.0, Shape::circle(1.0));
        rb.apply_force(Vec2::new(4.0, 0.0));
        rb.integrate(0.5);
        assert_eq!(rb.acceleration, Vec2::new(2.0, 0.0));
        assert_eq!(rb.velocity, Vec2::new(1.0, 0.0));
        assert_eq!(rb.position, Vec2::new(0.5, 0.0));
        assert_eq!(rb.force, Vec2::ZERO);
    }

    #[test]
    fn test_contains_point_and_aabb_follow_position() {
        let mut rb = RigidBody::from(Shape::rectangle(2.0, 2.0));
        rb.position = Vec2::new(10.0, 0.0);
        assert!(rb.contains_point(Vec2::new(10.5, -0.5)));
        assert!(!rb.contains_point(Vec2::ZERO));
        assert_eq!(rb.aabb().min, Vec2::new(9.0, -1.0));
    }

    #[test]
    fn test_inertia_uses_body_mass() {
        let rb = RigidBody::with_shape(10.0, Shape::circle(2.0));
        assert!((rb.inertia() - 20.0).abs() < EPSILON);
    }

    #[test]
    fn test_on_emit_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut rb = RigidBody::default();
        for tag in ["first", "second"] {
            let order = Rc::clone(&order);
            rb.on(COLLISION_EVENT, move |e| order.borrow_mut().push((tag, e.other)));
        }
        let other = BodyHandle::from_raw(3);
        rb.emit(COLLISION_EVENT, &CollisionEvent { other, normal: Vec2::new(0.0, 1.0), depth: 0.1 });
        assert_eq!(*order.borrow(), vec![("first", other), ("second", other)]);
    }

    #[test]
    fn test_body_config_deserialize_partial() {
        let config: BodyConfig = serde_json::from_str(
            r#"{"position":{"x":1.0,"y":2.0},"isStatic":true,"shape":{"type":"rectangle","width":4.0,"height":1.0}}"#,
        )
        .unwrap();
        assert_eq!(config.position, Vec2::new(1.0, 2.0));
        assert!(config.is_static);
        assert_eq!(config.mass, 1.0);
        assert_eq!(config.restitution, 0.9);
        assert_eq!(config.velocity, Vec2::ZERO);
        assert_eq!(config.shape, Shape::rectangle(4.0, 1.0));

        let empty: BodyConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, BodyConfig::default());
    }
}
