use log::{debug, trace, warn};

use crate::{
    collision::{detection, Contact},
    math::vec2::Vec2,
    objects::{CollisionEvent, RigidBody, COLLISION_EVENT},
};
use super::config::WorldConfig;

/// Identifies a body inside a [`PhysicsWorld`]. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(u64);

impl BodyHandle {
    #[cfg(test)]
    pub(crate) fn from_raw(raw: u64) -> Self {
        BodyHandle(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Owns the bodies and advances them in fixed, synchronous steps.
///
/// Collision listeners run in-line during [`PhysicsWorld::step`]. They only
/// see a [`CollisionEvent`], so the body collection cannot change under the
/// step's iteration.
#[derive(Debug, Default)]
pub struct PhysicsWorld {
    pub config: WorldConfig,
    bodies: Vec<RigidBody>,
    // Parallel to `bodies`; strictly increasing because handles are issued in insertion order.
    handles: Vec<BodyHandle>,
    next_handle: u64,
    // Contacts resolved by the last step
    contacts: Vec<Contact>,
}

impl PhysicsWorld {
    /// Creates a new, empty physics world with default settings.
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    pub fn with_config(config: WorldConfig) -> Self {
        Self {
            config,
            bodies: Vec::new(),
            handles: Vec::new(),
            next_handle: 0,
            contacts: Vec::new(),
        }
    }

    pub fn gravity(&self) -> Vec2 {
        self.config.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.config.gravity = gravity;
    }

    /// Adds a rigid body to the world and returns its handle.
    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        let handle = BodyHandle(self.next_handle);
        self.next_handle += 1;
        debug!("add body {:?}: {:?} at {:?}", handle, body.shape().kind(), body.position);
        self.bodies.push(body);
        self.handles.push(handle);
        handle
    }

    /// Removes a body, keeping the order of the others. Unknown handles are ignored.
    pub fn remove_body(&mut self, handle: BodyHandle) -> Option<RigidBody> {
        let index = self.index_of(handle)?;
        self.handles.remove(index);
        debug!("remove body {:?}", handle);
        Some(self.bodies.remove(index))
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.index_of(handle).is_some()
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.index_of(handle).map(|i| &self.bodies[i])
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.index_of(handle).map(move |i| &mut self.bodies[i])
    }

    /// Bodies in insertion order.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> {
        self.handles.iter().copied().zip(self.bodies.iter())
    }

    pub fn bodies_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut RigidBody)> {
        self.handles.iter().copied().zip(self.bodies.iter_mut())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Contacts resolved during the last call to [`PhysicsWorld::step`].
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    fn index_of(&self, handle: BodyHandle) -> Option<usize> {
        self.handles.binary_search(&handle).ok()
    }

    /// Advances the simulation by one time step `dt` and returns the contacts it resolved.
    ///
    /// Order: gravity, integration, detection, resolution and `"collision"` events.
    /// A non-positive `dt` leaves the world untouched.
    pub fn step(&mut self, dt: f64) -> &[Contact] {
        self.contacts.clear();
        if !(dt > 0.0 && dt.is_finite()) {
            if dt != 0.0 {
                warn!("ignoring step with invalid dt {}", dt);
            }
            return &self.contacts;
        }

        // 1. Apply gravity
        let gravity = self.config.gravity;
        for body in self.bodies.iter_mut().filter(|b| !b.is_static()) {
            let weight = gravity * body.mass();
            body.apply_force(weight);
        }

        // 2. Integrate motion
        for body in self.bodies.iter_mut() {
            body.integrate(dt);
        }

        // 3. Collision detection and resolution
        let pairs = self.find_contacts();
        for &(i, j, contact) in &pairs {
            self.resolve_contact(i, j, &contact);
        }
        self.contacts = pairs.into_iter().map(|(_, _, contact)| contact).collect();

        trace!("step dt={} bodies={} contacts={}", dt, self.bodies.len(), self.contacts.len());
        &self.contacts
    }

    /// Runs the narrow phase over every pair at the current positions without resolving anything.
    pub fn detect_collisions(&self) -> Vec<Contact> {
        self.find_contacts().into_iter().map(|(_, _, contact)| contact).collect()
    }

    /// Exhaustive O(n²) pass over unordered pairs, in insertion order.
    fn find_contacts(&self) -> Vec<(usize, usize, Contact)> {
        let mut found = Vec::new();
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let body_a = &self.bodies[i];
                let body_b = &self.bodies[j];

                // Nothing to resolve between two immovable bodies
                if body_a.inv_mass() == 0.0 && body_b.inv_mass() == 0.0 {
                    continue;
                }

                if let Some(p) = detection::check_bodies(body_a, body_b) {
                    let contact = Contact {
                        body_a: self.handles[i],
                        body_b: self.handles[j],
                        normal: p.normal,
                        depth: p.depth,
                    };
                    found.push((i, j, contact));
                }
            }
        }
        found
    }

    /// Positional correction, impulse, then a `"collision"` event to each body.
    /// `i` must be less than `j`.
    fn resolve_contact(&mut self, i: usize, j: usize, contact: &Contact) {
        let percent = self.config.correction_percent;
        let slop = self.config.correction_slop;

        // Get mutable references using split_at_mut to satisfy the borrow checker
        let (head, tail) = self.bodies.split_at_mut(j);
        let body_a = &mut head[i];
        let body_b = &mut tail[0];

        let inv_a = body_a.inv_mass();
        let inv_b = body_b.inv_mass();
        let total_inv_mass = inv_a + inv_b;
        if total_inv_mass == 0.0 {
            return;
        }
        let normal = contact.normal;

        // Positional correction, split by inverse mass share
        let correction_depth = (contact.depth - slop).max(0.0);
        if correction_depth > 0.0 {
            let correction = normal * (correction_depth / total_inv_mass * percent);
            if body_a.is_dynamic() {
                body_a.position -= correction * inv_a;
            }
            if body_b.is_dynamic() {
                body_b.position += correction * inv_b;
            }
        }

        // Velocity resolution
        let velocity_along_normal = (body_b.velocity - body_a.velocity).dot(normal);
        if velocity_along_normal < 0.0 {
            // The less bouncy body dominates
            let e = body_a.restitution().min(body_b.restitution());
            let magnitude = -(1.0 + e) * velocity_along_normal / total_inv_mass;
            let impulse = normal * magnitude;
            if body_a.is_dynamic() {
                body_a.velocity -= impulse * inv_a;
            }
            if body_b.is_dynamic() {
                body_b.velocity += impulse * inv_b;
            }
            debug!(
                "contact {:?}/{:?}: depth={:.4} vn={:.4} impulse={:.4}",
                contact.body_a, contact.body_b, contact.depth, velocity_along_normal, magnitude
            );
        } else {
            debug!(
                "contact {:?}/{:?}: depth={:.4}, already separating",
                contact.body_a, contact.body_b, contact.depth
            );
        }

        body_a.emit(
            COLLISION_EVENT,
            &CollisionEvent { other: contact.body_b, normal, depth: contact.depth },
        );
        body_b.emit(
            COLLISION_EVENT,
            &CollisionEvent { other: contact.body_a, normal: -normal, depth: contact.depth },
        );
    }
}
