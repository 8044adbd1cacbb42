//! Object motion
//!
//! Decides where shapes are before they are rasterized. Two flavours:
//!
//!   - [`MotionTable`]: struct-of-arrays acceleration / velocity / position /
//!     dimension tables, Euler-integrated per object
//!   - [`Sprite`]: a rectangle bouncing inside the canvas bounds

use std::ops::Range;

use log::trace;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::geometry::Rect;

/// Components per vector (x, y, z)
pub const CHANNELS: usize = 3;

pub type Vec3 = [f32; CHANNELS];

/// Identifier issued by [`MotionTable::spawn`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

impl ObjectId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Starting state of a spawned object
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Initial {
    pub acceleration: Vec3,
    pub velocity: Vec3,
    pub position: Vec3,
    pub dimension: Vec3,
}

/// Result of integrating one object over a time step
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct NextState {
    pub acceleration: Vec3,
    pub velocity: Vec3,
    pub position: Vec3,
    pub next_position: Vec3,
    pub dimension: Vec3,
}

/// Per-object attributes stored as parallel flat arrays
///
/// Object `id` owns elements `id * CHANNELS .. id * CHANNELS + CHANNELS` of
/// every table. The maximum object count is fixed at construction.
#[derive(Debug, Clone)]
pub struct MotionTable {
    acceleration: Vec<f32>,
    velocity: Vec<f32>,
    position: Vec<f32>,
    staged: Vec<f32>,
    dimension: Vec<f32>,
    len: usize,
    max_objects: usize,
}

impl MotionTable {
    pub fn new(max_objects: usize) -> Self {
        let n = max_objects * CHANNELS;
        MotionTable {
            acceleration: vec![0.0; n],
            velocity: vec![0.0; n],
            position: vec![0.0; n],
            staged: vec![0.0; n],
            dimension: vec![0.0; n],
            len: 0,
            max_objects,
        }
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn capacity(&self) -> usize {
        self.max_objects
    }

    /// Add an object, returning its id
    pub fn spawn(&mut self, init: Initial) -> Result<ObjectId> {
        if self.len == self.max_objects {
            return Err(Error::TableFull { capacity: self.max_objects });
        }
        let id = ObjectId(self.len);
        self.len += 1;
        self.staged[range(id)].copy_from_slice(&init.position);
        let mut e = self.entity_mut(id)?;
        e.set_acceleration(init.acceleration);
        e.set_velocity(init.velocity);
        e.set_position(init.position);
        e.set_dimension(init.dimension);
        Ok(id)
    }

    fn check(&self, id: ObjectId) -> Result<()> {
        if id.0 >= self.len {
            return Err(Error::UnknownObject { id: id.0 });
        }
        Ok(())
    }

    /// Read-only view of one object
    pub fn entity(&self, id: ObjectId) -> Result<Entity<'_>> {
        self.check(id)?;
        Ok(Entity { table: self, id })
    }

    /// Mutable view of one object
    pub fn entity_mut(&mut self, id: ObjectId) -> Result<EntityMut<'_>> {
        self.check(id)?;
        Ok(EntityMut { table: self, id })
    }

    /// Integrate one object over `dt` without changing it
    ///
    /// velocity' = acceleration * dt + velocity,
    /// position' = velocity' * dt + position
    pub fn next_state(&self, id: ObjectId, dt: f32) -> Result<NextState> {
        let e = self.entity(id)?;
        let (acceleration, velocity, position) = (e.acceleration(), e.velocity(), e.position());
        let mut next = NextState {
            acceleration,
            position,
            dimension: e.dimension(),
            ..NextState::default()
        };
        for c in 0..CHANNELS {
            next.velocity[c] = acceleration[c] * dt + velocity[c];
            next.next_position[c] = next.velocity[c] * dt + position[c];
        }
        Ok(next)
    }

    /// Integrate every object, storing new velocities and staging positions
    ///
    /// Positions change only on [`commit_position`](MotionTable::commit_position).
    pub fn step(&mut self, dt: f32) {
        for i in 0..self.len {
            let id = ObjectId(i);
            if let Ok(next) = self.next_state(id, dt) {
                let r = range(id);
                self.velocity[r.clone()].copy_from_slice(&next.velocity);
                self.staged[r].copy_from_slice(&next.next_position);
            }
        }
        trace!("motion step dt {} over {} objects", dt, self.len);
    }

    /// Make the staged position of `id` its current position
    pub fn commit_position(&mut self, id: ObjectId) -> Result<()> {
        self.check(id)?;
        let r = range(id);
        self.position[r.clone()].copy_from_slice(&self.staged[r]);
        Ok(())
    }
}

/// Read-only view of one object's attributes
#[derive(Debug, Copy, Clone)]
pub struct Entity<'a> {
    table: &'a MotionTable,
    id: ObjectId,
}

fn range(id: ObjectId) -> Range<usize> {
    id.0 * CHANNELS..id.0 * CHANNELS + CHANNELS
}

fn read3(v: &[f32], id: ObjectId) -> Vec3 {
    let i = id.0 * CHANNELS;
    [v[i], v[i + 1], v[i + 2]]
}

impl<'a> Entity<'a> {
    pub fn id(&self) -> ObjectId {
        self.id
    }
    pub fn acceleration(&self) -> Vec3 {
        read3(&self.table.acceleration, self.id)
    }
    pub fn velocity(&self) -> Vec3 {
        read3(&self.table.velocity, self.id)
    }
    pub fn position(&self) -> Vec3 {
        read3(&self.table.position, self.id)
    }
    pub fn dimension(&self) -> Vec3 {
        read3(&self.table.dimension, self.id)
    }
}

/// Mutable view of one object's attributes
#[derive(Debug)]
pub struct EntityMut<'a> {
    table: &'a mut MotionTable,
    id: ObjectId,
}

impl<'a> EntityMut<'a> {
    fn range(&self) -> Range<usize> {
        range(self.id)
    }
    pub fn id(&self) -> ObjectId {
        self.id
    }
    pub fn set_acceleration(&mut self, v: Vec3) {
        let r = self.range();
        self.table.acceleration[r].copy_from_slice(&v);
    }
    pub fn set_velocity(&mut self, v: Vec3) {
        let r = self.range();
        self.table.velocity[r].copy_from_slice(&v);
    }
    pub fn set_position(&mut self, v: Vec3) {
        let r = self.range();
        self.table.position[r].copy_from_slice(&v);
    }
    pub fn set_dimension(&mut self, v: Vec3) {
        let r = self.range();
        self.table.dimension[r].copy_from_slice(&v);
    }
}

/// Rectangle moving at constant speed, bouncing off the bounds
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sprite {
    pub rect: Rect,
    pub color: Color,
    /// Pixels per second along x and y
    pub velocity: (f64, f64),
    pos: (f64, f64),
}

impl Sprite {
    pub fn new(rect: Rect, velocity: (f64, f64), color: Color) -> Self {
        Sprite { rect, color, velocity, pos: (rect.x as f64, rect.y as f64) }
    }

    /// Advance by `dt` seconds inside a `bound_w` x `bound_h` area
    ///
    /// On an axis where the move would leave the bounds the velocity is
    /// reversed and the position on that axis is kept.
    pub fn animate(&mut self, dt: f64, bound_w: i64, bound_h: i64) {
        let nx = self.velocity.0 * dt + self.pos.0;
        let ny = self.velocity.1 * dt + self.pos.1;
        let x_collision = nx < 0.0 || nx as i64 + self.rect.w > bound_w;
        let y_collision = ny < 0.0 || ny as i64 + self.rect.h > bound_h;
        if x_collision {
            self.velocity.0 = -self.velocity.0;
        } else {
            self.pos.0 = nx;
        }
        if y_collision {
            self.velocity.1 = -self.velocity.1;
        } else {
            self.pos.1 = ny;
        }
        self.rect.x = self.pos.0 as i64;
        self.rect.y = self.pos.1 as i64;
    }
}
