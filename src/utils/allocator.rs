use serde::{Deserialize, Serialize};

use crate::core::body::Body;

/// Stable identifier for a body, tagged with the generation of the set that issued it.
///
/// Bodies are only ever removed in bulk, so the generation changes on every
/// [`BodySet::clear`] and handles issued before the clear stop resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct BodyHandle {
    index: usize,
    generation: u32,
}

impl BodyHandle {
    pub fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Dense, insertion-ordered body storage owned by a world.
#[derive(Debug, Default, Clone)]
pub struct BodySet {
    bodies: Vec<Body>,
    generation: u32,
}

impl BodySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, body: Body) -> BodyHandle {
        let index = self.bodies.len();
        self.bodies.push(body);
        BodyHandle::new(index, self.generation)
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        if self.is_valid(handle) {
            self.bodies.get(handle.index)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        if self.is_valid(handle) {
            self.bodies.get_mut(handle.index)
        } else {
            None
        }
    }

    /// Borrows two distinct bodies mutably, in the order requested.
    pub fn pair_mut(&mut self, first: usize, second: usize) -> Option<(&mut Body, &mut Body)> {
        if first == second || first.max(second) >= self.bodies.len() {
            return None;
        }

        let (low, high, flipped) = if first < second {
            (first, second, false)
        } else {
            (second, first, true)
        };

        let (left, right) = self.bodies.split_at_mut(high);
        let low_body = &mut left[low];
        let high_body = &mut right[0];

        if flipped {
            Some((high_body, low_body))
        } else {
            Some((low_body, high_body))
        }
    }

    /// Drops every body and invalidates all outstanding handles.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn handles(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        (0..self.bodies.len()).map(|index| BodyHandle::new(index, self.generation))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Body> {
        self.bodies.iter_mut()
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    fn is_valid(&self, handle: BodyHandle) -> bool {
        handle.generation == self.generation && handle.index < self.bodies.len()
    }
}
