//! Fixed-capacity entity pools
//!
//! All entities live in pools sized once at game start; gameplay never
//! allocates. "Spawning" overwrites a slot in place. Bullets and particles
//! go through a circular write cursor that silently clobbers the oldest slot
//! when the pool wraps while full; that overwrite is the intended exhaustion
//! policy, not an error (and it is tested as such).

/// Asteroid pool capacity
pub const MAX_ASTEROIDS: usize = 50;

/// Bullet pool capacity
pub const MAX_BULLETS: usize = 100;

/// Particle pool capacity
pub const MAX_PARTICLES: usize = 100;

/// A fixed-capacity pool of entity slots.
///
/// Allocated once at construction; the slot count never changes. Slots are
/// addressed by index, never by identity, so a recycled slot can never be
/// reached through a stale reference.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<T>,
}

impl<T: Default> Pool<T> {
    /// Create a pool with `capacity` default-initialized (inactive) slots
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, T::default);
        Self { slots }
    }
}

impl<T> Pool<T> {
    /// Number of slots (fixed for the pool's lifetime)
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// All slots, active or not
    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    /// All slots, mutable
    pub fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Overwrite the slot at `index` (wrapped into range) with `item`
    pub fn put(&mut self, index: usize, item: T) {
        let capacity = self.slots.len();
        self.slots[index % capacity] = item;
    }
}

/// A [`Pool`] with a circular write cursor.
///
/// `push_overwrite` writes at the cursor and advances it modulo capacity.
/// When every slot is live, the write lands on the oldest entity and
/// replaces it.
#[derive(Debug, Clone)]
pub struct CursorPool<T> {
    pool: Pool<T>,
    cursor: usize,
}

impl<T: Default> CursorPool<T> {
    /// Create a cursor pool with `capacity` inactive slots
    pub fn new(capacity: usize) -> Self {
        Self {
            pool: Pool::new(capacity),
            cursor: 0,
        }
    }
}

impl<T> CursorPool<T> {
    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Current write cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All slots, active or not
    pub fn slots(&self) -> &[T] {
        self.pool.slots()
    }

    /// All slots, mutable
    pub fn slots_mut(&mut self) -> &mut [T] {
        self.pool.slots_mut()
    }

    /// Write `item` at the cursor and advance the cursor by one, wrapping at
    /// capacity. Whatever occupied the slot is lost, live or not.
    pub fn push_overwrite(&mut self, item: T) {
        let index = self.cursor;
        self.pool.put(index, item);
        self.cursor = (self.cursor + 1) % self.pool.capacity();
    }
}
