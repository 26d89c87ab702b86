//! Two owned values that take turns being the current one.

/// A pair of values with a "current" and a "next" role.
///
/// The values never move; [`swap_roles`](Self::swap_roles) only flips which
/// one is current.
#[derive(Clone, Debug)]
pub struct DoubleBuffer<T> {
    buffers: [T; 2],
    current: usize,
}

impl<T> DoubleBuffer<T> {
    pub fn new(current: T, next: T) -> Self {
        DoubleBuffer {
            buffers: [current, next],
            current: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> &T {
        &self.buffers[self.current]
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut T {
        &mut self.buffers[self.current]
    }

    #[inline]
    pub fn next(&self) -> &T {
        &self.buffers[1 - self.current]
    }

    #[inline]
    pub fn next_mut(&mut self) -> &mut T {
        &mut self.buffers[1 - self.current]
    }

    /// The current value for reading and the next one for writing, at once.
    #[inline]
    pub fn split_mut(&mut self) -> (&T, &mut T) {
        let [first, second] = &mut self.buffers;
        if self.current == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        }
    }

    /// Both values, current first.
    #[inline]
    pub fn both_mut(&mut self) -> (&mut T, &mut T) {
        let [first, second] = &mut self.buffers;
        if self.current == 0 {
            (first, second)
        } else {
            (second, first)
        }
    }

    /// Makes the next value current and the current one next.
    #[inline]
    pub fn swap_roles(&mut self) {
        self.current = 1 - self.current;
    }
}
