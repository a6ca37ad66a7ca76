/// Append-only buffer that doubles its capacity when full.
///
/// Used for the mesh streams; there is no shrink, the whole buffer is
/// released at once.
#[derive(Debug, Clone, Default)]
pub struct GrowableBuffer<T> {
    data: Vec<T>,
}

impl<T: Copy> GrowableBuffer<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        if self.data.len() == self.data.capacity() {
            let grow_to = (self.data.capacity() * 2).max(1);
            self.data.reserve_exact(grow_to - self.data.len());
        }
        self.data.push(value);
    }

    pub fn extend_from_slice(&mut self, values: &[T]) {
        for &value in values {
            self.push(value);
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn release(self) {}
}
