use crate::core::GrowVec;

/// Iterator over the elements of a `GrowVec`, front to back
pub struct GrowVecIter<'a, T> {
    items: &'a [T],
    front: usize,
}

impl<'a, T> Iterator for GrowVecIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.front)?;
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for GrowVecIter<'_, T> {}

impl<T> Clone for GrowVecIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            front: self.front,
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = GrowVecIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        GrowVecIter {
            items: self.as_slice(),
            front: 0,
        }
    }
}

/// Iterator over the elements of a `GrowVec`, back to front
pub struct GrowVecRevIter<'a, T> {
    items: &'a [T],
    back: usize,
}

impl<'a, T> GrowVecRevIter<'a, T> {
    pub(crate) fn new(vec: &'a GrowVec<T>) -> Self {
        let items = vec.as_slice();
        Self {
            items,
            back: items.len(),
        }
    }
}

impl<'a, T> Iterator for GrowVecRevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.back == 0 {
            return None;
        }
        self.back -= 1;
        self.items.get(self.back)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.back, Some(self.back))
    }
}

impl<T> ExactSizeIterator for GrowVecRevIter<'_, T> {}

impl<T> Clone for GrowVecRevIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            back: self.back,
        }
    }
}
