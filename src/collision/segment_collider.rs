use crate::config::DEFAULT_SEGMENT_CAPACITY;
use crate::error::{ColliderError, StreamError};
use crate::io::stream::RecordStream;
use crate::math::vec2::Vec2;
use crate::shapes::LineSegment;
use log::{debug, warn};

/// A bounded, append-only list of line segments describing a static obstacle.
///
/// Storage for every segment is reserved up front, so appends never reallocate
/// and an overrun is reported instead of growing past `capacity`.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentCollider {
    segments: Vec<LineSegment>,
    capacity: usize,
}

impl SegmentCollider {
    /// Creates an empty store with the default capacity.
    pub fn new() -> Result<Self, ColliderError> {
        Self::with_capacity(DEFAULT_SEGMENT_CAPACITY)
    }

    /// Creates an empty store able to hold `capacity` segments.
    /// Fails with [`ColliderError::Allocation`] if the storage cannot be reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self, ColliderError> {
        let mut segments = Vec::new();
        segments
            .try_reserve_exact(capacity)
            .map_err(|_| ColliderError::Allocation)?;
        Ok(Self { segments, capacity })
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.segments.len()
    }

    /// Appends a segment and returns its index.
    /// Degenerate (zero-length) segments are accepted here and skipped by the detector.
    pub fn append_segment(&mut self, start: Vec2, end: Vec2) -> Result<usize, ColliderError> {
        if self.segments.len() >= self.capacity {
            warn!(
                "rejecting segment {:?} -> {:?}: collider is full ({} segments)",
                start, end, self.capacity
            );
            return Err(ColliderError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.segments.push(LineSegment::new(start, end));
        Ok(self.segments.len() - 1)
    }

    /// Reads a segment count followed by that many `(start, end)` point pairs
    /// and appends them in stream order. Returns the number of segments added.
    ///
    /// The whole definition is read and checked against the remaining capacity
    /// before anything is appended; on error the store is left untouched.
    pub fn populate_from<S: RecordStream + ?Sized>(
        &mut self,
        stream: &mut S,
    ) -> Result<usize, ColliderError> {
        let count = stream.read_int()?;
        let count = usize::try_from(count).map_err(|_| StreamError::NegativeCount(count))?;

        if count > self.remaining() {
            warn!(
                "segment definition declares {} segments but only {} slots remain",
                count,
                self.remaining()
            );
            return Err(ColliderError::NotEnoughCapacity {
                requested: count,
                remaining: self.remaining(),
            });
        }

        let mut pending = Vec::with_capacity(count);
        for _ in 0..count {
            let start = stream.read_vec2()?;
            let end = stream.read_vec2()?;
            pending.push((start, end));
        }

        for (start, end) in pending {
            self.append_segment(start, end)?;
        }
        debug!("populated {} segments ({} total)", count, self.len());
        Ok(count)
    }
}
