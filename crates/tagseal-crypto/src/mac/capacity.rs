//! Output buffer capacity resolution
//!
//! Answers the two questions the engine has about a destination buffer:
//! how many bytes it can hold, and how to report the number actually
//! written. Both answers depend on the buffer's capability flags.

use tagseal_buffer::Buffer;

/// Number of bytes `buffer` can absorb as a write destination.
///
/// A capacity-tracked buffer is sized by its allocated capacity. An
/// untracked buffer reports no spare room of its own, so its current
/// logical length is treated as the usable size; callers supplying such a
/// buffer are responsible for the length already matching what the write
/// requires.
pub(crate) fn usable_capacity(buffer: &Buffer) -> usize {
    if buffer.has_capacity_tracking() { buffer.capacity() } else { buffer.len() }
}

/// Record that `written` bytes now constitute the buffer's logical content.
///
/// No-op for buffers without length tracking; their length metadata is
/// assumed fixed by the caller.
pub(crate) fn record_written(buffer: &mut Buffer, written: usize) {
    if buffer.has_length_tracking() {
        buffer.set_len(written);
    }
}

#[cfg(test)]
mod tests {
    use tagseal_buffer::Capabilities;

    use super::*;

    #[test]
    fn tracked_buffer_is_sized_by_capacity() {
        // Freshly allocated: capacity 32, logical length 0
        let buffer = Buffer::alloc(32).unwrap();
        assert_eq!(usable_capacity(&buffer), 32);
    }

    #[test]
    fn untracked_buffer_is_sized_by_length() {
        let buffer = Buffer::from_vec(vec![0; 20]);
        assert_eq!(usable_capacity(&buffer), 20);
    }

    #[test]
    fn record_written_updates_tracked_length() {
        let mut buffer = Buffer::alloc(64).unwrap();
        record_written(&mut buffer, 48);
        assert_eq!(buffer.len(), 48);
    }

    #[test]
    fn record_written_leaves_untracked_length_alone() {
        let caps = Capabilities { writable: true, capacity_tracked: true, length_tracked: false };
        let mut buffer = Buffer::alloc(64).unwrap().with_capabilities(caps);
        record_written(&mut buffer, 48);
        assert_eq!(buffer.len(), 0);
    }
}
