//! Base trait for slice state in MVI architecture.

/// Marker trait for slice state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data the slice owns)
/// - Comparable (PartialEq for detecting changes)
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}
