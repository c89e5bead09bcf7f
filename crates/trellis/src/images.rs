//! The image-dimension seam between this core and the asset pipeline.

/// Supplies natural pixel dimensions for image URIs.
///
/// Image loading and decoding happen outside this core, asynchronously. A
/// lookup returning `None` means "not decoded yet": layout proceeds with
/// declared sizes only, and the caller re-renders once dimensions arrive —
/// re-running is idempotent, so nothing here waits.
pub trait ImageDimensionSource {
    /// Natural `(width, height)` in px for a URI, if known.
    fn natural_size(&self, uri: &str) -> Option<(f32, f32)>;
}

/// The "nothing decoded yet" source.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnresolvedImages;

impl ImageDimensionSource for UnresolvedImages {
    fn natural_size(&self, _uri: &str) -> Option<(f32, f32)> {
        None
    }
}

impl<Lookup> ImageDimensionSource for &Lookup
where
    Lookup: ImageDimensionSource + ?Sized,
{
    fn natural_size(&self, uri: &str) -> Option<(f32, f32)> {
        (**self).natural_size(uri)
    }
}
