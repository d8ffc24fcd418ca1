/// A streaming checksum.
///
/// Harness code that compares a device under test against a software model
/// can drive any implementor through this trait.
pub trait Checksum {
    /// Digest type returned by `finalize`.
    type Output;

    /// Absorbs more bytes.
    fn process(&mut self, data: &[u8]) -> &mut Self;

    /// Produces the digest of everything absorbed so far without changing
    /// the running state.
    fn finalize(&self) -> Self::Output;

    /// Restores the initial state.
    fn reset(&mut self) -> &mut Self;

    /// Resets, absorbs `data` and returns the digest.
    fn checksum(&mut self, data: &[u8]) -> Self::Output {
        self.reset().process(data).finalize()
    }
}
