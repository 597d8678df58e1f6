/// Port for generating aggregate identifiers.
///
/// Implementations produce globally unique, lexically sortable tokens.
/// The core never derives identifiers itself and treats the returned
/// string as opaque.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}
