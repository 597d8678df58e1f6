use uuid::Uuid;

use crate::shared::application::id_generator::IdGenerator;

/// Id generator backed by UUIDv7: globally unique, time-ordered, and
/// lexically sortable in its canonical string form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::now_v7().to_string()
    }
}
