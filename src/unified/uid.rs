use uuid::Uuid;

/// Source of unique identifiers for result instances.
pub trait UidGenerator {
    fn generate(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UidGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<F: Fn() -> String> UidGenerator for F {
    fn generate(&self) -> String {
        self()
    }
}
