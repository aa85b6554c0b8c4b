use crate::core::domain::Identifiable;

pub mod model;

// Person exposes the attributes members and librarians share.
pub trait Person: Identifiable {
    fn name(&self) -> &str;
    fn age(&self) -> u32;
}
