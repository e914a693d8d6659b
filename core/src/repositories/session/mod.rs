pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub mod mock;

pub use mock::MockSessionStore;
pub use r#trait::SessionStore;

#[cfg(test)]
mod tests;
