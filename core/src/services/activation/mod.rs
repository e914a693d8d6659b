//! Activation ticket module
//!
//! One-shot, short-lived tickets that gate account activation. A ticket
//! maps to the subject it was minted for and disappears the moment it is
//! redeemed or its 15 minute lifetime lapses.

mod service;

#[cfg(test)]
mod tests;

pub use service::ActivationManager;
