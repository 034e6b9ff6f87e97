pub mod clock;
pub mod lateness;
pub mod ledger;
pub mod retention;
pub mod selfie;
pub mod settings;
pub mod templates;
