mod about;
mod auth;
mod home;
mod plans;
mod profile;
mod routine;
mod trainers;
mod training;

pub use about::About;
pub use auth::{Login, Register};
pub use home::Home;
pub use plans::Plans;
pub use profile::Profile;
pub use routine::Routine;
pub use trainers::Trainers;
pub use training::Training;
