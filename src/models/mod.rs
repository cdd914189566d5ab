pub mod campaign;
pub mod event;
pub mod heat;
pub mod location;
pub mod settings;
pub mod snapshot;
