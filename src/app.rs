pub mod events;
pub mod intent;
pub mod state;
