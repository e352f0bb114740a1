mod root;
mod state;

pub(crate) use state::LoadingState;

pub use root::App;
