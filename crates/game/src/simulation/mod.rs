mod session;
mod tick;

pub use session::Session;
pub use tick::FixedTimestep;
