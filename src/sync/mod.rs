pub mod barrier;
pub mod round;

pub use self::barrier::Barrier;
pub use self::round::RoundState;
