mod game_record;
mod guess;
mod score;
mod secret;
mod timer_state;

pub use game_record::{GameRecord, Summary, DATE_FORMAT};
pub use guess::{Guess, ValidationError};
pub use score::Score;
pub use secret::{Secret, SECRET_LEN};
pub use timer_state::TimerState;
