pub mod assignment_handlers;
pub mod evaluation_handlers;
pub mod participant_handlers;
pub mod photo_handlers;
pub mod ranking_handlers;
pub mod user_handlers;

use std::sync::{Mutex, MutexGuard};

use crate::models::assignment::board::AssignmentBoard;

/// All board mutations run under this lock, held across plan + persist +
/// apply, so concurrent requests always plan against applied state.
pub(crate) fn lock_board(board: &Mutex<AssignmentBoard>) -> MutexGuard<'_, AssignmentBoard> {
    board.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
