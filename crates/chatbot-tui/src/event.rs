//! Event types for communication between the reply scheduler and UI.

use chatbot_core::PendingReply;

/// Events sent from the background scheduler to the UI thread.
#[derive(Debug)]
pub enum UiEvent {
    /// A reply's delay has elapsed and it can be appended.
    ReplyDue(PendingReply),
}

/// Commands sent from the UI to the background scheduler.
#[derive(Debug)]
pub enum BackendCommand {
    /// Start the timer for a reply.
    ScheduleReply(PendingReply),

    /// Stop the scheduler; outstanding timers are dropped.
    Quit,
}
