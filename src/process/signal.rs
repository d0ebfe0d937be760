use super::ProcessError;

/// Keeps the interpreter alive on Ctrl-C. The foreground child still gets
/// the signal and exits; exec resets the handler in children.
pub fn setup_signal_handlers() -> Result<(), ProcessError> {
    match ctrlc::set_handler(|| log::debug!("interrupt received")) {
        Ok(()) | Err(ctrlc::Error::MultipleHandlers) => Ok(()),
        Err(e) => Err(ProcessError::SignalError(e.to_string())),
    }
}
