pub mod commands;
pub mod env;
pub mod expand;
pub mod tokenize;

/// Size of the line buffer: raw and expanded lines must stay below it.
pub const MAX_INPUT: usize = 1024;
/// Most tokens a single command line may carry.
pub const MAX_ARGS: usize = 128;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    /// Serialises tests that change the process working directory.
    pub(crate) static CWD_LOCK: Mutex<()> = Mutex::new(());
}
