/// Events marshalled from background workers onto the UI loop.
///
/// Workers never touch `TuiState` directly; they send one of these over an
/// unbounded channel and the `tokio::select!` loop applies it on the UI
/// side.
#[derive(Debug)]
pub enum AppEvent {
    /// The synthesis worker finished; on success the artifact has already
    /// been written to its working path.
    SynthesisFinished(Result<(), String>),
}
