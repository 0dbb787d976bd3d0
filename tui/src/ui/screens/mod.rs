pub mod predict;

/// What the event loop should do after a key press.
pub enum Action {
    None,
    Quit,
}
