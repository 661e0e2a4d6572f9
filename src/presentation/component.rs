use super::views::ViewError;

/// A presentation adapter that pulls current state and renders it as text.
///
/// Rendering is triggered externally; components keep no state between
/// refreshes.
pub trait Component {
    fn name(&self) -> &'static str;

    fn refresh(&self) -> Result<String, ViewError>;
}
