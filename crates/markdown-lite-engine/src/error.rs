/// Failures of the render entry point.
///
/// Markdown itself never fails to render; the only fault is having nothing
/// to render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("no input text to render")]
    MissingInput,
}
