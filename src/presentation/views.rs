use askama::{Error as AskamaError, Template};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to render {view}")]
pub struct ViewError {
    pub(crate) view: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl ViewError {
    pub fn new(view: &'static str, error: AskamaError) -> Self {
        Self { view, error }
    }
}

pub fn render_template<T: Template>(view: &'static str, template: &T) -> Result<String, ViewError> {
    template.render().map_err(|err| ViewError::new(view, err))
}

/// Renders a sequence of items as blank-line separated blocks, falling back
/// to a single empty-state line when there is nothing to show.
#[derive(Debug, Clone)]
pub struct ListView {
    view: &'static str,
    empty_state: String,
}

impl ListView {
    pub fn new(view: &'static str, empty_state: impl Into<String>) -> Self {
        Self {
            view,
            empty_state: empty_state.into(),
        }
    }

    pub fn empty_state(&self) -> &str {
        &self.empty_state
    }

    pub fn render<T, I>(&self, items: I) -> Result<String, ViewError>
    where
        T: Template,
        I: IntoIterator<Item = T>,
    {
        let blocks = items
            .into_iter()
            .map(|item| render_template(self.view, &item))
            .collect::<Result<Vec<_>, _>>()?;

        if blocks.is_empty() {
            return Ok(self.empty_state.clone());
        }
        Ok(blocks.join("\n\n"))
    }
}
