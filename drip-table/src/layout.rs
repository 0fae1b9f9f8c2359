//! Presentation selection.

use serde::{Deserialize, Serialize};

use crate::column::ColumnSchema;
use crate::props::TableProps;
use crate::slot::SlotSchema;
use crate::state::TableState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableLayout {
    #[default]
    Table,
    Card,
    Calendar,
}

impl TableLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableLayout::Table => "table",
            TableLayout::Card => "card",
            TableLayout::Calendar => "calendar",
        }
    }
}

/// Everything a layout renderer gets to see.
#[derive(Clone, Copy, Debug)]
pub struct LayoutContext<'a> {
    pub props: &'a TableProps,
    pub columns: &'a [ColumnSchema],
    pub state: &'a TableState,
    pub header: Option<&'a SlotSchema>,
}

/// Renders one resolved table in a specific presentation.
///
/// Only the table layout has a footer.
pub trait LayoutRenderer {
    type Output;

    fn render_table(&mut self, context: &LayoutContext, footer: Option<&SlotSchema>)
        -> Self::Output;

    fn render_card(&mut self, context: &LayoutContext) -> Self::Output;

    fn render_calendar(&mut self, context: &LayoutContext) -> Self::Output;
}

/// Dispatch to the renderer matching the current layout of `context.state`.
pub fn render_layout<R: LayoutRenderer + ?Sized>(
    renderer: &mut R,
    context: &LayoutContext,
    footer: Option<&SlotSchema>,
) -> R::Output {
    log::debug!("rendering {} layout", context.state.layout.as_str());

    match context.state.layout {
        TableLayout::Table => renderer.render_table(context, footer),
        TableLayout::Card => renderer.render_card(context),
        TableLayout::Calendar => renderer.render_calendar(context),
    }
}
