//! Click policy for the home screen.
//!
//! Pure decision logic: a left click plus the frame geometry resolve to one
//! `ClickAction`, and the event loop only executes it. Keeping the branching
//! here means the panel / button / outside rules are testable without a
//! terminal.

use ratatui::layout::Position;

use super::layout::{inset, HomeLayout};

/// What a left click on the home screen resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// Activate the panel entry at this absolute list index.
    ActivateRow(usize),
    /// Press the Show Providers button.
    PressButton,
    /// Button hit while the panel is open; the click is swallowed.
    ButtonDisabled,
    /// Click landed outside panel and button while the panel is open.
    ClosePanel,
    /// Nothing to do.
    Ignore,
}

/// Resolve a left click against the home geometry.
///
/// Clicks inside the panel never dismiss it; a hit on its border is inert.
/// `panel_offset` is the list scroll offset, so the returned row index is
/// absolute.
pub fn resolve_click(geom: &HomeLayout, panel_offset: usize, pos: Position) -> ClickAction {
    if let Some(panel) = geom.panel {
        if panel.contains(pos) {
            let inner = inset(panel);
            if inner.contains(pos) {
                return ClickAction::ActivateRow(panel_offset + (pos.y - inner.y) as usize);
            }
            return ClickAction::Ignore;
        }
    }

    if geom.button.contains(pos) {
        return if geom.panel.is_some() {
            ClickAction::ButtonDisabled
        } else {
            ClickAction::PressButton
        };
    }

    if geom.panel.is_some() {
        return ClickAction::ClosePanel;
    }
    ClickAction::Ignore
}
