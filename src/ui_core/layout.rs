//! Shared screen geometry.
//!
//! The renderer and the mouse hit-testing both call into this module, so a
//! click is judged against exactly the rows and columns that were drawn.

use ratatui::layout::{Constraint, Layout, Rect};

/// Vertical chrome shared by every screen
pub struct Chrome {
    pub header: Rect,
    pub filter: Option<Rect>,
    pub body: Rect,
    pub debug: Option<Rect>,
    pub footer: Rect,
}

/// Split the full frame into header / optional filter bar / body /
/// optional debug panel / footer
pub fn chrome(area: Rect, filter_expanded: bool, show_debug: bool) -> Chrome {
    let mut constraints = vec![
        Constraint::Length(1), // header
    ];
    if filter_expanded {
        constraints.push(Constraint::Length(3)); // filter bar
    }
    constraints.push(Constraint::Min(0)); // body
    if show_debug {
        constraints.push(Constraint::Length(8)); // debug panel
    }
    constraints.push(Constraint::Length(1)); // footer

    let rows = Layout::vertical(constraints).split(area);

    let mut i = 0;
    let header = rows[i];
    i += 1;
    let filter = if filter_expanded {
        let r = rows[i];
        i += 1;
        Some(r)
    } else {
        None
    };
    let body = rows[i];
    i += 1;
    let debug = if show_debug {
        let r = rows[i];
        i += 1;
        Some(r)
    } else {
        None
    };
    let footer = rows[i];

    Chrome {
        header,
        filter,
        body,
        debug,
        footer,
    }
}

/// Home screen geometry: content area, centered button, optional panel
pub struct HomeLayout {
    pub content: Rect,
    pub button: Rect,
    pub panel: Option<Rect>,
}

/// Home screen: panel docks right when open, content fills the rest
pub fn home_layout(body: Rect, panel_open: bool) -> HomeLayout {
    if panel_open {
        let w = panel_width(body.width);
        let cols = Layout::horizontal([Constraint::Min(0), Constraint::Length(w)]).split(body);
        HomeLayout {
            content: cols[0],
            button: button_rect(cols[0]),
            panel: Some(cols[1]),
        }
    } else {
        HomeLayout {
            content: body,
            button: button_rect(body),
            panel: None,
        }
    }
}

/// Panel width: 2/5 of the body, clamped to a usable range
pub fn panel_width(total: u16) -> u16 {
    ((total as u32 * 2 / 5) as u16).clamp(24, 40).min(total)
}

/// Fixed-size "Show Providers" button centered in `area`
pub fn button_rect(area: Rect) -> Rect {
    const W: u16 = 18;
    const H: u16 = 3;
    let w = W.min(area.width);
    let h = H.min(area.height);
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

/// Interior of a bordered rect (1-cell margin on every side)
pub fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
