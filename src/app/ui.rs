use crate::app::state::AppState;
use crate::components::donate::DonateView;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::ModalManager;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let layout = get_layout(area);
    let theme = &app_state.theme;

    if !layout.header.is_empty() {
        let header = Header {
            site: &app_state.site,
            status: app_state.donation.status,
            status_message: app_state.status_message.as_deref(),
            theme,
        };
        f.render_widget(header, layout.header);
    }

    if !layout.body.is_empty() {
        f.render_widget(DonateView { app_state, theme }, layout.body);
    }

    if !layout.footer.is_empty() {
        f.render_widget(
            Footer {
                state: app_state,
                theme,
            },
            layout.footer,
        );
    }

    f.render_widget(ModalManager { theme, app_state }, area);
}
