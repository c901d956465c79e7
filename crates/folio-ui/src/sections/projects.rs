//! Project cards.

use folio_common::{Action, DrawText, Fill, Rect};

use super::{band, header, GAP, SECTION_PAD};
use crate::content::{ProjectStatus, PROJECTS, PROJECTS_URL};
use crate::layout::metrics::{self, columns_for, grid};
use crate::layout::{BadgeStyle, ButtonStyle, Painter, BADGE_HEIGHT};
use crate::motion::RevealStyle;
use crate::theme::Theme;

const LEAD: &str = "A showcase of my latest work, from web applications to 3D experiences. Each project represents a step in my journey as a developer.";

const PAD: f32 = 24.0;

pub(crate) fn status_fill(theme: &Theme, status: ProjectStatus) -> Fill {
    let palette = theme.palette;
    match status {
        ProjectStatus::Featured => theme.gradient(),
        ProjectStatus::New => Fill::Solid(palette.success),
        ProjectStatus::Popular => Fill::Solid(palette.accent),
        ProjectStatus::Active => Fill::Solid(palette.primary),
        ProjectStatus::Classic | ProjectStatus::Tool => Fill::Solid(palette.secondary),
    }
}

pub(crate) fn build(p: &mut Painter, top: f32) -> f32 {
    let first = p.list.base_quads.len();
    let palette = p.theme.palette;
    let (x, width) = metrics::content_column(p.width);
    let mut y = header(p, "projects.header", top + SECTION_PAD, "My ", "Projects", LEAD);

    let count = columns_for(p.width, 2, 3);
    let cols = grid(width, count, GAP);
    let title = p.theme.rem(1.25);
    let body = p.theme.base;
    let body_lh = body * p.theme.line_height;

    for (row, chunk) in PROJECTS.chunks(count).enumerate() {
        let row_h = chunk
            .iter()
            .zip(&cols)
            .map(|(project, &(_, w))| {
                let inner = w - PAD * 2.0;
                PAD * 2.0
                    + title * 1.4
                    + 16.0
                    + metrics::text_height(project.description, body, body_lh, inner)
                    + 24.0
                    + p.badges_height(project.tech, inner)
                    + 24.0
                    + 36.0
            })
            .fold(0.0, f32::max);

        for (i, (project, &(cx, w))) in chunk.iter().zip(&cols).enumerate() {
            let index = row * count + i;
            let card = Rect::new(x + cx, y, w, row_h);
            let mut rv = p.reveal(("projects.card", index), card, index as f32 * p.stagger, RevealStyle::Rise);
            let hovered = p.hovered(card);
            if hovered {
                rv.dy -= 10.0;
            }
            p.card(card, &rv);

            let inner = w - PAD * 2.0;
            let left = x + cx + PAD;
            let mut cy = y + PAD;

            let status_w = metrics::text_width(project.status.label(), p.theme.rem(0.75), false) + 20.0;
            let title_color = if hovered { palette.primary } else { palette.text };
            p.text(
                DrawText::new(project.title, left, cy, title, title_color)
                    .bold()
                    .wrap(inner - status_w - 8.0),
                &rv,
            );
            let status = BadgeStyle::Filled(status_fill(p.theme, project.status));
            p.badge(
                left + inner - status_w,
                cy + (title * 1.4 - BADGE_HEIGHT) * 0.5,
                project.status.label(),
                status,
                &rv,
            );
            cy += title * 1.4 + 16.0;
            cy += p.paragraph(project.description, left, cy, inner, body, &rv) + 24.0;
            cy += p.badges(left, cy, inner, project.tech, BadgeStyle::Outline, &rv) + 24.0;

            // Buttons sit at the bottom of the card so rows line up.
            let by = (y + row_h - PAD - 36.0).max(cy);
            let bw = (inner - 12.0) * 0.5;
            p.button(
                Rect::new(left, by, bw, 36.0),
                "Code",
                ButtonStyle::Outline,
                Action::OpenLink(project.github.to_string()),
                &rv,
            );
            p.button(
                Rect::new(left + bw + 12.0, by, bw, 36.0),
                "Live",
                ButtonStyle::Primary,
                Action::OpenLink(project.live.to_string()),
                &rv,
            );
        }
        y += row_h + GAP;
    }

    y += 48.0 - GAP;
    let bw = 300.0f32.min(width);
    let button = Rect::new(x + (width - bw) * 0.5, y, bw, 48.0);
    let rv = p.reveal(("projects.all", 0), button, 0.3, RevealStyle::Rise);
    p.button(
        button,
        "View All Projects on GitHub",
        ButtonStyle::Outline,
        Action::OpenLink(PROJECTS_URL.to_string()),
        &rv,
    );
    let height = y + 48.0 + SECTION_PAD - top;
    band(p, first, top, height);
    height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::RevealTracker;
    use folio_common::{Color, DrawList};

    #[test]
    fn status_colours() {
        let theme = Theme::default();
        assert_eq!(status_fill(&theme, ProjectStatus::Featured), theme.gradient());
        assert_eq!(
            status_fill(&theme, ProjectStatus::New),
            Fill::Solid(theme.palette.success)
        );
        assert_eq!(
            status_fill(&theme, ProjectStatus::Tool),
            status_fill(&theme, ProjectStatus::Classic)
        );
        assert_ne!(
            status_fill(&theme, ProjectStatus::Active),
            Fill::Solid(Color::WHITE)
        );
    }

    #[test]
    fn every_card_links_code_and_live() {
        let mut list = DrawList::new();
        let theme = Theme::default();
        let mut reveal = RevealTracker::new(0.6, 30.0, true);
        let mut p = Painter {
            list: &mut list,
            theme: &theme,
            reveal: &mut reveal,
            scroll: 0.0,
            width: 1280.0,
            height: 5000.0,
            now: 0.0,
            stagger: 0.1,
            pointer: None,
        };
        build(&mut p, 0.0);
        let links: Vec<_> = list
            .hits
            .iter()
            .filter_map(|h| match &h.action {
                Action::OpenLink(url) => Some(url.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(links.len(), PROJECTS.len() * 2 + 1);
        assert_eq!(links.last().map(String::as_str), Some(PROJECTS_URL));
    }
}
