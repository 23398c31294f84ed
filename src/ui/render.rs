use ratatui::{style::Style, widgets::Block, Frame};

use chirptui::feed::Post;
use chirptui::Screen;

use super::{dialogs, layout, legend, nav_bar, profile, theme::Palette, timeline, toast, top_bar};
use crate::App;

const EMPTY_TIMELINE: &str = "Welcome to your timeline";

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let palette = Palette::for_mode(app.model.ui.theme);
    let screen = app.model.ui.screen;
    let vim_mode = app.model.ui.vim_mode;

    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        size,
    );

    let legend_height = legend::calculate_legend_height(size.width, vim_mode, screen, &palette);
    let layout_info = layout::calculate_layout(size, legend_height);

    top_bar::render_top_bar(f, layout_info.top_area, screen, app.model.ui.theme, &palette);

    match screen {
        Screen::Timeline => {
            timeline::render_post_list(
                f,
                layout_info.content_area,
                app.feed.list(),
                &mut app.model.navigation,
                &palette,
                EMPTY_TIMELINE,
            );
        }
        Screen::Profile => {
            let post_count = app.own_post_count();
            let own_posts: Vec<Post> = app
                .feed
                .posts_by(&app.feed.author().handle)
                .cloned()
                .collect();
            profile::render_profile(
                f,
                layout_info.content_area,
                &app.profile,
                app.feed.author(),
                post_count,
                &own_posts,
                &mut app.model.profile_posts,
                app.model.ui.profile_tab,
                &palette,
            );
        }
    }

    legend::render_legend(f, layout_info.legend_area, vim_mode, screen, &palette);
    nav_bar::render_nav_bar(f, layout_info.nav_area, screen, &palette);

    // Popups draw over everything else
    if let Some(detail) = &app.model.ui.post_detail {
        if let Some(post) = app.feed.get(detail.post_id) {
            dialogs::render_post_detail(
                f,
                post,
                detail,
                app.image_state_map.get_mut(&detail.post_id),
                &palette,
            );
        }
    }

    if let Some(compose) = &app.model.ui.compose {
        dialogs::render_compose_dialog(f, compose, &palette);
    }

    if let Some((message, _timestamp)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message, &palette);
    }
}
