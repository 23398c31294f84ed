//! Navigation methods
//!
//! Moving the timeline selection and switching between screens.

use chirptui::{logic, ProfileTab, Screen};

use crate::{log_debug, App};

impl App {
    pub(crate) fn select_next(&mut self) {
        let nav = &mut self.model.navigation;
        nav.selected = logic::navigation::next_selection(nav.selected, self.feed.len());
    }

    pub(crate) fn select_prev(&mut self) {
        let nav = &mut self.model.navigation;
        nav.selected = logic::navigation::prev_selection(nav.selected, self.feed.len());
    }

    pub(crate) fn page_down(&mut self, page: usize) {
        let nav = &mut self.model.navigation;
        nav.selected = logic::navigation::page_down(nav.selected, self.feed.len(), page);
    }

    pub(crate) fn page_up(&mut self, page: usize) {
        let nav = &mut self.model.navigation;
        nav.selected = logic::navigation::page_up(nav.selected, self.feed.len(), page);
    }

    pub(crate) fn select_last(&mut self) {
        self.model.navigation.selected = logic::navigation::last_selection(self.feed.len());
    }

    /// "Home" tab: show the timeline scrolled to the newest post
    pub(crate) fn go_home(&mut self) {
        self.model.ui.screen = Screen::Timeline;
        self.model.navigation.scroll_to_head(self.feed.len());
    }

    pub(crate) fn go_to_profile(&mut self) {
        log_debug("Showing profile");
        self.model.ui.screen = Screen::Profile;
        self.model.ui.profile_tab = ProfileTab::Posts;
        let own = self.own_post_count();
        self.model.profile_posts.scroll_to_head(own);
    }

    pub(crate) fn select_next_own_post(&mut self) {
        let own = self.own_post_count();
        let nav = &mut self.model.profile_posts;
        nav.selected = logic::navigation::next_selection(nav.selected, own);
    }

    pub(crate) fn select_prev_own_post(&mut self) {
        let own = self.own_post_count();
        let nav = &mut self.model.profile_posts;
        nav.selected = logic::navigation::prev_selection(nav.selected, own);
    }

    /// Back from the profile keeps the timeline position
    pub(crate) fn leave_profile(&mut self) {
        self.model.ui.screen = Screen::Timeline;
        let nav = &mut self.model.navigation;
        nav.selected = logic::navigation::clamp_selection(nav.selected, self.feed.len());
    }

    pub(crate) fn next_profile_tab(&mut self) {
        self.model.ui.profile_tab = logic::ui::next_profile_tab(self.model.ui.profile_tab);
    }

    pub(crate) fn prev_profile_tab(&mut self) {
        self.model.ui.profile_tab = logic::ui::prev_profile_tab(self.model.ui.profile_tab);
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.model.ui.toggle_theme();
        log_debug(&format!("Theme switched to {}", self.model.ui.theme.as_str()));
    }

    /// Posts written by the logged-in user, newest first
    pub(crate) fn own_post_count(&self) -> usize {
        self.feed.posts_by(&self.feed.author().handle).count()
    }
}
