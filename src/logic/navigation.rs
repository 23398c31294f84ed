//! Navigation selection logic
//!
//! Pure functions for moving the timeline selection.

/// Calculate the next selection index with wrapping
///
/// Advances the selection to the next post. If at the end, wraps around to
/// the head. If nothing is selected, selects the head.
///
/// # Examples
/// ```
/// use chirptui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// # Examples
/// ```
/// use chirptui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1,
        Some(i) => (i - 1).min(list_len - 1),
    })
}

/// Move the selection down by `page` posts, stopping at the last one
pub fn page_down(current: Option<usize>, list_len: usize, page: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).saturating_add(page.max(1)).min(list_len - 1))
}

/// Move the selection up by `page` posts, stopping at the head
pub fn page_up(current: Option<usize>, list_len: usize, page: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(list_len - 1).saturating_sub(page.max(1)))
}

/// Selection after jumping to the head of the feed ("Home")
pub fn first_selection(list_len: usize) -> Option<usize> {
    if list_len == 0 { None } else { Some(0) }
}

pub fn last_selection(list_len: usize) -> Option<usize> {
    list_len.checked_sub(1)
}

/// Keep a selection valid after the list changed length
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    match current {
        _ if list_len == 0 => None,
        Some(i) => Some(i.min(list_len - 1)),
        None => Some(0),
    }
}
