/// Move the menu cursor one entry up, wrapping to the last entry.
pub fn select_prev(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        0
    } else if selected == 0 || selected >= item_count {
        item_count - 1
    } else {
        selected - 1
    }
}

/// Move the menu cursor one entry down, wrapping to the first entry.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if selected + 1 < item_count {
        selected + 1
    } else {
        0
    }
}
