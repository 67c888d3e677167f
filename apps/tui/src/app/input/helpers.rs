use crate::app::gallery::GRID_COLUMNS;

pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// One row down in the grid; stays put on the last row.
pub const fn grid_down(index: usize, len: usize) -> usize {
    if index + GRID_COLUMNS < len {
        index + GRID_COLUMNS
    } else {
        index
    }
}

/// One row up in the grid; stays put on the first row.
pub const fn grid_up(index: usize) -> usize {
    if index >= GRID_COLUMNS {
        index - GRID_COLUMNS
    } else {
        index
    }
}
