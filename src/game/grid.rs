use crate::consts;
use ratatui::layout::{Position, Positions, Rect, Size};
use thiserror::Error;

/// The playing field: a rectangle of cells with the origin at the top-left
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    /// Carve a canvas of `canvas_width` × `canvas_height` units into square
    /// cells `cell_size` units on a side.  Any partial cells at the right or
    /// bottom edge are dropped.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `cell_size` is zero, if the resulting grid is too
    /// small to hold a freshly-started snake, or if it is too big to fit on
    /// the screen.
    pub(crate) fn from_canvas(
        canvas_width: u32,
        canvas_height: u32,
        cell_size: u32,
    ) -> Result<Grid, GridError> {
        if cell_size == 0 {
            return Err(GridError::ZeroCellSize);
        }
        let too_big = || GridError::TooBig {
            max_width: consts::MAX_GRID_SIZE.width,
            max_height: consts::MAX_GRID_SIZE.height,
        };
        let width = u16::try_from(canvas_width / cell_size).map_err(|_| too_big())?;
        let height = u16::try_from(canvas_height / cell_size).map_err(|_| too_big())?;
        let min = Self::min_size();
        if width < min.width || height < min.height {
            return Err(GridError::TooSmall {
                width,
                height,
                min_width: min.width,
                min_height: min.height,
            });
        }
        if width > consts::MAX_GRID_SIZE.width || height > consts::MAX_GRID_SIZE.height {
            return Err(too_big());
        }
        Ok(Grid { width, height })
    }

    /// The smallest grid on which the initial snake can make at least one
    /// move in its starting direction
    fn min_size() -> Size {
        let head = consts::INITIAL_SNAKE[0];
        Size {
            width: head.x.saturating_add(2),
            height: head.y.saturating_add(1),
        }
    }

    /// Largest valid x coordinate
    pub(crate) fn max_x(self) -> u16 {
        self.width - 1
    }

    /// Largest valid y coordinate
    pub(crate) fn max_y(self) -> u16 {
        self.height - 1
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    #[cfg(test)]
    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x <= self.max_x() && pos.y <= self.max_y()
    }

    /// Iterate over every cell in the grid, row by row
    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid {
            width: 30,
            height: 20,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum GridError {
    #[error("cell size must be nonzero")]
    ZeroCellSize,
    #[error("grid of {width}x{height} cells is too small; must be at least {min_width}x{min_height}")]
    TooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
    #[error("grid is too big to display; must be at most {max_width}x{max_height} cells")]
    TooBig { max_width: u16, max_height: u16 },
}
