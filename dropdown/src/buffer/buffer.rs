use super::Cell;
use super::cell::BLANK;

/// A screen-sized grid of cells, stored row by row.
///
/// Frames are painted into a buffer, read back with [`Buffer::line`] in
/// tests, and turned into terminal writes with [`Buffer::changes_since`].
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK; usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    fn position(&self, offset: usize) -> (u16, u16) {
        let width = usize::from(self.width).max(1);
        ((offset % width) as u16, (offset / width) as u16)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.cells.get(self.offset(x, y)?)
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        let offset = self.offset(x, y)?;
        self.cells.get_mut(offset)
    }

    /// Writes outside the grid are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Characters of row `y` as printed, so a wide character counts once.
    pub fn line(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let width = usize::from(self.width);
        let start = usize::from(y) * width;
        self.cells[start..start + width]
            .iter()
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }

    /// Cells to write so a screen showing `previous` shows `self`.
    ///
    /// When the sizes differ nothing on screen can be reused and every cell
    /// is returned.
    pub fn changes_since(&self, previous: &Buffer) -> Vec<(u16, u16, Cell)> {
        let repaint = self.size() != previous.size();
        self.cells
            .iter()
            .enumerate()
            .filter(|&(offset, cell)| repaint || previous.cells.get(offset) != Some(cell))
            .map(|(offset, cell)| {
                let (x, y) = self.position(offset);
                (x, y, *cell)
            })
            .collect()
    }

    /// Blank every cell, keeping the size.
    pub fn reset(&mut self) {
        self.cells.fill(BLANK);
    }
}
