/// Row-based ("shelf") rectangle packer.
///
/// Rectangles are placed left to right; when a row is full a new row starts
/// below the tallest rectangle of the current one. `padding` texels are kept
/// free to the right of and below every allocation.
#[derive(Debug)]
pub(crate) struct ShelfPacker {
    width: u32,
    height: u32,
    padding: u32,
    x: u32,
    y: u32,
    row_height: u32,
}

impl ShelfPacker {
    pub(crate) fn new(width: u32, height: u32, padding: u32) -> Self {
        Self { width, height, padding, x: 0, y: 0, row_height: 0 }
    }

    /// Reserves a `w`×`h` region and returns its top-left corner.
    ///
    /// Zero-sized requests succeed without consuming space.
    pub(crate) fn alloc(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if w == 0 || h == 0 {
            return Some((0, 0));
        }
        if w > self.width || h > self.height {
            return None;
        }

        if self.x + w > self.width {
            self.y += self.row_height + self.padding;
            self.x = 0;
            self.row_height = 0;
        }
        if self.y + h > self.height {
            return None;
        }

        let pos = (self.x, self.y);
        self.x += w + self.padding;
        self.row_height = self.row_height.max(h);
        Some(pos)
    }
}
