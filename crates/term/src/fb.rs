//! Styled cell buffer that the game view draws into and the renderer flushes.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    /// Foreground color on a black background.
    pub const fn fg(fg: Rgb) -> Self {
        Self::new(fg, Rgb::BLACK)
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::fg(Rgb::new(220, 220, 220))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        style: CellStyle::fg(Rgb::new(220, 220, 220)),
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of styled cells. Writes outside the buffer are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Blank the buffer at the given size, reusing the allocation.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width as usize * height as usize, Cell::BLANK);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells, `None` below the last row.
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        self.cells.get(start..start + self.width as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.width {
            return None;
        }
        self.row(y).map(|row| row[x as usize])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = cell;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, style.into_cell(ch));
    }

    /// Write `s` starting at `x`, clipped at the right edge. Returns the
    /// column after the last character.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars().take(self.width.saturating_sub(x) as usize) {
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
        cx
    }

    /// Write `n` in decimal without allocating. Returns the column after the
    /// last digit.
    pub fn put_u32(&mut self, x: u16, y: u16, n: u32, style: CellStyle) -> u16 {
        let len = n.checked_ilog10().unwrap_or(0) as u16 + 1;
        let mut rest = n;
        for i in (0..len).rev() {
            let digit = char::from(b'0' + (rest % 10) as u8);
            self.put_char(x.saturating_add(i), y, digit, style);
            rest /= 10;
        }
        x.saturating_add(len)
    }

    /// Characters of row `y`, for tests and debugging.
    pub fn row_string(&self, y: u16) -> String {
        self.row(y)
            .map(|row| row.iter().map(|c| c.ch).collect())
            .unwrap_or_default()
    }
}
