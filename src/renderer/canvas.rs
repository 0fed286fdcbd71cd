//! Character grid the frame is composed into before it hits the terminal

/// A fixed-size grid of characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    /// Blank canvas (all spaces)
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    pub fn set(&mut self, x: i32, y: i32, ch: char) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = ch;
        }
    }

    /// Write a string starting at (x, y), clipping anything off-canvas
    pub fn put_str(&mut self, x: i32, y: i32, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.set(x + i as i32, y, ch);
        }
    }

    /// Write `ch` repeated `count` times starting at (x, y)
    pub fn put_run(&mut self, x: i32, y: i32, ch: char, count: i32) {
        for i in 0..count.max(0) {
            self.set(x + i, y, ch);
        }
    }

    /// Box-drawing border around the canvas edge
    pub fn draw_border(&mut self) {
        if self.width < 2 || self.height < 2 {
            return;
        }
        let (right, bottom) = (self.width as i32 - 1, self.height as i32 - 1);
        self.put_run(1, 0, '─', right - 1);
        self.put_run(1, bottom, '─', right - 1);
        for y in 1..bottom {
            self.set(0, y, '│');
            self.set(right, y, '│');
        }
        self.set(0, 0, '┌');
        self.set(right, 0, '┐');
        self.set(0, bottom, '└');
        self.set(right, bottom, '┘');
    }

    /// Rows as strings, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_str_clips() {
        let mut canvas = Canvas::new(5, 2);
        canvas.put_str(3, 0, "abcd");
        canvas.put_str(-2, 1, "xyz");
        let rows: Vec<String> = canvas.rows().collect();
        assert_eq!(rows, vec!["   ab", "z    "]);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut canvas = Canvas::new(3, 3);
        canvas.set(3, 0, 'x');
        canvas.set(0, -1, 'x');
        canvas.put_str(0, 7, "xx");
        assert!(canvas.rows().all(|row| row == "   "));
        assert_eq!(canvas.get(5, 0), None);
    }

    #[test]
    fn test_border() {
        let mut canvas = Canvas::new(4, 3);
        canvas.draw_border();
        let rows: Vec<String> = canvas.rows().collect();
        assert_eq!(rows, vec!["┌──┐", "│  │", "└──┘"]);
    }
}
