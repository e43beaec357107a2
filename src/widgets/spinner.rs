/// Braille throbber frames, advanced once per UI tick
const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Tick-driven loading indicator
///
/// The event loop calls [`Spinner::tick`] on every poll timeout; rendering
/// reads the current frame. Harmless to tick while nothing is loading.
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Self { frame: 0 }
    }

    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn glyph(&self) -> char {
        FRAMES[self.frame]
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_frame() {
        let mut spinner = Spinner::new();
        let first = spinner.glyph();
        spinner.tick();
        assert_ne!(spinner.glyph(), first);
    }

    #[test]
    fn test_tick_wraps() {
        let mut spinner = Spinner::new();
        let first = spinner.glyph();
        for _ in 0..FRAMES.len() {
            spinner.tick();
        }
        assert_eq!(spinner.glyph(), first);
    }
}
