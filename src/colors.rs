//! Display colors handed out to touches.

use std::collections::VecDeque;

pub type Color = &'static str;

pub const COLORS: [Color; 10] = [
    "#00f2a5", "#35a7ff", "#ffb84d", "#ff6b6b", "#a855f7", "#f97316", "#22d3ee", "#facc15",
    "#14f195", "#e11d48",
];

/// FIFO queue of colors not currently assigned to a touch.
#[derive(Debug, Clone)]
pub struct ColorPool {
    available: VecDeque<Color>,
}

impl Default for ColorPool {
    fn default() -> Self {
        Self {
            available: COLORS.into_iter().collect(),
        }
    }
}

impl ColorPool {
    /// Next free color, or the first palette color once the pool runs dry.
    pub fn take(&mut self) -> Color {
        self.available.pop_front().unwrap_or(COLORS[0])
    }

    pub fn give_back(&mut self, color: Color) {
        if !self.available.contains(&color) {
            self.available.push_back(color);
        }
    }

    pub fn reset(&mut self) {
        self.available.clear();
        self.available.extend(COLORS);
    }

    pub fn available(&self) -> impl Iterator<Item = Color> + '_ {
        self.available.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.available.len()
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn hands_out_palette_in_order() {
        let mut pool = ColorPool::default();
        let taken: Vec<_> = (0..COLORS.len()).map(|_| pool.take()).collect();
        assert_eq!(taken, COLORS);
        assert!(pool.is_empty());
        assert_eq!(pool.take(), COLORS[0]);
    }

    #[test]
    fn returned_color_goes_to_the_back_once() {
        let mut pool = ColorPool::default();
        let first = pool.take();
        pool.give_back(first);
        pool.give_back(first);
        assert_eq!(pool.len(), COLORS.len());
        assert_eq!(pool.available().last(), Some(first));

        let unique: HashSet<_> = pool.available().collect();
        assert_eq!(unique.len(), COLORS.len());
    }

    #[test]
    fn reset_restores_original_order() {
        let mut pool = ColorPool::default();
        let a = pool.take();
        pool.take();
        pool.give_back(a);
        pool.reset();
        assert!(pool.available().eq(COLORS));
    }
}
