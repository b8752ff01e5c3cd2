//! Named colors shared by cosmetics, obstacles and crash particles.
//!
//! The simulation only picks colors; turning them into terminal styles is the
//! view layer's job.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Same hue at half brightness (pipe outlines, wing shading).
    pub fn darkened(self) -> Self {
        Rgb(self.0 / 2, self.1 / 2, self.2 / 2)
    }
}

pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const RED: Rgb = Rgb(255, 50, 50);
pub const GREEN: Rgb = Rgb(50, 200, 50);
pub const BLUE: Rgb = Rgb(50, 150, 255);
pub const YELLOW: Rgb = Rgb(255, 255, 50);
pub const PURPLE: Rgb = Rgb(180, 70, 220);
pub const CYAN: Rgb = Rgb(0, 255, 255);
pub const ORANGE: Rgb = Rgb(255, 165, 0);
pub const GOLD: Rgb = Rgb(255, 215, 0);
pub const SKY_BLUE: Rgb = Rgb(135, 206, 235);
pub const DARK_BLUE: Rgb = Rgb(25, 25, 100);
pub const NIGHT_BLUE: Rgb = Rgb(10, 10, 60);
pub const GROUND_BROWN: Rgb = Rgb(100, 70, 30);
pub const GRASS_GREEN: Rgb = Rgb(80, 150, 50);

/// Colors an obstacle may be painted with.
pub const OBSTACLE_COLORS: [Rgb; 4] = [GREEN, BLUE, RED, PURPLE];

/// Colors a crash particle may be painted with.
pub const PARTICLE_COLORS: [Rgb; 7] = [RED, ORANGE, YELLOW, GREEN, BLUE, PURPLE, CYAN];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darkened_halves_channels() {
        assert_eq!(Rgb(255, 100, 1).darkened(), Rgb(127, 50, 0));
    }
}
