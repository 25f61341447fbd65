//! The gallows and the figure hanging from it.
//!
//! Damage accumulates one point per wrong guess and caps at [`MAX_DAMAGE`].
//! Each point adds a body part to the drawing; once the figure is complete
//! the game is lost.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// Wrong guesses a game survives before it is lost
pub const MAX_DAMAGE: u8 = 6;

/// Progress toward hanging, measured in drawn body parts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallows {
    damage: u8,
}

impl Gallows {
    pub fn new() -> Self {
        Self { damage: 0 }
    }

    /// Record one more wrong guess; saturates at [`MAX_DAMAGE`]
    pub fn tighten(&mut self) {
        if self.damage < MAX_DAMAGE {
            self.damage += 1;
        }
    }

    /// True once the figure is complete
    pub fn is_dead(&self) -> bool {
        self.damage >= MAX_DAMAGE
    }

    pub fn damage(&self) -> u8 {
        self.damage
    }

    /// Wrong guesses left before the game is lost
    pub fn remaining(&self) -> u8 {
        MAX_DAMAGE.saturating_sub(self.damage)
    }

    /// Draw the scaffold and whatever body parts have been lost so far
    pub fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        frame_top(out)?;
        if self.damage >= 1 {
            head(out, self.is_dead())?;
        } else {
            empty_rows(out, 6)?;
        }
        match self.damage {
            0 | 1 => empty_rows(out, 5)?,
            2 => torso_bare(out)?,
            3 => torso_one_arm(out)?,
            _ => torso_two_arms(out)?,
        }
        match self.damage {
            0..=4 => empty_rows(out, 4)?,
            5 => leg_one(out)?,
            _ => legs_two(out)?,
        }
        empty_rows(out, 2)?;
        frame_bottom(out)?;
        writeln!(out)?;
        writeln!(
            out,
            " You have {} body part(s) left to lose.",
            self.remaining()
        )?;
        writeln!(out)
    }

    /// Draw the survivor, off the rope with both feet on the ground
    pub fn draw_winner(&self, out: &mut dyn Write) -> io::Result<()> {
        frame_top(out)?;
        empty_rows(out, 3)?;
        winner_head(out)?;
        torso_two_arms(out)?;
        legs_two(out)?;
        frame_bottom(out)
    }
}

fn frame_top(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, " ")?;
    writeln!(out, "------------8------")?;
    writeln!(out, "------------8------")?;
    writeln!(out, "            8    ||")
}

fn frame_bottom(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, " ------------------")?;
    writeln!(out, " ------------------")
}

fn empty_rows(out: &mut dyn Write, rows: usize) -> io::Result<()> {
    for _ in 0..rows {
        writeln!(out, "                 ||")?;
    }
    Ok(())
}

fn head(out: &mut dyn Write, dead: bool) -> io::Result<()> {
    writeln!(out, r"    ---     8    ||")?;
    writeln!(out, r"  /     \   8    ||")?;
    if dead {
        writeln!(out, r" |  X X  | 8     ||")?;
    } else {
        writeln!(out, r" |  * *  | 8     ||")?;
    }
    writeln!(out, r"  \  O  / 8      ||")?;
    writeln!(out, r"    ---  8       ||")?;
    writeln!(out, r"   888888        ||")
}

fn winner_head(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, r"    ---          ||")?;
    writeln!(out, r"  /     \        ||")?;
    writeln!(out, r" |  * *  |       ||")?;
    writeln!(out, r"  \ \_/ /        ||")?;
    writeln!(out, r"    ---          ||")
}

fn torso_bare(out: &mut dyn Write) -> io::Result<()> {
    for _ in 0..5 {
        writeln!(out, r"     |           ||")?;
    }
    Ok(())
}

fn torso_one_arm(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, r"    /|           ||")?;
    writeln!(out, r"   / |           ||")?;
    writeln!(out, r"  /  |           ||")?;
    writeln!(out, r" /   |           ||")?;
    writeln!(out, r"     |           ||")
}

fn torso_two_arms(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, r"    /|\          ||")?;
    writeln!(out, r"   / | \         ||")?;
    writeln!(out, r"  /  |  \        ||")?;
    writeln!(out, r" /   |   \       ||")?;
    writeln!(out, r"     |           ||")
}

fn leg_one(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, r"    /            ||")?;
    writeln!(out, r"   /             ||")?;
    writeln!(out, r"  /              ||")?;
    writeln!(out, r" /               ||")
}

fn legs_two(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, r"    / \          ||")?;
    writeln!(out, r"   /   \         ||")?;
    writeln!(out, r"  /     \        ||")?;
    writeln!(out, r" /       \       ||")
}
