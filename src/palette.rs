use crate::canvas::{Channel, Rgba};

/// What the pen currently paints with: either a palette slot, or a color
/// sampled straight off the canvas that has no slot (yet). The eyedropper
/// always produces the latter; `insert_derived` turns it back into a slot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PenSelection {
    Slot(usize),
    Sampled(Rgba),
}

/// The ordered, user-maintained list of colors plus the pen selection.
/// Position is identity; the same color may appear in several slots.
pub struct Palette {
    colors: Vec<Rgba>,
    pen: PenSelection,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![Rgba::TRANSPARENT, Rgba::WHITE],
            pen: PenSelection::Slot(1),
        }
    }
}

impl Palette {
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn pen(&self) -> PenSelection {
        self.pen
    }

    /// The color currently used for painting.
    pub fn pen_color(&self) -> Rgba {
        match self.pen {
            PenSelection::Slot(index) => self.colors[index],
            PenSelection::Sampled(color) => color,
        }
    }

    /// Selects an existing slot as the pen. Indices outside the palette are
    /// ignored, so a stray selection event cannot corrupt the pen.
    pub fn select_slot(&mut self, index: usize) {
        if index < self.colors.len() {
            self.pen = PenSelection::Slot(index);
        }
    }

    /// Eyedropper result: the pen detaches from the palette and holds the
    /// sampled color until a slot is derived from it.
    pub fn sample(&mut self, color: Rgba) {
        self.pen = PenSelection::Sampled(color);
    }

    /// Writes one channel of the pen's color, clamping to 0..=255. Editing
    /// a slot changes the stored palette entry; editing a sampled pen only
    /// changes the ephemeral color.
    pub fn set_channel(&mut self, channel: Channel, value: i32) {
        match &mut self.pen {
            PenSelection::Slot(index) => self.colors[*index].set_channel(channel, value),
            PenSelection::Sampled(color) => color.set_channel(channel, value),
        }
    }

    /// Adds a palette slot derived from the current pen color. With a slot
    /// selected, the copy is inserted immediately after it and later entries
    /// shift right; with a sampled pen the copy is appended at the end. The
    /// pen then points at the new slot.
    pub fn insert_derived(&mut self) {
        match self.pen {
            PenSelection::Slot(index) => {
                let copy = self.colors[index];
                self.colors.insert(index + 1, copy);
                self.pen = PenSelection::Slot(index + 1);
            }
            PenSelection::Sampled(color) => {
                self.colors.push(color);
                self.pen = PenSelection::Slot(self.colors.len() - 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette_of(colors: &[Rgba]) -> Palette {
        let mut palette = Palette::default();
        palette.colors = colors.to_vec();
        palette.pen = PenSelection::Slot(0);
        palette
    }

    #[test]
    fn insert_after_slot_shifts_later_entries() {
        let a = Rgba::new(1, 0, 0, 255);
        let b = Rgba::new(2, 0, 0, 255);
        let c = Rgba::new(3, 0, 0, 255);
        let mut palette = palette_of(&[a, b, c]);
        palette.select_slot(1);

        palette.insert_derived();

        assert_eq!(palette.len(), 4);
        assert_eq!(palette.colors(), &[a, b, b, c]);
        assert_eq!(palette.pen(), PenSelection::Slot(2));
        assert_eq!(palette.pen_color(), b);
    }

    #[test]
    fn insert_from_sampled_pen_appends() {
        let sampled = Rgba::new(9, 9, 9, 255);
        let mut palette = Palette::default();
        palette.sample(sampled);

        palette.insert_derived();

        assert_eq!(palette.len(), 3);
        assert_eq!(palette.colors()[2], sampled);
        assert_eq!(palette.pen(), PenSelection::Slot(2));
    }

    #[test]
    fn sampling_detaches_the_pen() {
        let mut palette = Palette::default();
        assert_eq!(palette.pen(), PenSelection::Slot(1));

        let color = Rgba::new(10, 20, 30, 255);
        palette.sample(color);

        assert_eq!(palette.pen(), PenSelection::Sampled(color));
        assert_eq!(palette.pen_color(), color);
        // The stored palette is untouched.
        assert_eq!(palette.colors(), &[Rgba::TRANSPARENT, Rgba::WHITE]);
    }

    #[test]
    fn eyedropper_reads_a_buffer_pixel_into_the_pen() {
        use crate::canvas::Buffer;
        use std::sync::Arc;

        let color = Rgba::new(10, 20, 30, 255);
        let buffer = Arc::new(Buffer::new(4, 4)).painted(2, 1, color);
        let mut palette = Palette::default();

        palette.sample(buffer.get(2, 1));

        assert_eq!(palette.pen(), PenSelection::Sampled(color));
        assert_eq!(palette.pen_color(), color);
    }

    #[test]
    fn set_channel_edits_the_selected_slot_in_place() {
        let mut palette = Palette::default();
        palette.select_slot(0);
        palette.set_channel(Channel::Red, 300);
        palette.set_channel(Channel::Blue, -5);

        assert_eq!(palette.colors()[0], Rgba::new(255, 0, 0, 0));
    }

    #[test]
    fn set_channel_on_sampled_pen_leaves_the_palette_alone() {
        let mut palette = Palette::default();
        palette.sample(Rgba::new(10, 10, 10, 255));
        palette.set_channel(Channel::Green, 200);

        assert_eq!(palette.pen_color(), Rgba::new(10, 200, 10, 255));
        assert_eq!(palette.colors(), &[Rgba::TRANSPARENT, Rgba::WHITE]);
    }

    #[test]
    fn invalid_slot_selection_is_ignored() {
        let mut palette = Palette::default();
        palette.select_slot(7);
        assert_eq!(palette.pen(), PenSelection::Slot(1));
    }
}
