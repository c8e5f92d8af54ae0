use crate::theme::PaletteType;

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSelectionState {
    pub selected_index: usize,
    pub themes: Vec<PaletteType>,
}

impl ThemeSelectionState {
    /// Opens with the active theme highlighted.
    #[must_use]
    pub fn starting_at(current: PaletteType) -> Self {
        let themes = PaletteType::all().to_vec();
        let selected_index = themes.iter().position(|t| *t == current).unwrap_or(0);
        Self {
            selected_index,
            themes,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<PaletteType> {
        self.themes.get(self.selected_index).copied()
    }

    /// Moves the highlight by `step` rows, wrapping at either end.
    pub fn step(&mut self, step: isize) {
        let Ok(len) = isize::try_from(self.themes.len()) else {
            return;
        };
        if len == 0 {
            return;
        }
        let current = isize::try_from(self.selected_index).unwrap_or(0);
        self.selected_index = usize::try_from((current + step).rem_euclid(len)).unwrap_or(0);
    }
}

impl Default for ThemeSelectionState {
    fn default() -> Self {
        Self::starting_at(PaletteType::default())
    }
}
