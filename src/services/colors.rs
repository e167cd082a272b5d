//! Colori dei gruppi nella lista partecipanti

use crate::entities::Attendant;
use rand::Rng;
use std::collections::HashMap;

/// Colore di visualizzazione (stringa esadecimale, es. `#3182ce`)
pub type Color = &'static str;

pub const PALETTE: &[Color] = &[
    "#e53e3e", "#dd6b20", "#d69e2e", "#38a169", "#319795", "#3182ce", "#00b5d8", "#805ad5",
    "#d53f8c", "#2c7a7b", "#2b6cb0", "#9c4221",
];

/// Strategia di generazione dei colori
pub trait ColorPicker {
    fn next_color(&mut self) -> Color;
}

/// Scelta casuale dalla palette, non deterministica
#[derive(Debug, Default)]
pub struct RandomPalette;

impl ColorPicker for RandomPalette {
    fn next_color(&mut self) -> Color {
        PALETTE[rand::thread_rng().gen_range(0..PALETTE.len())]
    }
}

/// Scorre la palette in ordine, ricominciando dall'inizio
#[derive(Debug, Default)]
pub struct CyclingPalette {
    next: usize,
}

impl ColorPicker for CyclingPalette {
    fn next_color(&mut self) -> Color {
        let color = PALETTE[self.next % PALETTE.len()];
        self.next += 1;
        color
    }
}

/// Un colore per partecipante, nello stesso ordine dell'input.
///
/// Ogni gruppo riceve un solo colore, condiviso da tutti i suoi membri;
/// ogni partecipante senza gruppo riceve invece un colore proprio.
pub fn assign_colors<P: ColorPicker>(attendants: &[Attendant], picker: &mut P) -> Vec<Color> {
    let mut by_group: HashMap<u32, Color> = HashMap::new();

    attendants
        .iter()
        .map(|attendant| match attendant.group {
            Some(group) => *by_group
                .entry(group)
                .or_insert_with(|| picker.next_color()),
            None => picker.next_color(),
        })
        .collect()
}
