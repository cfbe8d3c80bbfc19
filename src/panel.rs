//! Live parameter panel.
//!
//! Keyboard-driven stand-in for a GUI control panel: Tab cycles through the
//! generation parameters, the arrow keys nudge the selected one, R runs a
//! full regenerate (new island seeds) and U re-runs the sweep with the same
//! seeds. The panel edits its own parameter copy and hands snapshots to the
//! generator; it never touches generator internals.

use winit::keyboard::KeyCode;

use crate::params::TerrainParams;

/// Generation action requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    /// Scatter new seed points, then sweep
    Regenerate,
    /// Keep the current seed points, re-sweep with the edited parameters
    Update,
}

/// Editable parameter slots, in panel order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    NumIslands,
    IslandThreshold,
    VoronoiFalloff,
    WarpStrength,
    WarpOffset,
    WarpFrequency,
    TerrainFrequency,
    PeaksFrequency,
    PeaksAmplitude,
    IslandsWeight,
    TerrainWeight,
    PeaksWeight,
    SeaFloor,
    EdgeFalloff,
}

const SLOTS: &[Slot] = &[
    Slot::NumIslands,
    Slot::IslandThreshold,
    Slot::VoronoiFalloff,
    Slot::WarpStrength,
    Slot::WarpOffset,
    Slot::WarpFrequency,
    Slot::TerrainFrequency,
    Slot::PeaksFrequency,
    Slot::PeaksAmplitude,
    Slot::IslandsWeight,
    Slot::TerrainWeight,
    Slot::PeaksWeight,
    Slot::SeaFloor,
    Slot::EdgeFalloff,
];

/// Keyboard control panel state
pub struct ControlPanel {
    selected: usize,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Name of the currently selected parameter.
    pub fn selected_name(&self) -> &'static str {
        match SLOTS[self.selected] {
            Slot::NumIslands => "num_islands",
            Slot::IslandThreshold => "island_threshold",
            Slot::VoronoiFalloff => "voronoi_falloff",
            Slot::WarpStrength => "warp_strength",
            Slot::WarpOffset => "warp_offset",
            Slot::WarpFrequency => "warp_frequency",
            Slot::TerrainFrequency => "terrain_frequency",
            Slot::PeaksFrequency => "peaks_frequency",
            Slot::PeaksAmplitude => "peaks_amplitude",
            Slot::IslandsWeight => "islands_weight",
            Slot::TerrainWeight => "terrain_weight",
            Slot::PeaksWeight => "peaks_weight",
            Slot::SeaFloor => "sea_floor",
            Slot::EdgeFalloff => "edge_falloff",
        }
    }

    /// Current value of the selected parameter.
    pub fn selected_value(&self, params: &TerrainParams) -> f32 {
        match SLOTS[self.selected] {
            Slot::NumIslands => params.num_islands as f32,
            Slot::IslandThreshold => params.island_threshold,
            Slot::VoronoiFalloff => params.voronoi_falloff,
            Slot::WarpStrength => params.warp_strength,
            Slot::WarpOffset => params.warp_offset,
            Slot::WarpFrequency => params.warp_frequency,
            Slot::TerrainFrequency => params.terrain_frequency,
            Slot::PeaksFrequency => params.peaks_frequency,
            Slot::PeaksAmplitude => params.peaks_amplitude,
            Slot::IslandsWeight => params.islands_weight,
            Slot::TerrainWeight => params.terrain_weight,
            Slot::PeaksWeight => params.peaks_weight,
            Slot::SeaFloor => params.sea_floor,
            Slot::EdgeFalloff => params.edge_falloff,
        }
    }

    /// Handle one key press against the panel's parameter copy.
    ///
    /// Returns an action when the key asks for a generation pass.
    pub fn handle_key(
        &mut self,
        key: KeyCode,
        params: &mut TerrainParams,
    ) -> Option<PanelAction> {
        match key {
            KeyCode::Tab => {
                self.selected = (self.selected + 1) % SLOTS.len();
                log::info!(
                    "panel: selected {} = {}",
                    self.selected_name(),
                    self.selected_value(params)
                );
                None
            }
            KeyCode::ArrowUp | KeyCode::ArrowRight => {
                self.nudge(params, 1.0);
                None
            }
            KeyCode::ArrowDown | KeyCode::ArrowLeft => {
                self.nudge(params, -1.0);
                None
            }
            KeyCode::KeyR => Some(PanelAction::Regenerate),
            KeyCode::KeyU => Some(PanelAction::Update),
            _ => None,
        }
    }

    fn nudge(&self, params: &mut TerrainParams, direction: f32) {
        match SLOTS[self.selected] {
            Slot::NumIslands => {
                if direction > 0.0 {
                    params.num_islands += 1;
                } else {
                    params.num_islands = params.num_islands.saturating_sub(1);
                }
            }
            Slot::IslandThreshold => {
                params.island_threshold =
                    (params.island_threshold + direction * 0.01).clamp(0.06, 1.0)
            }
            Slot::VoronoiFalloff => {
                params.voronoi_falloff = (params.voronoi_falloff + direction * 0.5).max(0.1)
            }
            Slot::WarpStrength => {
                params.warp_strength = (params.warp_strength + direction * 2.0).max(0.0)
            }
            Slot::WarpOffset => params.warp_offset += direction * 50.0,
            Slot::WarpFrequency => {
                params.warp_frequency = (params.warp_frequency + direction * 0.002).max(0.001)
            }
            Slot::TerrainFrequency => {
                params.terrain_frequency =
                    (params.terrain_frequency + direction * 0.005).max(0.001)
            }
            Slot::PeaksFrequency => {
                params.peaks_frequency = (params.peaks_frequency + direction * 0.005).max(0.001)
            }
            Slot::PeaksAmplitude => {
                params.peaks_amplitude = (params.peaks_amplitude + direction * 0.1).max(0.0)
            }
            Slot::IslandsWeight => {
                params.islands_weight = (params.islands_weight + direction * 2.0).max(0.0)
            }
            Slot::TerrainWeight => {
                params.terrain_weight = (params.terrain_weight + direction * 1.0).max(0.0)
            }
            Slot::PeaksWeight => {
                params.peaks_weight = (params.peaks_weight + direction * 1.0).max(0.0)
            }
            Slot::SeaFloor => params.sea_floor += direction * 0.5,
            Slot::EdgeFalloff => {
                params.edge_falloff = (params.edge_falloff + direction * 0.05).clamp(0.0, 1.0)
            }
        }
        log::info!(
            "panel: {} -> {}",
            self.selected_name(),
            self.selected_value(params)
        );
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycles_through_all_slots_and_wraps() {
        let mut panel = ControlPanel::new();
        let mut params = TerrainParams::default();
        let first = panel.selected_name();
        for _ in 0..SLOTS.len() {
            assert_eq!(panel.handle_key(KeyCode::Tab, &mut params), None);
        }
        assert_eq!(panel.selected_name(), first, "full cycle must wrap around");
    }

    #[test]
    fn test_nudges_respect_bounds() {
        let mut panel = ControlPanel::new();
        let mut params = TerrainParams {
            num_islands: 0,
            ..TerrainParams::default()
        };
        // num_islands is the first slot; decrementing at zero must not wrap
        panel.handle_key(KeyCode::ArrowDown, &mut params);
        assert_eq!(params.num_islands, 0);
        panel.handle_key(KeyCode::ArrowUp, &mut params);
        assert_eq!(params.num_islands, 1);
    }

    #[test]
    fn test_threshold_nudges_keep_band_monotonic() {
        let mut panel = ControlPanel::new();
        let mut params = TerrainParams::default();
        panel.handle_key(KeyCode::Tab, &mut params); // island_threshold
        assert_eq!(panel.selected_name(), "island_threshold");
        for _ in 0..200 {
            panel.handle_key(KeyCode::ArrowDown, &mut params);
        }
        let band = params.land_transition();
        assert!(band.end > 0.0 && band.end < band.start);
    }

    #[test]
    fn test_generation_actions() {
        let mut panel = ControlPanel::new();
        let mut params = TerrainParams::default();
        assert_eq!(
            panel.handle_key(KeyCode::KeyR, &mut params),
            Some(PanelAction::Regenerate)
        );
        assert_eq!(
            panel.handle_key(KeyCode::KeyU, &mut params),
            Some(PanelAction::Update)
        );
        assert_eq!(panel.handle_key(KeyCode::KeyZ, &mut params), None);
    }
}
