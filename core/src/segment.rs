/// Whether a run carries tone or silence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Tone,
    Silence,
}

impl RunState {
    fn from_bit(bit: u8) -> Self {
        if bit != 0 {
            RunState::Tone
        } else {
            RunState::Silence
        }
    }

    fn toggled(self) -> Self {
        match self {
            RunState::Tone => RunState::Silence,
            RunState::Silence => RunState::Tone,
        }
    }
}

/// Maximal stretch of the binary signal in one state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub state: RunState,
    /// Length in samples
    pub duration: usize,
}

impl Run {
    pub fn is_tone(&self) -> bool {
        self.state == RunState::Tone
    }

    pub fn seconds(&self, sample_rate: u32) -> f64 {
        self.duration as f64 / sample_rate as f64
    }
}

/// Split a binary signal into alternating tone/silence runs
///
/// Boundaries are index 0, every index whose sample differs from its
/// predecessor, and the signal length. Run lengths are the differences
/// between successive boundaries. A signal with no transitions yields a
/// single run covering all of it.
pub fn segment(binary: &[u8]) -> Vec<Run> {
    let Some(&first) = binary.first() else {
        return Vec::new();
    };

    let mut boundaries = Vec::with_capacity(2);
    boundaries.push(0);
    boundaries.extend(
        binary
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| (pair[0] != 0) != (pair[1] != 0))
            .map(|(i, _)| i + 1),
    );
    boundaries.push(binary.len());

    let mut state = RunState::from_bit(first);
    let mut runs = Vec::with_capacity(boundaries.len() - 1);
    for edge in boundaries.windows(2) {
        runs.push(Run {
            state,
            duration: edge[1] - edge[0],
        });
        state = state.toggled();
    }
    runs
}
