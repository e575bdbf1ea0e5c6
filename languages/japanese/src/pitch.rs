use serde::Serialize;

/// Tone of one span of a reading. The final variants tag the trailing span
/// after the last accent transition so it can be styled distinctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Low,
    High,
    LowFinal,
    HighFinal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PitchSpan {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PitchError {
    #[error("pitch pattern has {markers} markers for a reading of {reading} characters")]
    LengthMismatch { reading: usize, markers: usize },

    #[error("pitch marker {index} is {found:?}, expected 'L' or 'H'")]
    InvalidMarker { index: usize, found: char },
}

/// Split `reading` into alternating low/high spans according to `markers`.
///
/// `markers` holds one `'L'`/`'H'` per accent slot, one more slot than
/// `reading` has characters. Every L→H or H→L transition between slots
/// `i-1` and `i` cuts the reading before character `i`. The spans
/// concatenate back to exactly `reading`.
pub fn segment(reading: &str, markers: &str) -> Result<Vec<PitchSpan>, PitchError> {
    let marks: Vec<char> = markers.chars().collect();
    let reading_len = reading.chars().count();

    if marks.len() != reading_len + 1 {
        return Err(PitchError::LengthMismatch {
            reading: reading_len,
            markers: marks.len(),
        });
    }
    if let Some((index, &found)) = marks
        .iter()
        .enumerate()
        .find(|&(_, &mark)| mark != 'L' && mark != 'H')
    {
        return Err(PitchError::InvalidMarker { index, found });
    }

    // Byte offset of every char boundary, so borders can slice the reading
    let mut bounds: Vec<usize> = reading.char_indices().map(|(offset, _)| offset).collect();
    bounds.push(reading.len());

    let mut spans = Vec::new();
    let mut low = marks[0] == 'L';
    let mut last_border = 0;

    for border in 1..marks.len() {
        if marks[border - 1] == marks[border] {
            continue;
        }
        spans.push(PitchSpan {
            text: reading[bounds[last_border]..bounds[border]].to_string(),
            tone: if low { Tone::Low } else { Tone::High },
        });
        last_border = border;
        low = !low;
    }

    // No transition after the last border; tag the remainder as final
    if last_border != reading_len {
        spans.push(PitchSpan {
            text: reading[bounds[last_border]..].to_string(),
            tone: if low { Tone::LowFinal } else { Tone::HighFinal },
        });
    }

    Ok(spans)
}
