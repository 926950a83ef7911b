use std::collections::HashSet;

use crate::{Res, error::Error, types::MixMode};

/// Merges two or more lanes of track URIs into one list without duplicates.
///
/// - [`MixMode::Sequential`]: lanes one after the other; a URI is kept where
///   it first appears.
/// - [`MixMode::Interleaved`]: round `i` takes element `i` of every lane in
///   lane order, skipping URIs already emitted.
///
/// # Errors
///
/// [`Error::InsufficientSources`] when fewer than two lanes have tracks.
pub fn mix(lanes: &[Vec<String>], mode: MixMode) -> Res<Vec<String>> {
    let non_empty = lanes.iter().filter(|lane| !lane.is_empty()).count();
    if non_empty < 2 {
        return Err(Error::InsufficientSources(non_empty));
    }

    let ordered: Vec<&String> = match mode {
        MixMode::Sequential => lanes.iter().flatten().collect(),
        MixMode::Interleaved => {
            let rounds = lanes.iter().map(Vec::len).max().unwrap_or(0);
            (0..rounds)
                .flat_map(|i| lanes.iter().filter_map(move |lane| lane.get(i)))
                .collect()
        }
    };

    let mut seen: HashSet<&String> = HashSet::new();
    Ok(ordered
        .into_iter()
        .filter(|uri| seen.insert(*uri))
        .cloned()
        .collect())
}
