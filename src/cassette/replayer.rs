//! Replays recorded gateway interactions from a cassette.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::format::{Cassette, GatewayMethod, Interaction};

/// Serves recorded interactions by method and path.
///
/// Lookups are keyed on the requested path rather than on call order, so a
/// replay only needs to ask for paths that were asked for while recording.
/// Repeated calls for the same key are served in recorded order.
pub struct CassetteReplayer {
    queues: HashMap<(GatewayMethod, PathBuf), Vec<Interaction>>,
    cursors: HashMap<(GatewayMethod, PathBuf), usize>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(GatewayMethod, PathBuf), Vec<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = (interaction.method, interaction.path.clone());
            queues.entry(key).or_default().push(interaction.clone());
        }
        let cursors = queues.keys().map(|k| (k.clone(), 0)).collect();
        Self { queues, cursors }
    }

    /// Load a cassette file and build a replayer for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;
        Ok(Self::new(&cassette))
    }

    /// Return the next recorded interaction for `method` on `path`.
    ///
    /// Once every recorded answer for a key has been served, the last one is
    /// served again; the filesystem is assumed not to change mid-command.
    ///
    /// # Panics
    ///
    /// Panics if the cassette never recorded `method` for `path`, listing the
    /// paths that were recorded for that method.
    pub fn next_interaction(&mut self, method: GatewayMethod, path: &Path) -> &Interaction {
        let key = (method, path.to_path_buf());

        let Some(queue) = self.queues.get(&key) else {
            let mut recorded: Vec<String> = self
                .queues
                .keys()
                .filter(|(m, _)| *m == method)
                .map(|(_, p)| p.display().to_string())
                .collect();
            recorded.sort();
            panic!(
                "Cassette has no {} interaction for {}. Recorded paths: [{}]",
                method.as_str(),
                path.display(),
                recorded.join(", ")
            );
        };

        let cursor = self.cursors.entry(key).or_insert(0);
        let index = (*cursor).min(queue.len() - 1);
        *cursor += 1;
        &queue[index]
    }
}
