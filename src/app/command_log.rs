//! Begrenzter Verlauf ausgeführter Commands.
//!
//! Die Statusleiste zeigt daraus die letzte Aktion und die Anzahl der
//! Aktionen der Sitzung; Tests prüfen darüber den Command-Fluss.

use super::AppCommand;

/// Ausgeführte Commands in Reihenfolge, plus Gesamtzähler der Sitzung.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
    total: usize,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen ausgeführten Command an.
    /// Bei MAX_ENTRIES wird die ältere Hälfte verworfen; `total` zählt weiter.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
        self.total += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anzahl aller Commands seit Start (auch verworfene).
    pub fn total(&self) -> usize {
        self.total
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_half_when_full() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::MAX_ENTRIES {
            log.record(&AppCommand::EndPress);
        }
        log.record(&AppCommand::ClearPoints);

        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        assert_eq!(log.total(), CommandLog::MAX_ENTRIES + 1);
        assert_eq!(log.last(), Some(&AppCommand::ClearPoints));
        assert_eq!(log.last().map(AppCommand::label), Some("Leeren"));
    }
}
