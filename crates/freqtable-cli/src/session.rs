use freqtable_stats::{StatsError, data_kind::DataKind, table::FrequencyTable};

/// The observation set currently loaded in an interactive run.
///
/// Loading a new set replaces the previous one; nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct Session {
    dataset: Option<Dataset>,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub values: Vec<f64>,
    pub kind: DataKind,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the loaded observations and return the new dataset
    pub fn load(&mut self, values: Vec<f64>) -> &Dataset {
        let kind = DataKind::classify(&values);
        tracing::info!(count = values.len(), %kind, "observations loaded");
        self.dataset.insert(Dataset { values, kind })
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Compute the frequency table of the loaded observations
    ///
    /// Returns `None` if nothing has been loaded yet.
    pub fn table(&self) -> Option<Result<FrequencyTable, StatsError>> {
        self.dataset
            .as_ref()
            .map(|dataset| FrequencyTable::new(&dataset.values))
    }
}
